/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::common::{TupCommon, TupFactory};
use crate::err::{TupleError, contract};
use crate::read::TupRead;
use crate::swizzle::{
    gather_array, swap_source, validate_index, validate_indices, validate_min_len,
};
use num_traits::AsPrimitive;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// Tuple whose arity is part of its type.
///
/// Fixed arity tuples cannot be resized; only [DynTup](crate::DynTup)
/// implements [Resizable](crate::Resizable).
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tup<T, const N: usize> {
    pub v: [T; N],
}

pub type Tup2<T> = Tup<T, 2>;
pub type Tup3<T> = Tup<T, 3>;
pub type Tup4<T> = Tup<T, 4>;

pub type Tup2b = Tup2<i8>;
pub type Tup2s = Tup2<i16>;
pub type Tup2i = Tup2<i32>;
pub type Tup2l = Tup2<i64>;
pub type Tup2f = Tup2<f32>;
pub type Tup2d = Tup2<f64>;

pub type Tup3b = Tup3<i8>;
pub type Tup3s = Tup3<i16>;
pub type Tup3i = Tup3<i32>;
pub type Tup3l = Tup3<i64>;
pub type Tup3f = Tup3<f32>;
pub type Tup3d = Tup3<f64>;

pub type Tup4b = Tup4<i8>;
pub type Tup4s = Tup4<i16>;
pub type Tup4i = Tup4<i32>;
pub type Tup4l = Tup4<i64>;
pub type Tup4f = Tup4<f32>;
pub type Tup4d = Tup4<f64>;

/// Arity known at compile time.
pub trait FixedSize {
    const DIMENSION: usize;
}

impl<T, const N: usize> FixedSize for Tup<T, N> {
    const DIMENSION: usize = N;
}

impl<T: Default, const N: usize> Default for Tup<T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            v: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Clone, const N: usize> Tup<T, N> {
    /// Every component set to `value`.
    #[inline]
    pub fn dup(value: T) -> Self {
        Self {
            v: std::array::from_fn(|_| value.clone()),
        }
    }

    #[inline]
    pub fn try_from_slice(values: &[T]) -> Result<Self, TupleError> {
        validate_min_len(values.len(), N)?;
        Ok(Self {
            v: std::array::from_fn(|k| values[k].clone()),
        })
    }

    /// First `N` entries of `values`.
    ///
    /// # Panics
    /// When `values` holds fewer than `N` entries.
    #[inline]
    #[track_caller]
    pub fn from_slice(values: &[T]) -> Self {
        contract(Self::try_from_slice(values))
    }

    /// First `N` components of any tuple, whatever its arity.
    #[inline]
    pub fn try_from_tup<R: TupRead<T> + ?Sized>(t: &R) -> Result<Self, TupleError> {
        Self::try_from_slice(t.as_slice())
    }

    #[inline]
    #[track_caller]
    pub fn from_tup<R: TupRead<T> + ?Sized>(t: &R) -> Self {
        contract(Self::try_from_tup(t))
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.v.clone()
    }
}

impl<T, const N: usize> Tup<T, N> {
    #[inline]
    pub fn cast<V>(self) -> Tup<V, N>
    where
        T: AsPrimitive<V>,
        V: Copy + 'static,
    {
        Tup {
            v: self.v.map(|x| x.as_()),
        }
    }
}

impl<T: Clone, const N: usize> TupRead<T> for Tup<T, N> {
    #[inline(always)]
    fn size(&self) -> usize {
        N
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        &self.v
    }
}

impl<T: Clone, const N: usize> TupCommon<T> for Tup<T, N> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.v
    }

    fn try_rearrange(&mut self, indices: &[usize]) -> Result<&mut Self, TupleError> {
        validate_indices(indices, N)?;
        self.v = gather_array(&self.v, indices);
        Ok(self)
    }
}

impl<T: Clone, const N: usize> TupFactory<T> for Tup<T, N> {
    #[inline]
    fn create_with<F: FnMut(usize) -> T>(&self, f: F) -> Self {
        Self {
            v: std::array::from_fn(f),
        }
    }

    #[inline]
    fn try_create_from_slice(&self, values: &[T]) -> Result<Self, TupleError> {
        Self::try_from_slice(values)
    }
}

impl<T, const N: usize> Index<usize> for Tup<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        contract(validate_index(index, N));
        &self.v[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Tup<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        contract(validate_index(index, N));
        &mut self.v[index]
    }
}

impl<T, const N: usize> From<[T; N]> for Tup<T, N> {
    #[inline]
    fn from(v: [T; N]) -> Self {
        Self { v }
    }
}

impl<T, const N: usize> From<Tup<T, N>> for [T; N] {
    #[inline]
    fn from(t: Tup<T, N>) -> Self {
        t.v
    }
}

impl<T: Display, const N: usize> Display for Tup<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, x) in self.v.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            x.fmt(f)?;
        }
        f.write_str(")")
    }
}

macro_rules! component_type {
    ($_: ident) => {
        T
    };
}

macro_rules! generated_component_definition {
    ($N: literal; $($index: expr, $getter: ident, $alias: ident, $setter: ident, $arg: ident);+) => {
        impl<T> Tup<T, $N> {
            #[inline]
            pub const fn new($($arg: T),+) -> Self {
                Self { v: [$($arg),+] }
            }
        }

        impl<T: Clone> Tup<T, $N> {
            $(
                #[inline]
                pub fn $getter(&self) -> T {
                    self.v[$index].clone()
                }

                #[inline]
                pub fn $alias(&self) -> T {
                    self.v[$index].clone()
                }

                #[inline]
                pub fn $setter(&mut self, $arg: T) -> &mut Self {
                    self.v[$index] = $arg;
                    self
                }
            )+

            #[inline]
            pub fn set(&mut self, $($arg: T),+) -> &mut Self {
                self.v = [$($arg),+];
                self
            }

            /// Unpacks the components, in index order, into `f`.
            #[inline]
            pub fn pass_to<R>(&self, f: impl FnOnce($(component_type!($arg)),+) -> R) -> R {
                f($(self.v[$index].clone()),+)
            }
        }
    };
}

generated_component_definition!(2;
    0, v0, x, set_v0, v0;
    1, v1, y, set_v1, v1
);
generated_component_definition!(3;
    0, v0, x, set_v0, v0;
    1, v1, y, set_v1, v1;
    2, v2, z, set_v2, v2
);
generated_component_definition!(4;
    0, v0, x, set_v0, v0;
    1, v1, y, set_v1, v1;
    2, v2, z, set_v2, v2;
    3, v3, w, set_v3, v3
);

macro_rules! generated_swap_definition {
    ($N: literal; $($swap: ident, $swap_n: ident, $a: expr, $b: expr);+) => {
        impl<T: Clone> Tup<T, $N> {
            $(
                #[inline]
                pub fn $swap(&mut self) -> &mut Self {
                    self.v.swap($a, $b);
                    self
                }

                #[inline]
                pub fn $swap_n(&self) -> Self {
                    Self {
                        v: std::array::from_fn(|k| self.v[swap_source(k, $a, $b)].clone()),
                    }
                }
            )+
        }
    };
}

generated_swap_definition!(2;
    swap_v0_and_v1, swap_v0_and_v1_n, 0, 1
);
generated_swap_definition!(3;
    swap_v0_and_v1, swap_v0_and_v1_n, 0, 1;
    swap_v0_and_v2, swap_v0_and_v2_n, 0, 2;
    swap_v1_and_v2, swap_v1_and_v2_n, 1, 2
);
generated_swap_definition!(4;
    swap_v0_and_v1, swap_v0_and_v1_n, 0, 1;
    swap_v0_and_v2, swap_v0_and_v2_n, 0, 2;
    swap_v0_and_v3, swap_v0_and_v3_n, 0, 3;
    swap_v1_and_v2, swap_v1_and_v2_n, 1, 2;
    swap_v1_and_v3, swap_v1_and_v3_n, 1, 3;
    swap_v2_and_v3, swap_v2_and_v3_n, 2, 3
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_int2_scenario() {
        let mut t = Tup2i::new(3, 7);
        assert!(!t.is_zero_within(&2));
        t.swap_by_index(0, 1);
        assert_eq!(t, Tup2i::new(7, 3));
        assert_eq!(t.to_array(), [7, 3]);
        assert!(t.equals_tup(&Tup2i::new(7, 3)));
    }

    #[test]
    fn test_long3_scenario() {
        let t = Tup3l::new(0, 0, 0);
        assert!(t.is_zero());
        let u = Tup3l::new(10, 20, 30);
        let r = u.rearrange_n(&[2, 0, 1]);
        assert_eq!(r, Tup3l::new(30, 10, 20));
        assert_eq!(u, Tup3l::new(10, 20, 30));
    }

    #[test]
    fn test_dimension_is_constant() {
        let mut rng = rand::rng();
        for _ in 0..16 {
            let t = Tup4f::new(
                rng.random_range(-1f32..1f32),
                rng.random_range(-1f32..1f32),
                rng.random_range(-1f32..1f32),
                rng.random_range(-1f32..1f32),
            );
            assert_eq!(t.size(), 4);
            assert_eq!(t.size(), Tup4f::DIMENSION);
        }
        assert_eq!(Tup2d::DIMENSION, 2);
        assert_eq!(Tup3b::DIMENSION, 3);
    }

    #[test]
    fn test_index_out_of_range() {
        let t = Tup3s::new(1, 2, 3);
        assert_eq!(
            t.try_get_by_index(3),
            Err(TupleError::InvalidIndex { index: 3, size: 3 })
        );
        assert!(t.try_get_by_index(usize::MAX).is_err());
        assert!(Tup2i::default().try_get_by_index(2).is_err());
        assert!(Tup4d::default().try_get_by_index(4).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_by_index_panics() {
        Tup2i::new(1, 2).get_by_index(2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_operator_panics() {
        let t = Tup3f::new(1., 2., 3.);
        let _ = t[3];
    }

    #[test]
    fn test_round_trip_array() {
        let mut rng = rand::rng();
        let t = Tup4i::new(
            rng.random_range(-100..100),
            rng.random_range(-100..100),
            rng.random_range(-100..100),
            rng.random_range(-100..100),
        );
        let copy = t.create_from_slice(&t.to_vec());
        assert_eq!(copy, t);
        let mut buffer = [0i32; 6];
        let filled = t.to_array_into(&mut buffer);
        assert_eq!(&filled[..4], &t.v);
        assert_eq!(filled[4..], [0, 0]);
    }

    #[test]
    fn test_to_array_into_short_buffer() {
        let t = Tup3i::new(1, 2, 3);
        let mut buffer = [9i32; 2];
        assert_eq!(
            t.try_to_array_into(&mut buffer).err(),
            Some(TupleError::InvalidSize {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(buffer, [9, 9]);
    }

    #[test]
    fn test_tolerance_boundary() {
        let k = rand::rng().random_range(1..1000i32);
        assert!(Tup3i::new(k, -k, k).is_zero_within(&k));
        assert!(!Tup3i::new(k, -k, k + 1).is_zero_within(&k));
        assert!(Tup2f::new(0.5, -0.5).is_zero_within(&0.5));
        assert!(!Tup2f::new(0.5, -0.5001).is_zero_within(&0.5));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let zero = Tup2i::new(0, 0);
        assert_eq!(
            zero.try_is_zero_within(&-1),
            Err(TupleError::InvalidTolerance)
        );
        assert_eq!(
            zero.try_equals_within(&zero, &-1),
            Err(TupleError::InvalidTolerance)
        );
        assert!(Tup2d::default().try_is_zero_within(&-1e-12).is_err());
    }

    #[test]
    #[should_panic(expected = "Tolerance must be non-negative")]
    fn test_equals_within_panics_on_negative() {
        let a = Tup3f::new(1., 2., 3.);
        a.equals_within(&a, &-0.5);
    }

    #[test]
    fn test_equals_within_is_inclusive() {
        let a = Tup3l::new(10, 20, 30);
        let b = Tup3l::new(12, 18, 31);
        assert!(a.equals_within(&b, &2));
        assert!(b.equals_within(&a, &2));
        assert!(!a.equals_within(&b, &1));
    }

    #[test]
    fn test_equals_different_arity() {
        let a = Tup2i::new(1, 2);
        let b = Tup3i::new(1, 2, 0);
        assert!(!a.equals_tup(&b));
        assert!(!a.equals_within(&b, &100));
    }

    #[test]
    fn test_equals_same_reference() {
        let a = Tup2f::new(f32::NAN, 1.);
        assert!(a.equals_tup(&a));
        assert_ne!(a, Tup2f::new(f32::NAN, 1.));
    }

    #[test]
    fn test_is_finite() {
        assert!(Tup3d::new(1., 2., 3.).is_finite());
        assert!(!Tup3d::new(1., f64::INFINITY, 3.).is_finite());
        assert!(!Tup4f::new(0., 0., 0., f32::NAN).is_finite());
    }

    #[test]
    fn test_rearrange_identity() {
        let mut t = Tup4s::new(4, 3, 2, 1);
        t.rearrange(&[0, 1, 2, 3]);
        assert_eq!(t, Tup4s::new(4, 3, 2, 1));
    }

    #[test]
    fn test_rearrange_in_place_reads_before_writes() {
        let mut t = Tup3i::new(10, 20, 30);
        t.rearrange(&[2, 0, 1]);
        assert_eq!(t, Tup3i::new(30, 10, 20));
        t.rearrange(&[1, 1, 0]);
        assert_eq!(t, Tup3i::new(10, 10, 30));
    }

    #[test]
    fn test_rearrange_rejects_before_mutation() {
        let mut t = Tup3i::new(1, 2, 3);
        assert!(t.try_rearrange(&[0, 1]).is_err());
        assert!(t.try_rearrange(&[0, 1, 3]).is_err());
        assert!(t.try_rearrange(&[0, 1, 2, 0]).is_err());
        assert_eq!(t, Tup3i::new(1, 2, 3));
    }

    #[test]
    fn test_swap_involution() {
        let mut rng = rand::rng();
        let original = Tup4l::new(
            rng.random_range(-50..50),
            rng.random_range(-50..50),
            rng.random_range(-50..50),
            rng.random_range(-50..50),
        );
        for i in 0..4 {
            for j in 0..4 {
                let mut t = original;
                t.swap_by_index(i, j).swap_by_index(i, j);
                assert_eq!(t, original);
            }
        }
    }

    #[test]
    fn test_swap_n_leaves_source() {
        let t = Tup3f::new(1., 2., 3.);
        assert_eq!(t.swap_by_index_n(0, 2), Tup3f::new(3., 2., 1.));
        assert_eq!(t.swap_by_index_n(1, 1), t);
        assert_eq!(t, Tup3f::new(1., 2., 3.));
        assert!(t.try_swap_by_index_n(0, 3).is_err());
    }

    #[test]
    fn test_named_swaps() {
        let mut t = Tup4i::new(0, 1, 2, 3);
        assert_eq!(t.swap_v0_and_v3_n(), Tup4i::new(3, 1, 2, 0));
        assert_eq!(t.swap_v1_and_v2_n(), Tup4i::new(0, 2, 1, 3));
        t.swap_v0_and_v1().swap_v2_and_v3();
        assert_eq!(t, Tup4i::new(1, 0, 3, 2));
        let mut u = Tup3i::new(5, 6, 7);
        u.swap_v0_and_v2();
        assert_eq!(u.to_array(), [7, 6, 5]);
        assert_eq!(Tup2i::new(1, 2).swap_v0_and_v1_n(), Tup2i::new(2, 1));
    }

    #[test]
    fn test_setters_chain() {
        let mut t = Tup3d::default();
        t.set_v0(1.).set_v1(2.).set_v2(3.);
        assert_eq!(t, Tup3d::new(1., 2., 3.));
        t.set(4., 5., 6.);
        assert_eq!((t.x(), t.y(), t.z()), (4., 5., 6.));
        t.set_scalar(0.25);
        assert_eq!(t, Tup3d::dup(0.25));
        t.set_by_index(2, -1.);
        assert_eq!(t.v2(), -1.);
    }

    #[test]
    fn test_set_array_all_or_nothing() {
        let mut t = Tup4b::new(1, 2, 3, 4);
        assert!(t.try_set_array(&[9, 9, 9]).is_err());
        assert_eq!(t, Tup4b::new(1, 2, 3, 4));
        t.set_array(&[5, 6, 7, 8, 9]);
        assert_eq!(t, Tup4b::new(5, 6, 7, 8));
    }

    #[test]
    fn test_set_by_index_rejects() {
        let mut t = Tup2s::new(1, 2);
        assert_eq!(
            t.try_set_by_index(2, 5).err(),
            Some(TupleError::InvalidIndex { index: 2, size: 2 })
        );
        assert_eq!(t, Tup2s::new(1, 2));
    }

    #[test]
    fn test_cross_arity_interop() {
        let big = Tup4i::new(1, 2, 3, 4);
        let small = Tup2i::from_tup(&big);
        assert_eq!(small, Tup2i::new(1, 2));
        assert!(Tup3i::try_from_tup(&small).is_err());
        let mut t = Tup3i::default();
        t.set_tup(&big);
        assert_eq!(t, Tup3i::new(1, 2, 3));
        assert!(t.try_set_tup(&small).is_err());
        assert_eq!(t.create_from_tup(&big), Tup3i::new(1, 2, 3));
    }

    #[test]
    fn test_factories() {
        let t = Tup3i::new(1, 2, 3);
        assert_eq!(t.create_new(), Tup3i::default());
        assert_eq!(t.create_broadcast(7), Tup3i::dup(7));
        assert!(t.try_create_from_slice(&[1, 2]).is_err());
    }

    #[test]
    fn test_pass_to() {
        let t = Tup3l::new(1, 2, 3);
        let sum = t.pass_to(|a, b, c| a + 10 * b + 100 * c);
        assert_eq!(sum, 321);
        let mut seen = Vec::new();
        Tup4i::new(4, 3, 2, 1).pass_to(|a, b, c, d| seen.extend([a, b, c, d]));
        assert_eq!(seen, vec![4, 3, 2, 1]);
        assert_eq!(t.pass_to_slice(|s| s.len()), 3);
    }

    #[test]
    fn test_non_numeric_components() {
        let mut t = Tup3::new("a".to_string(), "b".to_string(), "c".to_string());
        t.rearrange(&[2, 2, 0]);
        assert_eq!(t.to_array(), ["c", "c", "a"].map(String::from));
        let flags = Tup2::new(true, false).swap_v0_and_v1_n();
        assert_eq!(flags, Tup2::new(false, true));
        assert_eq!(Tup2::new('x', 'y').get_by_index(1), 'y');
    }

    #[test]
    fn test_cast_and_display() {
        let t = Tup3f::new(1.7, -2.2, 3.0);
        assert_eq!(t.cast::<i32>(), Tup3i::new(1, -2, 3));
        assert_eq!(Tup2i::new(3, 7).to_string(), "(3, 7)");
        let arr: [i32; 2] = Tup2i::from([5, 6]).into();
        assert_eq!(arr, [5, 6]);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_components() {
        use num_bigint::BigInt;
        let t = Tup2::new(BigInt::from(10).pow(40), BigInt::from(-3));
        let u = Tup2::new(BigInt::from(10).pow(40) + BigInt::from(2), BigInt::from(-1));
        assert!(t.equals_within(&u, &BigInt::from(2)));
        assert!(!t.equals_within(&u, &BigInt::from(1)));
        assert!(!t.is_zero());
        assert!(Tup2::<BigInt>::default().is_zero());
    }

    #[cfg(feature = "bigdecimal")]
    #[test]
    fn test_bigdecimal_components() {
        use bigdecimal::BigDecimal;
        let t = Tup2::new(BigDecimal::from(1), "-0.5".parse::<BigDecimal>().unwrap());
        let u = Tup2::new(
            "1.125".parse::<BigDecimal>().unwrap(),
            "-0.375".parse::<BigDecimal>().unwrap(),
        );
        let margin: BigDecimal = "0.125".parse().unwrap();
        assert!(t.equals_within(&u, &margin));
        assert!(!t.equals_within(&u, &"0.124".parse().unwrap()));
        assert_eq!(
            t.try_equals_within(&u, &"-0.125".parse().unwrap()),
            Err(TupleError::InvalidTolerance)
        );
        assert!(!t.is_zero_within(&"0.5".parse().unwrap()));
        assert!(t.is_zero_within(&BigDecimal::from(1)));
        assert!(Tup2::<BigDecimal>::default().is_zero());
    }
}
