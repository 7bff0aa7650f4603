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
use num_traits::Zero;

/// Numeric component kind that supports margin based comparison.
///
/// Tolerance is expressed in the component's own type. Implementations assume
/// the tolerance was accepted by [TolerantScalar::is_valid_tolerance] first.
pub trait TolerantScalar: Clone + PartialEq + Zero {
    /// Tolerance must be non-negative, and a number for floating kinds.
    fn is_valid_tolerance(tolerance: &Self) -> bool;
    /// `|self| <= tolerance`
    fn abs_within(&self, tolerance: &Self) -> bool;
    /// `|self - other| <= tolerance`
    fn abs_diff_within(&self, other: &Self, tolerance: &Self) -> bool;
}

macro_rules! generated_signed_tolerant_definition {
    ($T: ty) => {
        impl TolerantScalar for $T {
            #[inline]
            fn is_valid_tolerance(tolerance: &$T) -> bool {
                *tolerance >= 0
            }

            #[inline]
            fn abs_within(&self, tolerance: &$T) -> bool {
                self.unsigned_abs() <= tolerance.unsigned_abs()
            }

            #[inline]
            fn abs_diff_within(&self, other: &$T, tolerance: &$T) -> bool {
                self.abs_diff(*other) <= tolerance.unsigned_abs()
            }
        }
    };
}

generated_signed_tolerant_definition!(i8);
generated_signed_tolerant_definition!(i16);
generated_signed_tolerant_definition!(i32);
generated_signed_tolerant_definition!(i64);
generated_signed_tolerant_definition!(i128);
generated_signed_tolerant_definition!(isize);

macro_rules! generated_unsigned_tolerant_definition {
    ($T: ty) => {
        impl TolerantScalar for $T {
            #[inline]
            fn is_valid_tolerance(_: &$T) -> bool {
                true
            }

            #[inline]
            fn abs_within(&self, tolerance: &$T) -> bool {
                *self <= *tolerance
            }

            #[inline]
            fn abs_diff_within(&self, other: &$T, tolerance: &$T) -> bool {
                self.abs_diff(*other) <= *tolerance
            }
        }
    };
}

generated_unsigned_tolerant_definition!(u8);
generated_unsigned_tolerant_definition!(u16);
generated_unsigned_tolerant_definition!(u32);
generated_unsigned_tolerant_definition!(u64);
generated_unsigned_tolerant_definition!(u128);
generated_unsigned_tolerant_definition!(usize);

macro_rules! generated_float_tolerant_definition {
    ($T: ty) => {
        impl TolerantScalar for $T {
            #[inline]
            fn is_valid_tolerance(tolerance: &$T) -> bool {
                *tolerance >= 0.
            }

            #[inline]
            fn abs_within(&self, tolerance: &$T) -> bool {
                self.abs() <= *tolerance
            }

            #[inline]
            fn abs_diff_within(&self, other: &$T, tolerance: &$T) -> bool {
                // Matching infinities have an undefined difference.
                *self == *other || (*self - *other).abs() <= *tolerance
            }
        }
    };
}

generated_float_tolerant_definition!(f32);
generated_float_tolerant_definition!(f64);

#[cfg(feature = "bigint")]
impl TolerantScalar for num_bigint::BigInt {
    #[inline]
    fn is_valid_tolerance(tolerance: &Self) -> bool {
        tolerance.sign() != num_bigint::Sign::Minus
    }

    #[inline]
    fn abs_within(&self, tolerance: &Self) -> bool {
        self.magnitude() <= tolerance.magnitude()
    }

    #[inline]
    fn abs_diff_within(&self, other: &Self, tolerance: &Self) -> bool {
        (self - other).magnitude() <= tolerance.magnitude()
    }
}

#[cfg(feature = "bigdecimal")]
impl TolerantScalar for bigdecimal::BigDecimal {
    #[inline]
    fn is_valid_tolerance(tolerance: &Self) -> bool {
        !num_traits::Signed::is_negative(tolerance)
    }

    #[inline]
    fn abs_within(&self, tolerance: &Self) -> bool {
        self.abs() <= *tolerance
    }

    #[inline]
    fn abs_diff_within(&self, other: &Self, tolerance: &Self) -> bool {
        (self - other).abs() <= *tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_extremes_do_not_overflow() {
        assert!(!i32::MIN.abs_within(&i32::MAX));
        assert!(!i32::MIN.abs_diff_within(&i32::MAX, &i32::MAX));
        assert!((-5i8).abs_diff_within(&5, &10));
        assert!(!i64::MIN.abs_within(&i64::MAX));
        assert!((i64::MIN + 1).abs_within(&i64::MAX));
    }

    #[test]
    fn test_tolerance_validity() {
        assert!(!i32::is_valid_tolerance(&-1));
        assert!(i32::is_valid_tolerance(&0));
        assert!(u8::is_valid_tolerance(&0));
        assert!(!f32::is_valid_tolerance(&-0.001));
        assert!(!f64::is_valid_tolerance(&f64::NAN));
        assert!(f64::is_valid_tolerance(&0.));
    }

    #[test]
    fn test_inclusive_boundary() {
        assert!(3i16.abs_within(&3));
        assert!((-3i16).abs_within(&3));
        assert!(!4i16.abs_within(&3));
        assert!(0.5f32.abs_diff_within(&0.25, &0.25));
        assert!(7u32.abs_diff_within(&3, &4));
        assert!(!7u32.abs_diff_within(&2, &4));
    }

    #[test]
    fn test_float_special_values() {
        assert!(f32::INFINITY.abs_diff_within(&f32::INFINITY, &0.));
        assert!(!f32::NAN.abs_diff_within(&f32::NAN, &1.));
        assert!(!f64::NAN.abs_within(&f64::MAX));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint() {
        use num_bigint::BigInt;
        let big = BigInt::from(10).pow(30);
        let tolerance = BigInt::from(5);
        assert!(BigInt::is_valid_tolerance(&tolerance));
        assert!(!BigInt::is_valid_tolerance(&BigInt::from(-5)));
        assert!((&big + BigInt::from(5)).abs_diff_within(&big, &tolerance));
        assert!(!(&big + BigInt::from(6)).abs_diff_within(&big, &tolerance));
        assert!(BigInt::from(-5).abs_within(&tolerance));
    }

    #[cfg(feature = "bigdecimal")]
    #[test]
    fn test_bigdecimal() {
        use bigdecimal::BigDecimal;
        let tolerance: BigDecimal = "0.25".parse().unwrap();
        let base: BigDecimal = "12345678901234567890.5".parse().unwrap();
        assert!(BigDecimal::is_valid_tolerance(&tolerance));
        assert!(BigDecimal::is_valid_tolerance(&BigDecimal::from(0)));
        assert!(!BigDecimal::is_valid_tolerance(&"-0.25".parse().unwrap()));
        assert!((&base + &tolerance).abs_diff_within(&base, &tolerance));
        let over: BigDecimal = "0.2500001".parse().unwrap();
        assert!(!(&base + &over).abs_diff_within(&base, &tolerance));
        assert!("-0.25".parse::<BigDecimal>().unwrap().abs_within(&tolerance));
        assert!(!"-0.26".parse::<BigDecimal>().unwrap().abs_within(&tolerance));
    }
}
