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
use crate::fixed::Tup;
use crate::read::TupRead;
use crate::swizzle::{gather_vec, validate_indices, validate_sources};
use std::fmt::Display;

/// Tuple whose component count is decided at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DynTup<T> {
    pub v: Vec<T>,
}

pub type DynTupb = DynTup<i8>;
pub type DynTups = DynTup<i16>;
pub type DynTupi = DynTup<i32>;
pub type DynTupl = DynTup<i64>;
pub type DynTupf = DynTup<f32>;
pub type DynTupd = DynTup<f64>;

/// Operations that change the component count.
///
/// Only variable arity tuples carry this capability. New slots take
/// `T::default()`, excess slots are dropped.
pub trait Resizable<T: Clone + Default>: TupFactory<T> + TupCommon<T> {
    /// New tuple of `size` default components.
    fn create_new_sized(&self, size: usize) -> Self;

    fn resize(&mut self, size: usize) -> &mut Self;

    /// Resized copy, `self` is left as is.
    fn resize_n(&self, size: usize) -> Self;

    /// Adopts `values` along with its length.
    fn set_array_resize(&mut self, values: &[T]) -> &mut Self;

    /// Like [TupCommon::try_rearrange] except the result takes the length of `indices`.
    fn try_rearrange_resize(&mut self, indices: &[usize]) -> Result<&mut Self, TupleError>;

    #[inline]
    #[track_caller]
    fn rearrange_resize(&mut self, indices: &[usize]) -> &mut Self {
        contract(self.try_rearrange_resize(indices))
    }

    fn try_rearrange_resize_n(&self, indices: &[usize]) -> Result<Self, TupleError>;

    #[inline]
    #[track_caller]
    fn rearrange_resize_n(&self, indices: &[usize]) -> Self {
        contract(self.try_rearrange_resize_n(indices))
    }
}

impl<T> DynTup<T> {
    #[inline]
    pub fn new() -> Self {
        Self { v: Vec::new() }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.v
    }
}

impl<T: Clone> DynTup<T> {
    #[inline]
    pub fn from_slice(values: &[T]) -> Self {
        Self { v: values.to_vec() }
    }

    /// Copy of every component of any tuple.
    #[inline]
    pub fn from_tup<R: TupRead<T> + ?Sized>(t: &R) -> Self {
        Self::from_slice(t.as_slice())
    }

    #[inline]
    pub fn dup(value: T, size: usize) -> Self {
        Self {
            v: vec![value; size],
        }
    }
}

impl<T: Clone + Default> DynTup<T> {
    #[inline]
    pub fn with_size(size: usize) -> Self {
        Self {
            v: vec![T::default(); size],
        }
    }
}

impl<T: Clone> TupRead<T> for DynTup<T> {
    #[inline]
    fn size(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.v
    }
}

impl<T: Clone> TupCommon<T> for DynTup<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.v
    }

    fn try_rearrange(&mut self, indices: &[usize]) -> Result<&mut Self, TupleError> {
        validate_indices(indices, self.v.len())?;
        self.v = gather_vec(&self.v, indices);
        Ok(self)
    }
}

impl<T: Clone> TupFactory<T> for DynTup<T> {
    #[inline]
    fn create_with<F: FnMut(usize) -> T>(&self, f: F) -> Self {
        Self {
            v: (0..self.v.len()).map(f).collect(),
        }
    }

    #[inline]
    fn try_create_from_slice(&self, values: &[T]) -> Result<Self, TupleError> {
        Ok(Self::from_slice(values))
    }
}

impl<T: Clone + Default> Resizable<T> for DynTup<T> {
    #[inline]
    fn create_new_sized(&self, size: usize) -> Self {
        Self::with_size(size)
    }

    fn resize(&mut self, size: usize) -> &mut Self {
        if size != self.v.len() {
            log::trace!("resizing tuple from {} to {}", self.v.len(), size);
        }
        self.v.resize(size, T::default());
        self
    }

    fn resize_n(&self, size: usize) -> Self {
        let keep = size.min(self.v.len());
        let mut v = Vec::with_capacity(size);
        v.extend_from_slice(&self.v[..keep]);
        v.resize(size, T::default());
        Self { v }
    }

    fn set_array_resize(&mut self, values: &[T]) -> &mut Self {
        if values.len() != self.v.len() {
            log::trace!(
                "resizing tuple from {} to {}",
                self.v.len(),
                values.len()
            );
        }
        self.v.clear();
        self.v.extend_from_slice(values);
        self
    }

    fn try_rearrange_resize(&mut self, indices: &[usize]) -> Result<&mut Self, TupleError> {
        validate_sources(indices, self.v.len())?;
        if indices.len() != self.v.len() {
            log::trace!(
                "resizing tuple from {} to {}",
                self.v.len(),
                indices.len()
            );
        }
        self.v = gather_vec(&self.v, indices);
        Ok(self)
    }

    fn try_rearrange_resize_n(&self, indices: &[usize]) -> Result<Self, TupleError> {
        validate_sources(indices, self.v.len())?;
        Ok(Self {
            v: gather_vec(&self.v, indices),
        })
    }
}

impl<T> From<Vec<T>> for DynTup<T> {
    #[inline]
    fn from(v: Vec<T>) -> Self {
        Self { v }
    }
}

impl<T, const N: usize> From<Tup<T, N>> for DynTup<T> {
    #[inline]
    fn from(t: Tup<T, N>) -> Self {
        Self { v: t.v.into() }
    }
}

impl<T: Display> Display for DynTup<T> {
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
