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
use crate::err::{TupleError, contract};
use crate::scalar::TolerantScalar;
use crate::swizzle::{validate_index, validate_min_len};
use crate::tolerance::{all_equal_within, all_finite, all_zero, all_zero_within};
use num_traits::Float;

/// Read access to an ordered run of components.
///
/// Implemented by fixed arity [Tup](crate::Tup) and variable arity
/// [DynTup](crate::DynTup). Nothing here mutates or caches.
pub trait TupRead<T: Clone> {
    /// Count of components. For fixed arity tuples this is a constant.
    fn size(&self) -> usize;

    /// Components in index order.
    fn as_slice(&self) -> &[T];

    #[inline]
    fn try_get_by_index(&self, index: usize) -> Result<T, TupleError> {
        validate_index(index, self.size())?;
        Ok(self.as_slice()[index].clone())
    }

    /// Component at `index`.
    ///
    /// # Panics
    /// When `index >= size()`.
    #[inline]
    #[track_caller]
    fn get_by_index(&self, index: usize) -> T {
        contract(self.try_get_by_index(index))
    }

    /// Copies components into the front of `buffer` and hands the buffer back.
    fn try_to_array_into<'a>(&self, buffer: &'a mut [T]) -> Result<&'a mut [T], TupleError> {
        let size = self.size();
        validate_min_len(buffer.len(), size)?;
        buffer[..size].clone_from_slice(self.as_slice());
        Ok(buffer)
    }

    /// # Panics
    /// When `buffer` is shorter than `size()`.
    #[inline]
    #[track_caller]
    fn to_array_into<'a>(&self, buffer: &'a mut [T]) -> &'a mut [T] {
        contract(self.try_to_array_into(buffer))
    }

    #[inline]
    fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Exact component-wise equality. Tuples of different size are never equal.
    fn equals_tup<R: TupRead<T> + ?Sized>(&self, other: &R) -> bool
    where
        T: PartialEq,
    {
        let lhs = self.as_slice();
        let rhs = other.as_slice();
        if std::ptr::eq(lhs, rhs) {
            return true;
        }
        lhs == rhs
    }

    fn try_equals_within<R: TupRead<T> + ?Sized>(
        &self,
        other: &R,
        tolerance: &T,
    ) -> Result<bool, TupleError>
    where
        T: TolerantScalar,
    {
        all_equal_within(self.as_slice(), other.as_slice(), tolerance)
    }

    /// `|self[i] - other[i]| <= tolerance` for every component.
    ///
    /// # Panics
    /// When `tolerance` is negative, even if the tuples are identical.
    #[inline]
    #[track_caller]
    fn equals_within<R: TupRead<T> + ?Sized>(&self, other: &R, tolerance: &T) -> bool
    where
        T: TolerantScalar,
    {
        contract(self.try_equals_within(other, tolerance))
    }

    /// Every component is exactly zero.
    #[inline]
    fn is_zero(&self) -> bool
    where
        T: TolerantScalar,
    {
        all_zero(self.as_slice())
    }

    #[inline]
    fn try_is_zero_within(&self, tolerance: &T) -> Result<bool, TupleError>
    where
        T: TolerantScalar,
    {
        all_zero_within(self.as_slice(), tolerance)
    }

    /// `|self[i]| <= tolerance` for every component.
    ///
    /// # Panics
    /// When `tolerance` is negative.
    #[inline]
    #[track_caller]
    fn is_zero_within(&self, tolerance: &T) -> bool
    where
        T: TolerantScalar,
    {
        contract(self.try_is_zero_within(tolerance))
    }

    /// No component is infinite or NaN.
    #[inline]
    fn is_finite(&self) -> bool
    where
        T: Float,
    {
        all_finite(self.as_slice())
    }

    /// Lends the current components to `f`.
    #[inline]
    fn pass_to_slice<V>(&self, f: impl FnOnce(&[T]) -> V) -> V {
        f(self.as_slice())
    }
}
