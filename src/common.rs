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
use crate::read::TupRead;
use crate::swizzle::{swap_source, validate_index, validate_indices, validate_min_len};

/// Produces fresh tuples of the same concrete type and size as `self`.
///
/// Used by every `*_n` operation so the source tuple is never touched.
pub trait TupFactory<T: Clone>: TupRead<T> + Sized {
    /// New tuple whose component `k` is `f(k)`, for `k` in `0..size()`.
    fn create_with<F: FnMut(usize) -> T>(&self, f: F) -> Self;

    /// New tuple taking components from `values` by position.
    ///
    /// Fixed arity tuples need at least `size()` values and ignore the rest,
    /// variable arity tuples adopt the length of `values`.
    fn try_create_from_slice(&self, values: &[T]) -> Result<Self, TupleError>;

    #[inline]
    #[track_caller]
    fn create_from_slice(&self, values: &[T]) -> Self {
        contract(self.try_create_from_slice(values))
    }

    #[inline]
    fn try_create_from_tup<R: TupRead<T> + ?Sized>(&self, t: &R) -> Result<Self, TupleError> {
        self.try_create_from_slice(t.as_slice())
    }

    #[inline]
    #[track_caller]
    fn create_from_tup<R: TupRead<T> + ?Sized>(&self, t: &R) -> Self {
        contract(self.try_create_from_tup(t))
    }

    /// New tuple with every component at its default.
    #[inline]
    fn create_new(&self) -> Self
    where
        T: Default,
    {
        self.create_with(|_| T::default())
    }

    /// New tuple with `value` in every component.
    #[inline]
    fn create_broadcast(&self, value: T) -> Self {
        self.create_with(|_| value.clone())
    }
}

/// Mutable access on top of [TupRead].
///
/// In-place operations return `&mut Self` for chaining. The `*_n` twins
/// build a new tuple and leave `self` alone. Arguments are validated before
/// any component is written.
pub trait TupCommon<T: Clone>: TupRead<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Moves component `indices[k]` to position `k`. Repeated indices duplicate a component.
    fn try_rearrange(&mut self, indices: &[usize]) -> Result<&mut Self, TupleError>;

    /// # Panics
    /// When `indices.len() != size()` or any entry is out of range.
    #[inline]
    #[track_caller]
    fn rearrange(&mut self, indices: &[usize]) -> &mut Self {
        contract(self.try_rearrange(indices))
    }

    /// Writes `value` into every component.
    #[inline]
    fn set_scalar(&mut self, value: T) -> &mut Self {
        self.as_mut_slice().fill(value);
        self
    }

    /// Takes the first `size()` entries of `values`.
    fn try_set_array(&mut self, values: &[T]) -> Result<&mut Self, TupleError> {
        let size = self.size();
        validate_min_len(values.len(), size)?;
        self.as_mut_slice().clone_from_slice(&values[..size]);
        Ok(self)
    }

    #[inline]
    #[track_caller]
    fn set_array(&mut self, values: &[T]) -> &mut Self {
        contract(self.try_set_array(values))
    }

    /// Copies components by position from any tuple with at least `size()` of them.
    #[inline]
    fn try_set_tup<R: TupRead<T> + ?Sized>(&mut self, t: &R) -> Result<&mut Self, TupleError> {
        self.try_set_array(t.as_slice())
    }

    #[inline]
    #[track_caller]
    fn set_tup<R: TupRead<T> + ?Sized>(&mut self, t: &R) -> &mut Self {
        contract(self.try_set_tup(t))
    }

    fn try_set_by_index(&mut self, index: usize, value: T) -> Result<&mut Self, TupleError> {
        validate_index(index, self.size())?;
        self.as_mut_slice()[index] = value;
        Ok(self)
    }

    #[inline]
    #[track_caller]
    fn set_by_index(&mut self, index: usize, value: T) -> &mut Self {
        contract(self.try_set_by_index(index, value))
    }

    /// Exchanges two components. `a == b` is a no-op.
    fn try_swap_by_index(&mut self, a: usize, b: usize) -> Result<&mut Self, TupleError> {
        let size = self.size();
        validate_index(a, size)?;
        validate_index(b, size)?;
        self.as_mut_slice().swap(a, b);
        Ok(self)
    }

    #[inline]
    #[track_caller]
    fn swap_by_index(&mut self, a: usize, b: usize) -> &mut Self {
        contract(self.try_swap_by_index(a, b))
    }

    fn try_swap_by_index_n(&self, a: usize, b: usize) -> Result<Self, TupleError>
    where
        Self: TupFactory<T>,
    {
        let size = self.size();
        validate_index(a, size)?;
        validate_index(b, size)?;
        let src = self.as_slice();
        Ok(self.create_with(|k| src[swap_source(k, a, b)].clone()))
    }

    #[inline]
    #[track_caller]
    fn swap_by_index_n(&self, a: usize, b: usize) -> Self
    where
        Self: TupFactory<T>,
    {
        contract(self.try_swap_by_index_n(a, b))
    }

    fn try_rearrange_n(&self, indices: &[usize]) -> Result<Self, TupleError>
    where
        Self: TupFactory<T>,
    {
        validate_indices(indices, self.size())?;
        let src = self.as_slice();
        Ok(self.create_with(|k| src[indices[k]].clone()))
    }

    #[inline]
    #[track_caller]
    fn rearrange_n(&self, indices: &[usize]) -> Self
    where
        Self: TupFactory<T>,
    {
        contract(self.try_rearrange_n(indices))
    }
}
