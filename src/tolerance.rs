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
//! Zero and equality checks shared by every tuple kind.
//!
//! All comparisons are inclusive at the tolerance boundary and walk components
//! in index order.
use crate::err::TupleError;
use crate::scalar::TolerantScalar;
use num_traits::Float;

#[inline]
pub(crate) fn validate_tolerance<T: TolerantScalar>(tolerance: &T) -> Result<(), TupleError> {
    if !T::is_valid_tolerance(tolerance) {
        return Err(TupleError::InvalidTolerance);
    }
    Ok(())
}

/// Every component is exactly zero.
#[inline]
pub fn all_zero<T: TolerantScalar>(components: &[T]) -> bool {
    components.iter().all(|x| x.is_zero())
}

/// Every component satisfies `|x| <= tolerance`.
pub fn all_zero_within<T: TolerantScalar>(
    components: &[T],
    tolerance: &T,
) -> Result<bool, TupleError> {
    validate_tolerance(tolerance)?;
    Ok(components.iter().all(|x| x.abs_within(tolerance)))
}

/// Slices have the same length and every pair satisfies `|a - b| <= tolerance`.
pub fn all_equal_within<T: TolerantScalar>(
    a: &[T],
    b: &[T],
    tolerance: &T,
) -> Result<bool, TupleError> {
    validate_tolerance(tolerance)?;
    if a.len() != b.len() {
        return Ok(false);
    }
    Ok(a.iter()
        .zip(b.iter())
        .all(|(x, y)| x.abs_diff_within(y, tolerance)))
}

/// No component is infinite or NaN. Stops at the first offending component.
#[inline]
pub fn all_finite<'a, T: Float + 'a>(components: impl IntoIterator<Item = &'a T>) -> bool {
    components.into_iter().all(|x| x.is_finite())
}
