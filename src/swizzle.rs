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
//! Index validation and permutation helpers behind swap and rearrange.
//!
//! `indices[k]` names the source component that lands at position `k`.
//! Repeats are legal, so a rearrange is a gather rather than a permutation.
use crate::err::TupleError;

#[inline]
pub(crate) fn validate_index(index: usize, size: usize) -> Result<(), TupleError> {
    if index >= size {
        return Err(TupleError::InvalidIndex { index, size });
    }
    Ok(())
}

/// Checks that `indices` has exactly `size` entries, all addressing `[0, size)`.
pub(crate) fn validate_indices(indices: &[usize], size: usize) -> Result<(), TupleError> {
    if indices.len() != size {
        return Err(TupleError::InvalidSize {
            required: size,
            actual: indices.len(),
        });
    }
    validate_sources(indices, size)
}

/// Checks that every entry addresses `[0, size)`, whatever the entry count.
pub(crate) fn validate_sources(indices: &[usize], size: usize) -> Result<(), TupleError> {
    for &index in indices {
        validate_index(index, size)?;
    }
    Ok(())
}

#[inline]
pub(crate) fn validate_min_len(len: usize, required: usize) -> Result<(), TupleError> {
    if len < required {
        return Err(TupleError::InvalidSize {
            required,
            actual: len,
        });
    }
    Ok(())
}

/// Source position read into position `k` when `a` and `b` trade places.
#[inline]
pub(crate) const fn swap_source(k: usize, a: usize, b: usize) -> usize {
    if k == a {
        b
    } else if k == b {
        a
    } else {
        k
    }
}

/// Gathers `src[indices[k]]` into a new array; every read happens before the caller writes.
#[inline]
pub(crate) fn gather_array<T: Clone, const N: usize>(src: &[T], indices: &[usize]) -> [T; N] {
    std::array::from_fn(|k| src[indices[k]].clone())
}

#[inline]
pub(crate) fn gather_vec<T: Clone>(src: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| src[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_indices() {
        assert_eq!(validate_indices(&[2, 0, 1], 3), Ok(()));
        assert_eq!(validate_indices(&[1, 1, 1], 3), Ok(()));
        assert_eq!(
            validate_indices(&[0, 1], 3),
            Err(TupleError::InvalidSize {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(
            validate_indices(&[0, 3, 1], 3),
            Err(TupleError::InvalidIndex { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_swap_source() {
        let order: Vec<usize> = (0..4).map(|k| swap_source(k, 1, 3)).collect();
        assert_eq!(order, vec![0, 3, 2, 1]);
        let same: Vec<usize> = (0..3).map(|k| swap_source(k, 2, 2)).collect();
        assert_eq!(same, vec![0, 1, 2]);
    }

    #[test]
    fn test_gather_with_repeats() {
        let src = [10, 20, 30];
        let out: [i32; 3] = gather_array(&src, &[2, 2, 0]);
        assert_eq!(out, [30, 30, 10]);
        assert_eq!(gather_vec(&src, &[1, 0, 1, 2, 2]), vec![20, 10, 20, 30, 30]);
    }
}
