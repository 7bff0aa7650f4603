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
use std::error::Error;
use std::fmt::Display;

/// Contract violations reported by tuple operations.
///
/// Every fallible operation checks its arguments before touching any component,
/// so receiving one of these means nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TupleError {
    /// Component index outside `[0, size)`.
    InvalidIndex { index: usize, size: usize },
    /// Array or tuple does not provide the required number of components.
    InvalidSize { required: usize, actual: usize },
    /// Tolerance is negative or not a number.
    InvalidTolerance,
}

impl Display for TupleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TupleError::InvalidIndex { index, size } => f.write_fmt(format_args!(
                "Index {index} is out of range for tuple of size {size}"
            )),
            TupleError::InvalidSize { required, actual } => f.write_fmt(format_args!(
                "Invalid size, expected at least {required} components but got {actual}"
            )),
            TupleError::InvalidTolerance => f.write_str("Tolerance must be non-negative"),
        }
    }
}

impl Error for TupleError {}

/// Unwraps a contract check, failing fast on violation.
#[track_caller]
#[inline]
pub(crate) fn contract<V>(result: Result<V, TupleError>) -> V {
    match result {
        Ok(v) => v,
        Err(err) => violated(err),
    }
}

#[cold]
#[track_caller]
fn violated(err: TupleError) -> ! {
    log::error!("tuple contract violation: {err}");
    panic!("{err}")
}
