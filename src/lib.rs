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
#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
//! Fixed and variable arity tuples of homogeneous components.
//!
//! [TupRead] exposes components, [TupCommon] mutates them and [TupFactory]
//! builds fresh tuples for the non-destructive `*_n` operations. Only
//! [DynTup] implements [Resizable]; fixed arity [Tup] cannot change size.
//!
//! Every fallible operation comes as `try_xxx` returning [TupleError] and as a
//! fail-fast `xxx` that panics on a contract violation.
mod color;
mod common;
mod dynamic;
mod err;
mod fixed;
mod read;
mod scalar;
mod swizzle;
mod tolerance;

pub use color::{
    ChannelRange, Color, ColorOptions, Hdr, HdrColor3, HdrColor4, Ldr, LdrColor3, LdrColor4,
    Quantization,
};
pub use common::{TupCommon, TupFactory};
pub use dynamic::{DynTup, DynTupb, DynTupd, DynTupf, DynTupi, DynTupl, DynTups, Resizable};
pub use err::TupleError;
pub use fixed::{
    FixedSize, Tup, Tup2, Tup2b, Tup2d, Tup2f, Tup2i, Tup2l, Tup2s, Tup3, Tup3b, Tup3d, Tup3f,
    Tup3i, Tup3l, Tup3s, Tup4, Tup4b, Tup4d, Tup4f, Tup4i, Tup4l, Tup4s,
};
pub use read::TupRead;
pub use scalar::TolerantScalar;
pub use tolerance::{all_equal_within, all_finite, all_zero, all_zero_within};
