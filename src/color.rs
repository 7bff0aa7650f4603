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
//! Colors built on top of the tuple contract.
//!
//! Colors own a [Tup] of `f32` channels and apply their own range clamping;
//! the tuple layer never clamps.
use crate::common::TupCommon;
use crate::err::{TupleError, contract};
use crate::fixed::{Tup, Tup3, Tup4};
use crate::read::TupRead;
use std::marker::PhantomData;

/// Rounding of unit channels into 8-bit channels.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum Quantization {
    /// Nearest 8-bit value.
    #[default]
    Round,
    Truncate,
}

/// Declares color comparison and conversion options
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorOptions {
    /// Channel margin used by approximate equality. Must be non-negative.
    pub tolerance: f32,
    pub quantization: Quantization,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            // Half an 8-bit step
            tolerance: 1. / 510.,
            quantization: Quantization::default(),
        }
    }
}

/// Channel range a color keeps its components in.
pub trait ChannelRange {
    fn clamp(value: f32) -> f32;
}

/// Low dynamic range, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ldr;

/// High dynamic range, channels in `[0, +inf)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hdr;

impl ChannelRange for Ldr {
    #[inline]
    #[allow(clippy::manual_clamp)]
    fn clamp(value: f32) -> f32 {
        value.max(0.).min(1.)
    }
}

impl ChannelRange for Hdr {
    #[inline]
    fn clamp(value: f32) -> f32 {
        value.max(0.)
    }
}

/// Color with `N` clamped channels, alpha last when present.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color<R, const N: usize> {
    tup: Tup<f32, N>,
    _range: PhantomData<R>,
}

pub type LdrColor3 = Color<Ldr, 3>;
pub type LdrColor4 = Color<Ldr, 4>;
pub type HdrColor3 = Color<Hdr, 3>;
pub type HdrColor4 = Color<Hdr, 4>;

impl<R: ChannelRange, const N: usize> Color<R, N> {
    #[inline]
    fn clamp_all(&mut self) {
        for x in self.tup.as_mut_slice() {
            *x = R::clamp(*x);
        }
    }

    /// Every channel set to `value` after clamping.
    #[inline]
    pub fn gray(value: f32) -> Self {
        Self {
            tup: Tup::dup(R::clamp(value)),
            _range: PhantomData,
        }
    }

    /// Channels from the first `N` components of `t`, clamped.
    pub fn try_from_tup<T: TupRead<f32> + ?Sized>(t: &T) -> Result<Self, TupleError> {
        let mut color = Self {
            tup: Tup::default(),
            _range: PhantomData,
        };
        color.try_set_tup(t)?;
        Ok(color)
    }

    #[inline]
    #[track_caller]
    pub fn from_tup<T: TupRead<f32> + ?Sized>(t: &T) -> Self {
        contract(Self::try_from_tup(t))
    }

    pub fn try_set_tup<T: TupRead<f32> + ?Sized>(
        &mut self,
        t: &T,
    ) -> Result<&mut Self, TupleError> {
        self.tup.try_set_tup(t)?;
        self.clamp_all();
        Ok(self)
    }

    #[inline]
    #[track_caller]
    pub fn set_tup<T: TupRead<f32> + ?Sized>(&mut self, t: &T) -> &mut Self {
        contract(self.try_set_tup(t))
    }

    #[inline]
    pub fn set_gray(&mut self, value: f32) -> &mut Self {
        self.tup.set_scalar(R::clamp(value));
        self
    }

    #[inline]
    pub fn try_channel(&self, index: usize) -> Result<f32, TupleError> {
        self.tup.try_get_by_index(index)
    }

    /// # Panics
    /// When `index >= N`.
    #[inline]
    #[track_caller]
    pub fn channel(&self, index: usize) -> f32 {
        self.tup.get_by_index(index)
    }

    pub fn try_set_channel(&mut self, index: usize, value: f32) -> Result<&mut Self, TupleError> {
        self.tup.try_set_by_index(index, R::clamp(value))?;
        Ok(self)
    }

    #[inline]
    #[track_caller]
    pub fn set_channel(&mut self, index: usize, value: f32) -> &mut Self {
        contract(self.try_set_channel(index, value))
    }

    #[inline]
    pub fn to_array(&self) -> [f32; N] {
        self.tup.to_array()
    }

    #[inline]
    pub fn as_tup(&self) -> &Tup<f32, N> {
        &self.tup
    }

    /// Channel-wise comparison within `options.tolerance`.
    ///
    /// # Panics
    /// When the tolerance is negative.
    #[inline]
    #[track_caller]
    pub fn approx_eq_with(&self, other: &Self, options: ColorOptions) -> bool {
        self.tup.equals_within(&other.tup, &options.tolerance)
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, ColorOptions::default())
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.tup.is_zero()
    }
}

impl<R: ChannelRange> Color<R, 3> {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            tup: Tup3::new(R::clamp(r), R::clamp(g), R::clamp(b)),
            _range: PhantomData,
        }
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.tup.v0()
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.tup.v1()
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.tup.v2()
    }
}

impl<R: ChannelRange> Color<R, 4> {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            tup: Tup4::new(R::clamp(r), R::clamp(g), R::clamp(b), R::clamp(a)),
            _range: PhantomData,
        }
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.tup.v0()
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.tup.v1()
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.tup.v2()
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.tup.v3()
    }
}

impl<const N: usize> Color<Ldr, N> {
    #[inline]
    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self {
            tup: Tup::from(bytes.map(|x| x as f32 / 255.)),
            _range: PhantomData,
        }
    }

    pub fn to_bytes_with(&self, options: ColorOptions) -> [u8; N] {
        self.tup.v.map(|x| {
            let scaled = x * 255.;
            match options.quantization {
                Quantization::Round => scaled.round() as u8,
                Quantization::Truncate => scaled as u8,
            }
        })
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; N] {
        self.to_bytes_with(ColorOptions::default())
    }
}

impl<const N: usize> Color<Hdr, N> {
    /// Clips every channel above 1.
    #[inline]
    pub fn to_ldr(&self) -> Color<Ldr, N> {
        Color::<Ldr, N>::from_tup(&self.tup)
    }
}

impl<const N: usize> From<Color<Ldr, N>> for Color<Hdr, N> {
    #[inline]
    fn from(color: Color<Ldr, N>) -> Self {
        Self {
            tup: color.tup,
            _range: PhantomData,
        }
    }
}
