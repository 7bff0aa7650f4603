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
use numtup::{DynTupi, LdrColor3, Resizable, Tup2i, Tup3l, Tup4f, TupCommon, TupRead};
use rand::Rng;

fn main() {
    let mut t = Tup2i::new(3, 7);
    println!("{t} zero within 2: {}", t.is_zero_within(&2));
    t.swap_by_index(0, 1);
    println!("swapped: {t}, as array {:?}", t.to_array());

    let u = Tup3l::new(10, 20, 30);
    let r = u.rearrange_n(&[2, 0, 1]);
    println!("{u} rearranged into {r}");

    let mut rng = rand::rng();
    let noisy = Tup4f::new(
        rng.random_range(-0.01f32..0.01f32),
        rng.random_range(-0.01f32..0.01f32),
        rng.random_range(-0.01f32..0.01f32),
        rng.random_range(-0.01f32..0.01f32),
    );
    println!(
        "{noisy} exact zero: {}, zero within 0.01: {}",
        noisy.is_zero(),
        noisy.is_zero_within(&0.01)
    );

    let mut d = DynTupi::from(vec![1, 2, 3]);
    d.rearrange_resize(&[2, 1, 0, 0]);
    println!("resized by rearrange: {d}");
    d.resize(6);
    println!("padded: {d}");

    let color = LdrColor3::new(1.2, 0.5, -0.3);
    println!(
        "clamped color {:?} as bytes {:?}",
        color.to_array(),
        color.to_bytes()
    );

    match t.try_get_by_index(2) {
        Ok(v) => println!("component 2: {v}"),
        Err(err) => println!("rejected: {err}"),
    }
}
