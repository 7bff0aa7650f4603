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
use criterion::{Criterion, criterion_group, criterion_main};
use numtup::{DynTupd, Resizable, Tup3d, Tup4f, TupCommon, TupRead};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let points: Vec<Tup4f> = (0..1000)
        .map(|i| Tup4f::new(i as f32, -(i as f32), 0.5, 0.25))
        .collect();

    c.bench_function("numtup: Tup4f get_by_index", |b| {
        b.iter(|| {
            let mut acc = 0f32;
            for p in points.iter() {
                for i in 0..4 {
                    acc += p.get_by_index(i);
                }
            }
            black_box(acc)
        })
    });

    c.bench_function("numtup: Tup4f rearrange in place", |b| {
        let mut scratch = points.clone();
        b.iter(|| {
            for p in scratch.iter_mut() {
                p.rearrange(&[3, 2, 1, 0]);
            }
            black_box(&scratch);
        })
    });

    c.bench_function("numtup: Tup4f rearrange_n", |b| {
        b.iter(|| {
            for p in points.iter() {
                black_box(p.rearrange_n(&[3, 2, 1, 0]));
            }
        })
    });

    c.bench_function("numtup: Tup4f equals_within", |b| {
        let shifted: Vec<Tup4f> = points
            .iter()
            .map(|p| Tup4f::new(p.v0() + 1e-4, p.v1(), p.v2(), p.v3()))
            .collect();
        b.iter(|| {
            let mut hits = 0usize;
            for (a, z) in points.iter().zip(shifted.iter()) {
                if a.equals_within(z, &1e-3) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    c.bench_function("numtup: Tup3d set_array", |b| {
        let mut t = Tup3d::default();
        let values = [1., 2., 3., 4.];
        b.iter(|| {
            t.set_array(black_box(&values));
            black_box(&t);
        })
    });

    c.bench_function("numtup: DynTupd rearrange_resize", |b| {
        let source = DynTupd::from((0..64).map(|x| x as f64).collect::<Vec<_>>());
        let indices: Vec<usize> = (0..128).map(|x| (x * 7) % 64).collect();
        b.iter(|| black_box(source.rearrange_resize_n(&indices)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
