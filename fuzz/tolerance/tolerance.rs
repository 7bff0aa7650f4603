#![no_main]

use libfuzzer_sys::fuzz_target;
use numtup::{Tup2, Tup4, TupRead};

fuzz_target!(|data: (u64, u64, u64, i32, i32, i32)| {
    // Never panic expected
    let (a, b, tolerance, x, y, z) = data;
    let fa = f64::from_bits(a);
    let fb = f64::from_bits(b);
    let ft = f64::from_bits(tolerance);
    let t = Tup2::new(fa, fb);
    let u = Tup2::new(fb, fa);
    _ = t.try_is_zero_within(&ft);
    _ = t.try_equals_within(&u, &ft);
    _ = t.is_finite();

    let ti = Tup4::new(x, y, z, i32::MIN);
    let ui = Tup4::new(z, y, x, i32::MAX);
    _ = ti.try_equals_within(&ui, &x);
    _ = ti.try_is_zero_within(&y);
    _ = ti.is_zero();
});
