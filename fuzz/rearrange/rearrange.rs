#![no_main]

use libfuzzer_sys::fuzz_target;
use numtup::{DynTup, Resizable, Tup3, Tup4, TupCommon};

fuzz_target!(|data: &[u8]| {
    // Never panic expected
    let indices: Vec<usize> = data.iter().map(|&x| (x % 8) as usize).collect();
    let mut t3 = Tup3::new(1u8, 2, 3);
    _ = t3.try_rearrange(&indices);
    _ = t3.try_rearrange_n(&indices);
    let mut t4 = Tup4::new(1u8, 2, 3, 4);
    _ = t4.try_rearrange(&indices);
    if indices.len() >= 2 {
        _ = t4.try_swap_by_index(indices[0], indices[1]);
        _ = t4.try_swap_by_index_n(indices[0], indices[1]);
    }
    let mut d = DynTup::from(data.to_vec());
    _ = d.try_rearrange(&indices);
    _ = d.try_rearrange_resize_n(&indices);
    _ = d.try_rearrange_resize(&indices);
});
