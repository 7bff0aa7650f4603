#![no_main]

use libfuzzer_sys::fuzz_target;
use numtup::{DynTup, Tup3, Tup4, TupCommon, TupFactory, TupRead};

fuzz_target!(|data: &[u8]| {
    // Never panic expected
    let values: Vec<i16> = data.iter().map(|&x| x as i16 - 128).collect();
    let mut t = Tup3::<i16>::default();
    _ = t.try_set_array(&values);
    _ = t.try_create_from_slice(&values);
    _ = Tup4::<i16>::try_from_slice(&values);
    let d = DynTup::from(values.clone());
    _ = t.try_set_tup(&d);
    let mut buffer = vec![0i16; data.len() % 6];
    _ = t.try_to_array_into(&mut buffer);
    if let Some(&first) = data.first() {
        _ = t.try_get_by_index(first as usize);
        _ = t.try_set_by_index(first as usize, 0);
    }
});
