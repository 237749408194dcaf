#![no_main]

use libfuzzer_sys::fuzz_target;

use hexmem_compiler::{CompileOptions, ParameterBuffer, compile};
use hexmem_model::{LayoutTable, Region};

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes as a float buffer and compile it against a
    // table sized to fit; quantization and serialization should never
    // panic, whatever bit patterns the floats hold.
    let values: Vec<f32> = data
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    if values.is_empty() {
        return;
    }
    let len = values.len() as u32;
    let table = match LayoutTable::new(vec![
        Region::data("fuzz weights", 0, len, 1),
        Region::sentinel(len),
    ]) {
        Ok(table) => table,
        Err(_) => return,
    };

    let buffer = ParameterBuffer::from_values(values);
    let _ = compile(&buffer, &table, &CompileOptions::default());
    let _ = compile(&buffer, &table, &CompileOptions { strict: true });
});
