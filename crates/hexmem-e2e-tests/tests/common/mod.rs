use hexmem_compiler::{CompileOptions, MemoryImage, ParameterBuffer, compile};
use hexmem_model::{LayoutTable, Network};

/// The MNIST layout table used across the e2e tests.
#[allow(dead_code)]
pub fn mnist_table() -> LayoutTable {
    Network::mnist().layout().expect("MNIST layout is valid")
}

/// A parameter buffer of `len` values on a deterministic ramp inside the
/// Q8 range.
#[allow(dead_code)]
pub fn ramp_buffer(len: usize) -> ParameterBuffer {
    let values = (0..len)
        .map(|i| ((i % 512) as f32 - 256.0) / 64.0)
        .collect();
    ParameterBuffer::from_values(values)
}

/// Compile with default options, panicking on error.
#[allow(dead_code)]
pub fn compile_default(buffer: &ParameterBuffer, table: &LayoutTable) -> MemoryImage {
    compile(buffer, table, &CompileOptions::default()).expect("compilation failed")
}
