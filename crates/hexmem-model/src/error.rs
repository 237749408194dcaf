//! Error types for the hexmem data model.

/// Errors that can occur when constructing or validating a layout table.
///
/// All of these are configuration errors: fatal, reported before any
/// artifact is produced.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The table has no regions at all.
    #[error("layout table is empty")]
    Empty,

    /// The table does not end with the terminal sentinel region.
    #[error("layout table does not end with a terminal sentinel region")]
    MissingSentinel,

    /// A sentinel region appears somewhere other than the last position.
    #[error("sentinel region '{name}' is not the last table entry")]
    SentinelNotLast { name: String },

    /// Adjacent regions leave a gap or overlap in the address space.
    #[error(
        "region '{name}' (index {index}) breaks partition contiguity: \
         expected offset {expected}, found {found}"
    )]
    NonContiguous {
        index: usize,
        name: String,
        expected: u64,
        found: u64,
    },

    /// A data-bearing region's group stride does not divide its length.
    #[error("region '{name}': group stride {group_stride} does not divide length {length}")]
    NonDividingStride {
        name: String,
        length: u32,
        group_stride: u32,
    },

    /// Two regions share a name.
    #[error("duplicate region name '{name}'")]
    DuplicateName { name: String },

    /// A data-bearing region appears after the output address map begins,
    /// so the parameter buffer would not be a prefix of the address space.
    #[error("data-bearing region '{name}' appears after the output address map begins")]
    DataAfterAddressMap { name: String },
}

/// A value whose scaled magnitude exceeds the Q8 range, reported by
/// strict-mode quantization instead of wrapping.
#[derive(Debug, thiserror::Error)]
#[error("value {value} is outside the representable Q8 range [-128, 128)")]
pub struct RangeError {
    /// The offending input value.
    pub value: f32,
}
