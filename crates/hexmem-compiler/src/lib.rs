#![warn(missing_docs)]
//! Quantizing memory-image compiler.
//!
//! Converts a flat float32 [`ParameterBuffer`] into one fixed-point hex
//! artifact per data-bearing region of a validated
//! [`LayoutTable`](hexmem_model::LayoutTable). Each artifact is a sequence
//! of newline-terminated records, one per group of `group_stride`
//! elements, each record holding the group's Q8 words as concatenated
//! 4-digit lowercase hex tokens with no separators. The format is a wire
//! contract consumed by the simulator's memory loader: field widths and
//! line structure are load-bearing.
//!
//! Compilation is pure; nothing touches the filesystem until
//! [`write_image`] runs, so a configuration error can never leave partial
//! artifacts behind.

mod buffer;
mod writer;

pub use buffer::{BufferError, ParameterBuffer};
pub use writer::write_image;

use std::fmt;
use std::fmt::Write as _;

use hexmem_model::{LayoutTable, RangeError, q8};

/// Options controlling a compiler run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompileOptions {
    /// Report out-of-range values as errors instead of wrapping them.
    /// Off by default: wraparound is the documented Q8 contract.
    pub strict: bool,
}

/// One serialized region: a sequence of fixed-width hex records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Name of the region this artifact was compiled from.
    pub region: String,
    /// File name the writer materializes this artifact under.
    pub file_name: String,
    /// Newline-terminated hex records, one per group.
    pub contents: String,
    /// Number of records (lines) in `contents`.
    pub records: usize,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} record(s))", self.file_name, self.records)
    }
}

/// The full memory image produced by one compiler run.
#[derive(Clone, Debug)]
pub struct MemoryImage {
    /// One artifact per data-bearing region, in table order.
    pub artifacts: Vec<Artifact>,
    /// Non-fatal diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for MemoryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} artifact(s), {} diagnostic(s)",
            self.artifacts.len(),
            self.diagnostics.len()
        )
    }
}

/// A non-fatal diagnostic message from compilation.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity level.
    pub level: DiagnosticLevel,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Severity level for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// A warning that does not prevent compilation.
    Warning,
    /// An informational note.
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "Warning",
            Self::Info => "Info",
        })
    }
}

/// Errors that abort compilation before any artifact is produced.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The parameter buffer's length does not match the layout table.
    #[error("parameter buffer holds {found} values but the layout table requires {expected}")]
    LengthMismatch {
        /// Value count the table's data-bearing regions sum to.
        expected: usize,
        /// Value count actually present in the buffer.
        found: usize,
    },
    /// Strict mode only: a value cannot be represented without wrapping.
    #[error("region '{region}', element {index}: {source}")]
    OutOfRange {
        /// Name of the region holding the offending value.
        region: String,
        /// Element index within the region.
        index: usize,
        /// The underlying range violation.
        source: RangeError,
    },
}

/// Compiles a parameter buffer into a memory image.
///
/// The buffer's length must equal the table's data-bearing total; each
/// data-bearing region is partitioned into `length / group_stride`
/// groups, every element quantized to Q8 in natural ascending index
/// order and rendered as 4 lowercase hex digits. Two runs over identical
/// inputs produce byte-identical artifacts.
pub fn compile(
    buffer: &ParameterBuffer,
    table: &LayoutTable,
    opts: &CompileOptions,
) -> Result<MemoryImage, CompileError> {
    let expected = table.expected_parameters() as usize;
    if buffer.len() != expected {
        return Err(CompileError::LengthMismatch {
            expected,
            found: buffer.len(),
        });
    }

    let values = buffer.values();
    let mut artifacts = Vec::new();
    let mut diagnostics = Vec::new();

    for region in table.data_regions() {
        let offset = region.offset as usize;
        let length = region.length as usize;
        let stride = region.group_stride as usize;
        let slice = &values[offset..offset + length];

        let mut contents = String::with_capacity(length * 4 + length / stride);
        let mut wrapped = 0usize;

        for (group_index, group) in slice.chunks_exact(stride).enumerate() {
            for (k, &value) in group.iter().enumerate() {
                let word = if opts.strict {
                    q8::quantize_checked(value).map_err(|source| CompileError::OutOfRange {
                        region: region.name.clone(),
                        index: group_index * stride + k,
                        source,
                    })?
                } else {
                    if q8::quantize_checked(value).is_err() {
                        wrapped += 1;
                    }
                    q8::quantize(value)
                };
                let _ = write!(contents, "{word:04x}");
            }
            contents.push('\n');
        }

        if wrapped > 0 {
            diagnostics.push(Diagnostic {
                level: DiagnosticLevel::Info,
                message: format!(
                    "region '{}': {} value(s) outside the Q8 range wrapped",
                    region.name, wrapped
                ),
            });
        }

        log::debug!(
            "compiled region '{}': {} records of {} tokens",
            region.name,
            region.record_count(),
            region.group_stride
        );

        artifacts.push(Artifact {
            region: region.name.clone(),
            file_name: artifact_file_name(&region.name),
            contents,
            records: region.record_count() as usize,
        });
    }

    Ok(MemoryImage {
        artifacts,
        diagnostics,
    })
}

/// Derives an artifact file name from a region's diagnostic name:
/// lowercase, runs of non-alphanumeric characters collapsed to a single
/// `_`, `.hex` appended. Deterministic, filesystem-safe.
pub fn artifact_file_name(region_name: &str) -> String {
    let mut name = String::with_capacity(region_name.len() + 4);
    let mut pending_sep = false;
    for ch in region_name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !name.is_empty() {
                name.push('_');
            }
            pending_sep = false;
            name.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    name.push_str(".hex");
    name
}
