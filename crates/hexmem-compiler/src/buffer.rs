//! Parameter buffer loading.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading a parameter buffer.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// Failed to read the weight file.
    #[error("failed to read weight file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The weight file's size is not a whole number of float32 values.
    #[error("weight file {path} has invalid size {size} (must be a multiple of 4 bytes)")]
    InvalidFileSize { path: PathBuf, size: u64 },
}

/// The flat, ordered float32 sequence holding all trained parameters.
///
/// Read-only input to the compiler: each layer's weights then biases, in
/// the network's declared traversal order. Positional indexing is the only
/// relationship between the buffer and the layout table.
#[derive(Clone, Debug)]
pub struct ParameterBuffer {
    values: Vec<f32>,
}

impl ParameterBuffer {
    /// Loads a buffer from a raw little-endian float32 file.
    pub fn load(path: &Path) -> Result<Self, BufferError> {
        let data = std::fs::read(path).map_err(|e| BufferError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if data.len() % 4 != 0 {
            return Err(BufferError::InvalidFileSize {
                path: path.to_path_buf(),
                size: data.len() as u64,
            });
        }

        let values = data
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { values })
    }

    /// Creates a buffer from in-memory values (library callers and tests).
    pub fn from_values(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Number of parameters in the buffer.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The parameter values, in traversal order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
