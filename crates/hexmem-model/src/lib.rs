#![warn(missing_docs)]
//! Data model for the hexmem memory-image pipeline.
//!
//! Defines the memory [`Region`] and validated [`LayoutTable`] that
//! partition the accelerator address space, the [`q8`] fixed-point
//! conversions shared by the compiler and the softmax post-processor, and
//! the [`Network`] shape description the shipped MNIST table is derived
//! from.

mod display;
mod error;
pub mod network;
pub mod q8;
mod region;

pub use display::dump_table;
pub use error::{LayoutError, RangeError};
pub use network::{Layer, Network};
pub use region::{LayoutTable, Region};
