//! Declarative network shape description.
//!
//! The layout table is derived from the network's layer shapes rather than
//! hand-maintained: weight counts, record strides, and post-pooling
//! activation sizes all follow from the architecture. Editing a layer here
//! changes the table in lock-step with the training export, and the table
//! validation in [`LayoutTable::new`] catches any inconsistency at startup.

use crate::{LayoutError, LayoutTable, Region};

/// One layer of the network, in traversal order.
#[derive(Clone, Debug)]
pub enum Layer {
    /// 2-D convolution with square `kernel`x`kernel` filters and 'same'
    /// padding, optionally followed by 2x2 max pooling.
    Conv2d {
        name: String,
        filters: u32,
        kernel: u32,
        pool: bool,
    },
    /// Fully connected layer.
    Dense { name: String, units: u32 },
}

/// A network architecture: input shape plus ordered layers.
///
/// The parameter buffer holds each layer's weights then biases, in
/// declared order; the derived layout table mirrors that traversal.
#[derive(Clone, Debug)]
pub struct Network {
    /// Input height, width, channels.
    pub input: (u32, u32, u32),
    /// Layers in traversal order.
    pub layers: Vec<Layer>,
}

impl Network {
    /// The MNIST digit classifier this pipeline ships with.
    pub fn mnist() -> Self {
        Self {
            input: (28, 28, 1),
            layers: vec![
                Layer::Conv2d {
                    name: "conv2d".to_string(),
                    filters: 20,
                    kernel: 5,
                    pool: true,
                },
                Layer::Conv2d {
                    name: "conv2d_1".to_string(),
                    filters: 50,
                    kernel: 3,
                    pool: true,
                },
                Layer::Dense {
                    name: "dense".to_string(),
                    units: 20,
                },
                Layer::Dense {
                    name: "dense_1".to_string(),
                    units: 10,
                },
            ],
        }
    }

    /// Derives the memory layout table for this architecture.
    ///
    /// Parameter regions come first (each layer's weights then biases),
    /// followed by the output address map (input image, then one
    /// activation buffer per layer), then the terminal sentinel. One conv
    /// record is a single `kernel`x`kernel` slice; bias and dense regions
    /// use single-element records.
    pub fn layout(&self) -> Result<LayoutTable, LayoutError> {
        let mut regions = Vec::new();
        let mut cursor: u32 = 0;

        let (mut height, mut width, mut channels) = self.input;
        let mut activations: Vec<(String, u32)> = Vec::new();

        for layer in &self.layers {
            match layer {
                Layer::Conv2d {
                    name,
                    filters,
                    kernel,
                    pool,
                } => {
                    let weights = kernel * kernel * channels * filters;
                    regions.push(Region::data(
                        &format!("{name} weights"),
                        cursor,
                        weights,
                        kernel * kernel,
                    ));
                    cursor += weights;
                    regions.push(Region::data(&format!("{name} biases"), cursor, *filters, 1));
                    cursor += filters;

                    // 'same' padding preserves the spatial extent; pooling
                    // halves it.
                    if *pool {
                        height /= 2;
                        width /= 2;
                    }
                    channels = *filters;
                    activations.push((format!("{name} outputs"), height * width * channels));
                }
                Layer::Dense { name, units } => {
                    let inputs = height * width * channels;
                    regions.push(Region::data(
                        &format!("{name} weights"),
                        cursor,
                        inputs * units,
                        1,
                    ));
                    cursor += inputs * units;
                    regions.push(Region::data(&format!("{name} biases"), cursor, *units, 1));
                    cursor += units;

                    height = 1;
                    width = 1;
                    channels = *units;
                    activations.push((format!("{name} outputs"), *units));
                }
            }
        }

        let (in_h, in_w, in_c) = self.input;
        regions.push(Region::address_map("input image", cursor, in_h * in_w * in_c));
        cursor += in_h * in_w * in_c;
        for (name, size) in activations {
            regions.push(Region::address_map(&name, cursor, size));
            cursor += size;
        }

        regions.push(Region::sentinel(cursor));
        LayoutTable::new(regions)
    }
}
