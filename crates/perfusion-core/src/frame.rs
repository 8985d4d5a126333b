use std::path::PathBuf;

use ndarray::Array2;
use tracing::debug;

use crate::error::{PerfusionError, Result};

/// A 2D grid of scalar values addressed by column `x` and row `y`.
///
/// Renderers consume this instead of a concrete frame type.
pub trait ScalarField {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Value at `(x, y)`; implementations return 0 outside the grid.
    fn value_at(&self, x: i64, y: i64) -> f64;
}

/// A single grayscale MRI frame.
/// Intensities are raw integer samples in `[0, max_value]`.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    data: Array2<u32>,
    /// Declared maximum intensity, used for display scaling
    max_value: u32,
    pub metadata: FrameMetadata,
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    /// Position of the frame in its sequence (0-based).
    pub frame_index: usize,
    /// File the frame was decoded from, if any.
    pub source: Option<PathBuf>,
}

impl Frame {
    /// Wrap a pixel array, checking dimensions and the `[0, max_value]` invariant.
    pub fn new(data: Array2<u32>, max_value: u32) -> Result<Self> {
        let (h, w) = data.dim();
        if h == 0 || w == 0 {
            return Err(PerfusionError::InvalidDimensions {
                width: w as i64,
                height: h as i64,
            });
        }
        if max_value == 0 {
            return Err(PerfusionError::InvalidMaxValue(0));
        }
        if let Some(((y, x), &value)) = data.indexed_iter().find(|(_, v)| **v > max_value) {
            return Err(PerfusionError::SampleOutOfRange {
                x,
                y,
                value,
                max_value,
            });
        }
        Ok(Self {
            data,
            max_value,
            metadata: FrameMetadata::default(),
        })
    }

    /// Build a frame from row-major pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>, max_value: u32) -> Result<Self> {
        let data = Array2::from_shape_vec((height, width), pixels).map_err(|_| {
            PerfusionError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            }
        })?;
        Self::new(data, max_value)
    }

    pub fn with_metadata(mut self, metadata: FrameMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn data(&self) -> &Array2<u32> {
        &self.data
    }

    /// Intensity at column `x`, row `y`. Out-of-bounds queries return 0.
    pub fn intensity(&self, x: i64, y: i64) -> u32 {
        if x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height() {
            debug!(x, y, "Pixel coordinates out of bounds");
            return 0;
        }
        self.data[[y as usize, x as usize]]
    }
}

impl ScalarField for Frame {
    fn width(&self) -> usize {
        Frame::width(self)
    }

    fn height(&self) -> usize {
        Frame::height(self)
    }

    fn value_at(&self, x: i64, y: i64) -> f64 {
        self.intensity(x, y) as f64
    }
}
