use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfusionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PGM file: {0}")]
    InvalidPgm(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Invalid max value: {0}")]
    InvalidMaxValue(i64),

    #[error("Pixel ({x}, {y}) value {value} exceeds max value {max_value}")]
    SampleOutOfRange {
        x: usize,
        y: usize,
        value: u32,
        max_value: u32,
    },

    #[error("Invalid contrast agent file: {0}")]
    InvalidContrastAgent(String),

    #[error("Failed to load frame {ordinal} from {}: {source}", .path.display())]
    FrameLoad {
        ordinal: usize,
        path: PathBuf,
        #[source]
        source: Box<PerfusionError>,
    },

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PerfusionError>;
