use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CONTRAST_INFO, DEFAULT_INPUT_BASE, DEFAULT_MAX_FRAMES, DEFAULT_ROI_CENTER_X,
    DEFAULT_ROI_CENTER_Y, DEFAULT_ROI_SIZE, DEFAULT_THRESHOLD_GRADIENT,
};
use crate::error::{PerfusionError, Result};

/// Settings for one perfusion analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Dataset label used in summaries.
    #[serde(default = "default_name")]
    pub name: String,
    /// Frame filename prefix; frames are `{input_base}01.pgm`, `{input_base}02.pgm`, ...
    #[serde(default = "default_input_base")]
    pub input_base: String,
    /// Maximum number of frames to load.
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,
    /// Gradient (signal units per frame) that must be exceeded to mark arrival.
    #[serde(default = "default_threshold_gradient")]
    pub threshold_gradient: f64,
    /// Contrast agent metadata file; `None` skips agent reporting.
    #[serde(default = "default_contrast_info")]
    pub contrast_info: Option<PathBuf>,
    #[serde(default)]
    pub roi: RoiConfig,
}

/// Square ROI placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiConfig {
    pub center_x: i64,
    pub center_y: i64,
    pub size: i64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_ROI_CENTER_X,
            center_y: DEFAULT_ROI_CENTER_Y,
            size: DEFAULT_ROI_SIZE,
        }
    }
}

fn default_name() -> String {
    "perfusion".into()
}
fn default_input_base() -> String {
    DEFAULT_INPUT_BASE.into()
}
fn default_max_frames() -> usize {
    DEFAULT_MAX_FRAMES
}
fn default_threshold_gradient() -> f64 {
    DEFAULT_THRESHOLD_GRADIENT
}
fn default_contrast_info() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_CONTRAST_INFO))
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            input_base: default_input_base(),
            max_frames: DEFAULT_MAX_FRAMES,
            threshold_gradient: DEFAULT_THRESHOLD_GRADIENT,
            contrast_info: default_contrast_info(),
            roi: RoiConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject settings that cannot describe any run.
    pub fn validate(&self) -> Result<()> {
        if self.max_frames == 0 {
            return Err(PerfusionError::Config("max_frames must be at least 1".into()));
        }
        if !self.threshold_gradient.is_finite() {
            return Err(PerfusionError::Config(format!(
                "threshold_gradient must be finite, got {}",
                self.threshold_gradient
            )));
        }
        Ok(())
    }
}
