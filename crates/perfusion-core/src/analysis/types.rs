use crate::consts::FRAME_NOT_FOUND;

/// Analysis stage of a dataset, advanced one way by explicit calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnalysisStage {
    #[default]
    Empty,
    FramesLoaded,
    TimecourseBuilt,
    PeakArrivalFound,
    TemporalGradientComputed,
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::FramesLoaded => write!(f, "Frames loaded"),
            Self::TimecourseBuilt => write!(f, "Timecourse built"),
            Self::PeakArrivalFound => write!(f, "Peak and arrival found"),
            Self::TemporalGradientComputed => write!(f, "Temporal gradient computed"),
        }
    }
}

/// Arrival/peak detection outcome and the uptake rate between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfusionResult {
    /// First frame whose gradient exceeds the threshold before the peak.
    pub arrival_frame: Option<usize>,
    /// Signal at the arrival frame; stays `0.0` when no arrival was found.
    pub arrival_signal: f64,
    /// First frame holding the maximum signal.
    pub peak_frame: Option<usize>,
    pub peak_signal: f64,
    /// Uptake rate in signal units per frame; `0.0` when arrival/peak are invalid.
    pub temporal_gradient: f64,
}

impl PerfusionResult {
    /// Arrival frame index, or `-1` when not found.
    pub fn arrival_frame_index(&self) -> i64 {
        self.arrival_frame.map_or(FRAME_NOT_FOUND, |i| i as i64)
    }

    /// Peak frame index, or `-1` before a peak search.
    pub fn peak_frame_index(&self) -> i64 {
        self.peak_frame.map_or(FRAME_NOT_FOUND, |i| i as i64)
    }
}
