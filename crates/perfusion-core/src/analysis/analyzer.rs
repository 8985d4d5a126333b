use tracing::{debug, error, info, warn};

use crate::frame::Frame;
use crate::mask::Mask;

use super::timecourse::{find_arrival, first_differences, first_max, signal_timecourse};
use super::types::PerfusionResult;

/// Derives the ROI signal and gradient timecourses and the perfusion result.
///
/// Frames and mask are borrowed per call; the analyzer owns only derived state.
/// Precondition failures are logged and leave the state unchanged, so every run
/// ends with a well-defined [`PerfusionResult`].
#[derive(Clone, Debug, Default)]
pub struct TimecourseAnalyzer {
    signal: Vec<f64>,
    gradient: Vec<f64>,
    result: PerfusionResult,
}

impl TimecourseAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal_timecourse(&self) -> &[f64] {
        &self.signal
    }

    pub fn gradient_timecourse(&self) -> &[f64] {
        &self.gradient
    }

    pub fn result(&self) -> &PerfusionResult {
        &self.result
    }

    /// Mean ROI signal per frame. An empty frame sequence leaves an empty timecourse.
    pub fn build_signal_timecourse(&mut self, frames: &[Frame], mask: &Mask) {
        if frames.is_empty() {
            error!("Cannot calculate timecourse - no frames loaded");
            self.signal.clear();
            return;
        }

        self.signal = signal_timecourse(frames, mask);
        for (i, s) in self.signal.iter().enumerate() {
            debug!(frame = i, signal = s, "Frame mean signal");
        }
        info!(frames = self.signal.len(), "Signal timecourse built");
    }

    /// First differences of the signal timecourse.
    pub fn build_gradient_timecourse(&mut self) {
        if self.signal.is_empty() {
            error!("Cannot calculate gradient - no timecourse data");
            self.gradient.clear();
            return;
        }

        self.gradient = first_differences(&self.signal);
        for (i, g) in self.gradient.iter().enumerate() {
            debug!(frame = i, gradient = g, "Frame gradient");
        }
    }

    /// Rebuild the gradient, then locate the peak frame and the arrival frame.
    ///
    /// Arrival is the first frame before the peak whose gradient is strictly
    /// greater than `threshold_gradient`.
    pub fn find_peak_and_arrival(&mut self, threshold_gradient: f64) {
        if self.signal.is_empty() {
            error!("Cannot find peak/arrival - no timecourse data");
            return;
        }

        self.build_gradient_timecourse();

        let Some((peak_frame, peak_signal)) = first_max(&self.signal) else {
            return;
        };
        self.result.peak_frame = Some(peak_frame);
        self.result.peak_signal = peak_signal;
        info!(peak_frame, peak_signal, "Peak frame found");

        self.result.arrival_frame = find_arrival(&self.gradient, peak_frame, threshold_gradient);
        match self.result.arrival_frame {
            Some(arrival_frame) => {
                self.result.arrival_signal = self.signal[arrival_frame];
                info!(
                    arrival_frame,
                    arrival_signal = self.result.arrival_signal,
                    "Arrival frame found"
                );
            }
            None => warn!(
                threshold = threshold_gradient,
                "Could not find arrival frame with gradient above threshold"
            ),
        }
    }

    /// Uptake rate between arrival and peak, `0.0` unless arrival precedes peak.
    pub fn calculate_temporal_gradient(&mut self) {
        let r = &mut self.result;
        match (r.arrival_frame, r.peak_frame) {
            (Some(arrival), Some(peak)) if peak > arrival => {
                r.temporal_gradient = (r.peak_signal - r.arrival_signal) / (peak - arrival) as f64;
                info!(
                    temporal_gradient = r.temporal_gradient,
                    peak_signal = r.peak_signal,
                    arrival_signal = r.arrival_signal,
                    peak,
                    arrival,
                    "Temporal gradient computed"
                );
            }
            _ => {
                error!("Cannot calculate temporal gradient - invalid arrival/peak frames");
                r.temporal_gradient = 0.0;
            }
        }
    }
}
