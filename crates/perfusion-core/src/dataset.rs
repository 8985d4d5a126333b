use tracing::{debug, error, info};

use crate::analysis::timecourse::series_range;
use crate::analysis::{AnalysisStage, PerfusionResult, TimecourseAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::frame::Frame;
use crate::io::pgm::load_sequence_with_progress;
use crate::mask::Mask;
use crate::render::plot_timecourse;

/// A series prepared for plotting, with its value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotSeries<'a> {
    pub values: &'a [f64],
    pub min: f64,
    pub max: f64,
}

impl PlotSeries<'_> {
    fn of(values: &[f64]) -> Option<PlotSeries<'_>> {
        let (min, max) = series_range(values)?;
        Some(PlotSeries { values, min, max })
    }

    pub fn render(&self, grid_x: f64, grid_y: f64) -> String {
        plot_timecourse(self.values, self.min, self.max, grid_x, grid_y)
    }
}

/// A frame sequence, its ROI mask and the analysis derived from them.
///
/// Steps run strictly forward: load frames, create the mask, build the
/// timecourse, find peak and arrival, compute the temporal gradient. A fresh
/// dataset is used to reanalyze.
#[derive(Debug)]
pub struct PerfusionDataset {
    name: String,
    frames: Vec<Frame>,
    mask: Mask,
    analyzer: TimecourseAnalyzer,
    stage: AnalysisStage,
}

impl PerfusionDataset {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(name = %name, "Perfusion dataset initialized");
        Self {
            name,
            frames: Vec::new(),
            mask: Mask::new(0, 0),
            analyzer: TimecourseAnalyzer::new(),
            stage: AnalysisStage::Empty,
        }
    }

    /// Dataset over frames already in memory.
    pub fn from_frames(name: impl Into<String>, mut frames: Vec<Frame>) -> Self {
        let mut dataset = Self::new(name);
        for (i, frame) in frames.iter_mut().enumerate() {
            frame.metadata.frame_index = i;
        }
        if !frames.is_empty() {
            dataset.frames = frames;
            dataset.stage = AnalysisStage::FramesLoaded;
        }
        dataset
    }

    /// Run every step described by `config`.
    pub fn analyze(config: &AnalysisConfig) -> Result<Self> {
        Self::analyze_with_progress(config, |_| {})
    }

    /// Like [`Self::analyze`], reporting `on_progress(frames_loaded)` while loading.
    pub fn analyze_with_progress(
        config: &AnalysisConfig,
        on_progress: impl FnMut(usize),
    ) -> Result<Self> {
        config.validate()?;

        let mut dataset = Self::new(config.name.clone());
        dataset.load_images_with_progress(&config.input_base, config.max_frames, on_progress)?;
        dataset.create_roi_mask(config.roi.center_x, config.roi.center_y, config.roi.size);
        dataset.calculate_timecourse();
        dataset.find_peak_and_arrival(config.threshold_gradient);
        dataset.calculate_temporal_gradient();
        Ok(dataset)
    }

    /// Load `{base}01.pgm` onwards, at most `max_frames` frames.
    pub fn load_images(&mut self, base: &str, max_frames: usize) -> Result<()> {
        self.load_images_with_progress(base, max_frames, |_| {})
    }

    pub fn load_images_with_progress(
        &mut self,
        base: &str,
        max_frames: usize,
        on_progress: impl FnMut(usize),
    ) -> Result<()> {
        self.frames = load_sequence_with_progress(base, max_frames, on_progress)?;
        self.stage = AnalysisStage::FramesLoaded;
        info!(count = self.frames.len(), base, "Frames loaded");
        Ok(())
    }

    /// Square ROI mask sized to the first frame. Without frames this is a no-op.
    pub fn create_roi_mask(&mut self, center_x: i64, center_y: i64, size: i64) {
        let Some(first) = self.frames.first() else {
            error!("Cannot create mask - no frames loaded");
            return;
        };

        let mut mask = Mask::new(first.width(), first.height());
        mask.add_square(center_x, center_y, size);
        info!(
            center_x,
            center_y,
            size,
            members = mask.member_count(),
            "ROI mask created"
        );
        self.mask = mask;
    }

    pub fn calculate_timecourse(&mut self) {
        self.analyzer.build_signal_timecourse(&self.frames, &self.mask);
        if !self.analyzer.signal_timecourse().is_empty() {
            self.stage = AnalysisStage::TimecourseBuilt;
        }
    }

    pub fn find_peak_and_arrival(&mut self, threshold_gradient: f64) {
        self.analyzer.find_peak_and_arrival(threshold_gradient);
        if self.analyzer.result().peak_frame.is_some() {
            self.stage = AnalysisStage::PeakArrivalFound;
        }
    }

    pub fn calculate_temporal_gradient(&mut self) {
        self.analyzer.calculate_temporal_gradient();
        if self.stage == AnalysisStage::PeakArrivalFound {
            self.stage = AnalysisStage::TemporalGradientComputed;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn stage(&self) -> AnalysisStage {
        self.stage
    }

    pub fn signal_timecourse(&self) -> &[f64] {
        self.analyzer.signal_timecourse()
    }

    pub fn gradient_timecourse(&self) -> &[f64] {
        self.analyzer.gradient_timecourse()
    }

    pub fn result(&self) -> &PerfusionResult {
        self.analyzer.result()
    }

    /// Arrival frame index, `-1` when not found.
    pub fn arrival_frame(&self) -> i64 {
        self.result().arrival_frame_index()
    }

    pub fn arrival_signal(&self) -> f64 {
        self.result().arrival_signal
    }

    /// Peak frame index, `-1` before a peak search.
    pub fn peak_frame(&self) -> i64 {
        self.result().peak_frame_index()
    }

    pub fn peak_signal(&self) -> f64 {
        self.result().peak_signal
    }

    pub fn temporal_gradient(&self) -> f64 {
        self.result().temporal_gradient
    }

    /// The frame at peak contrast, if a peak was found.
    pub fn peak_image(&self) -> Option<&Frame> {
        let frame = self.result().peak_frame.and_then(|i| self.frames.get(i));
        if frame.is_none() {
            error!("Cannot display peak image - invalid frame index");
        }
        frame
    }

    pub fn signal_plot(&self) -> Option<PlotSeries<'_>> {
        let series = PlotSeries::of(self.signal_timecourse());
        if series.is_none() {
            error!("Cannot plot timecourse - no data");
        }
        series
    }

    pub fn gradient_plot(&self) -> Option<PlotSeries<'_>> {
        let series = PlotSeries::of(self.gradient_timecourse());
        if series.is_none() {
            error!("Cannot plot gradient - no data");
        }
        series
    }
}
