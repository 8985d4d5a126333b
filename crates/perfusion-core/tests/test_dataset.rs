#[allow(dead_code)]
mod common;

use approx::assert_relative_eq;

use perfusion_core::analysis::AnalysisStage;
use perfusion_core::config::{AnalysisConfig, RoiConfig};
use perfusion_core::dataset::PerfusionDataset;
use perfusion_core::error::PerfusionError;
use perfusion_core::frame::Frame;

fn two_pixel_frames() -> Vec<Frame> {
    [10, 50, 90]
        .iter()
        .map(|&v| common::uniform_frame(2, 1, v))
        .collect()
}

#[test]
fn test_end_to_end_in_memory() {
    let mut dataset = PerfusionDataset::from_frames("bolus", two_pixel_frames());
    assert_eq!(dataset.stage(), AnalysisStage::FramesLoaded);

    dataset.create_roi_mask(0, 0, 2);
    assert_eq!(dataset.mask().member_count(), 2);

    dataset.calculate_timecourse();
    assert_eq!(dataset.stage(), AnalysisStage::TimecourseBuilt);
    assert_eq!(dataset.signal_timecourse(), &[10.0, 50.0, 90.0]);

    dataset.find_peak_and_arrival(30.0);
    assert_eq!(dataset.stage(), AnalysisStage::PeakArrivalFound);
    assert_eq!(dataset.gradient_timecourse(), &[40.0, 40.0]);
    assert_eq!(dataset.arrival_frame(), 0);
    assert_eq!(dataset.arrival_signal(), 10.0);
    assert_eq!(dataset.peak_frame(), 2);
    assert_eq!(dataset.peak_signal(), 90.0);

    dataset.calculate_temporal_gradient();
    assert_eq!(dataset.stage(), AnalysisStage::TemporalGradientComputed);
    assert_relative_eq!(dataset.temporal_gradient(), 40.0);

    let peak = dataset.peak_image().expect("peak frame");
    assert_eq!(peak.metadata.frame_index, 2);
    assert_eq!(peak.intensity(1, 0), 90);
}

#[test]
fn test_steps_without_frames_are_noops() {
    let mut dataset = PerfusionDataset::new("empty");
    dataset.create_roi_mask(5, 5, 3);
    dataset.calculate_timecourse();
    dataset.find_peak_and_arrival(10.0);
    dataset.calculate_temporal_gradient();

    assert_eq!(dataset.stage(), AnalysisStage::Empty);
    assert_eq!(dataset.mask().member_count(), 0);
    assert!(dataset.signal_timecourse().is_empty());
    assert!(dataset.gradient_timecourse().is_empty());
    assert_eq!(dataset.arrival_frame(), -1);
    assert_eq!(dataset.peak_frame(), -1);
    assert_eq!(dataset.temporal_gradient(), 0.0);
    assert!(dataset.peak_image().is_none());
    assert!(dataset.signal_plot().is_none());
    assert!(dataset.gradient_plot().is_none());
}

#[test]
fn test_roi_outside_frames_gives_zero_signal() {
    let mut dataset = PerfusionDataset::from_frames("off-target", two_pixel_frames());
    dataset.create_roi_mask(50, 50, 3);
    dataset.calculate_timecourse();
    assert_eq!(dataset.signal_timecourse(), &[0.0, 0.0, 0.0]);

    dataset.find_peak_and_arrival(0.0);
    dataset.calculate_temporal_gradient();
    assert_eq!(dataset.peak_frame(), 0);
    assert_eq!(dataset.arrival_frame(), -1);
    assert_eq!(dataset.temporal_gradient(), 0.0);
}

#[test]
fn test_plot_series_ranges() {
    let mut dataset = PerfusionDataset::from_frames("bolus", two_pixel_frames());
    dataset.create_roi_mask(0, 0, 2);
    dataset.calculate_timecourse();
    dataset.find_peak_and_arrival(30.0);

    let signal = dataset.signal_plot().expect("signal series");
    assert_eq!((signal.min, signal.max), (10.0, 90.0));
    assert_eq!(signal.values.len(), 3);

    let gradient = dataset.gradient_plot().expect("gradient series");
    assert_eq!((gradient.min, gradient.max), (40.0, 40.0));
    assert!(!gradient.render(2.0, 10.0).is_empty());
}

#[test]
fn test_load_images_stops_at_first_gap() {
    let dir = tempfile::tempdir().unwrap();
    let frames: Vec<Frame> = (0..4).map(|i| common::uniform_frame(3, 3, i * 10)).collect();
    let base = common::write_sequence(dir.path(), "mri-", &frames);

    let mut dataset = PerfusionDataset::new("files");
    dataset.load_images(&base, 20).unwrap();
    assert_eq!(dataset.frames().len(), 4);
    assert_eq!(dataset.stage(), AnalysisStage::FramesLoaded);
    for (i, frame) in dataset.frames().iter().enumerate() {
        assert_eq!(frame.metadata.frame_index, i);
        assert_eq!(frame.intensity(1, 1), i as u32 * 10);
    }
}

#[test]
fn test_load_images_respects_max_frames() {
    let dir = tempfile::tempdir().unwrap();
    let frames: Vec<Frame> = (0..5).map(|i| common::uniform_frame(2, 2, i)).collect();
    let base = common::write_sequence(dir.path(), "scan-", &frames);

    let mut dataset = PerfusionDataset::new("files");
    let mut progress = Vec::new();
    dataset
        .load_images_with_progress(&base, 3, |n| progress.push(n))
        .unwrap();
    assert_eq!(dataset.frames().len(), 3);
    assert_eq!(progress, vec![1, 2, 3]);
}

#[test]
fn test_load_images_missing_first_frame_fails() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("missing-").to_string_lossy().into_owned();

    let mut dataset = PerfusionDataset::new("files");
    let err = dataset.load_images(&base, 20).unwrap_err();
    assert!(matches!(err, PerfusionError::FrameLoad { ordinal: 1, .. }));
    assert_eq!(dataset.stage(), AnalysisStage::Empty);
}

#[test]
fn test_corrupt_later_frame_ends_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let frames: Vec<Frame> = (0..2).map(|i| common::uniform_frame(2, 2, i)).collect();
    let base = common::write_sequence(dir.path(), "mri-", &frames);
    std::fs::write(format!("{base}03.pgm"), "P5 binary").unwrap();

    let mut dataset = PerfusionDataset::new("files");
    dataset.load_images(&base, 20).unwrap();
    assert_eq!(dataset.frames().len(), 2);
}

#[test]
fn test_analyze_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let signal = [20, 21, 22, 60, 100, 120, 110];
    let frames: Vec<Frame> = signal
        .iter()
        .map(|&v| common::uniform_frame(9, 9, v))
        .collect();
    let base = common::write_sequence(dir.path(), "mri-", &frames);

    let config = AnalysisConfig {
        input_base: base,
        roi: RoiConfig {
            center_x: 4,
            center_y: 4,
            size: 3,
        },
        threshold_gradient: 10.0,
        contrast_info: None,
        ..AnalysisConfig::default()
    };
    let dataset = PerfusionDataset::analyze(&config).unwrap();

    assert_eq!(dataset.frames().len(), signal.len());
    assert_eq!(dataset.mask().member_count(), 9);
    // gradient [1, 1, 38, 40, 20, -10]
    assert_eq!(dataset.arrival_frame(), 2);
    assert_eq!(dataset.peak_frame(), 5);
    assert_relative_eq!(dataset.temporal_gradient(), (120.0 - 22.0) / 3.0);
    assert_eq!(dataset.stage(), AnalysisStage::TemporalGradientComputed);
}

#[test]
fn test_analyze_rejects_invalid_config() {
    let config = AnalysisConfig {
        max_frames: 0,
        ..AnalysisConfig::default()
    };
    assert!(matches!(
        PerfusionDataset::analyze(&config),
        Err(PerfusionError::Config(_))
    ));
}
