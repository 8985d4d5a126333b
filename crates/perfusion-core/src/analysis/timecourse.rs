//! Pure series helpers behind [`super::TimecourseAnalyzer`].

use crate::frame::Frame;
use crate::mask::Mask;
use crate::stats::mean_in_region;

/// Mean ROI signal of every frame, in frame order.
pub fn signal_timecourse(frames: &[Frame], mask: &Mask) -> Vec<f64> {
    frames.iter().map(|f| mean_in_region(f, mask)).collect()
}

/// `out[i] = values[i + 1] - values[i]`. Empty for fewer than two values.
pub fn first_differences(values: &[f64]) -> Vec<f64> {
    if values.len() <= 1 {
        return Vec::new();
    }
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Index and value of the maximum; ties resolve to the lowest index.
pub fn first_max(values: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            None => best = Some((i, v)),
            Some((_, b)) if v > b => best = Some((i, v)),
            _ => {}
        }
    }
    best
}

/// First index `i < peak_frame` with `gradient[i] > threshold` (strict).
pub fn find_arrival(gradient: &[f64], peak_frame: usize, threshold: f64) -> Option<usize> {
    gradient
        .iter()
        .take(peak_frame)
        .position(|&g| g > threshold)
}

/// Minimum and maximum of a series, `None` when empty.
pub fn series_range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
