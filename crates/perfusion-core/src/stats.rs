use tracing::debug;

use crate::frame::Frame;
use crate::mask::Mask;

/// Mean intensity of the frame pixels that fall inside the mask.
///
/// Iterates the frame's grid and asks the mask about each coordinate, so mask
/// cells outside the frame are ignored and frame pixels outside the mask never
/// count. Returns exactly `0.0` when no pixel is included.
pub fn mean_in_region(frame: &Frame, mask: &Mask) -> f64 {
    let (sum, count) = region_sum(frame, mask);

    let mean = if count > 0 {
        sum as f64 / count as f64
    } else {
        0.0
    };
    debug!(sum, count, mean, "Region mean calculation");
    mean
}

/// Number of frame pixels inside the mask.
pub fn region_pixel_count(frame: &Frame, mask: &Mask) -> usize {
    region_sum(frame, mask).1
}

fn region_sum(frame: &Frame, mask: &Mask) -> (u64, usize) {
    let mut sum = 0u64;
    let mut count = 0usize;

    for ((row, col), &value) in frame.data().indexed_iter() {
        if mask.contains(col as i64, row as i64) {
            sum += value as u64;
            count += 1;
        }
    }

    (sum, count)
}
