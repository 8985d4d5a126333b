use std::path::Path;

use perfusion_core::frame::Frame;
use perfusion_core::io::pgm::{frame_path, save_pgm};
use perfusion_core::mask::Mask;

pub const TEST_MAX_VALUE: u32 = 255;

/// Frame filled with a single intensity.
pub fn uniform_frame(width: usize, height: usize, value: u32) -> Frame {
    Frame::from_pixels(width, height, vec![value; width * height], TEST_MAX_VALUE)
        .expect("valid uniform frame")
}

/// Frame whose pixel at `(x, y)` is `y * width + x`.
pub fn ramp_frame(width: usize, height: usize) -> Frame {
    let pixels = (0..(width * height) as u32).collect();
    Frame::from_pixels(width, height, pixels, (width * height) as u32).expect("valid ramp frame")
}

/// One single-pixel frame per value, so the full-frame mean equals the value.
pub fn frames_from_signal(signal: &[u32]) -> Vec<Frame> {
    signal.iter().map(|&v| uniform_frame(1, 1, v)).collect()
}

/// Mask with every cell marked.
pub fn full_mask(width: usize, height: usize) -> Mask {
    let mut mask = Mask::new(width, height);
    let side = width.max(height) as i64;
    mask.add_square(side / 2, side / 2, side * 2);
    mask
}

/// Write `frames` as `{dir}/{prefix}01.pgm`, `{dir}/{prefix}02.pgm`, ...
/// and return the base path for sequence loading.
pub fn write_sequence(dir: &Path, prefix: &str, frames: &[Frame]) -> String {
    let base = dir.join(prefix).to_string_lossy().into_owned();
    for (i, frame) in frames.iter().enumerate() {
        save_pgm(frame, &frame_path(&base, i + 1)).expect("write PGM frame");
    }
    base
}
