use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::Result;
use crate::frame::Frame;

/// Save a frame as 8-bit grayscale PNG, scaled by its max value.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let h = frame.height();
    let w = frame.width();
    let max = frame.max_value() as f64;

    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &value) in frame.data().indexed_iter() {
        let val = (value as f64 / max * 255.0).round().clamp(0.0, 255.0) as u8;
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
