use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::debug;

use crate::consts::{DEFAULT_MAX_FRAMES, FRAME_EXTENSION, FRAME_ORDINAL_DIGITS};
use crate::error::{PerfusionError, Result};
use crate::frame::{Frame, FrameMetadata};

const PGM_MAGIC: &str = "P2";

/// Header fields of a plain-text PGM file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PgmHeader {
    pub width: usize,
    pub height: usize,
    pub max_value: u32,
}

/// Path of the frame with 1-based `ordinal` in a numbered sequence,
/// e.g. `frame_path("mri-", 3)` is `mri-03.pgm`.
pub fn frame_path(base: &str, ordinal: usize) -> PathBuf {
    PathBuf::from(format!(
        "{base}{ordinal:0width$}.{FRAME_EXTENSION}",
        width = FRAME_ORDINAL_DIGITS
    ))
}

/// Read and decode a `P2` file. The whole file is read before parsing.
pub fn load_pgm(path: &Path) -> Result<Frame> {
    debug!(path = %path.display(), "Loading PGM file");
    let text = std::fs::read_to_string(path)?;
    let frame = parse_pgm(&text)?;
    debug!(
        width = frame.width(),
        height = frame.height(),
        max_value = frame.max_value(),
        "Successfully loaded PGM file"
    );
    Ok(frame.with_metadata(FrameMetadata {
        frame_index: 0,
        source: Some(path.to_path_buf()),
    }))
}

/// Decode plain-text PGM content. `#` starts a comment running to end of line.
pub fn parse_pgm(text: &str) -> Result<Frame> {
    let mut tokens = tokenize(text);

    let magic = tokens.next().unwrap_or("");
    if magic != PGM_MAGIC {
        return Err(PerfusionError::InvalidPgm(format!(
            "Unexpected magic number: {magic:?}"
        )));
    }

    let header = parse_header(&mut tokens)?;
    let total = header
        .width
        .checked_mul(header.height)
        .ok_or(PerfusionError::InvalidDimensions {
            width: header.width as i64,
            height: header.height as i64,
        })?;
    // Each sample takes at least two bytes of text, so the file bounds the buffer.
    let mut pixels = Vec::with_capacity(total.min(text.len() / 2));

    for i in 0..total {
        let token = tokens.next().ok_or_else(|| {
            PerfusionError::InvalidPgm(format!("Expected {total} samples, found {i}"))
        })?;
        let value: u32 = token
            .parse()
            .map_err(|_| PerfusionError::InvalidPgm(format!("Invalid sample: {token:?}")))?;
        pixels.push(value);
    }

    let data = Array2::from_shape_vec((header.height, header.width), pixels)
        .map_err(|e| PerfusionError::InvalidPgm(e.to_string()))?;
    Frame::new(data, header.max_value)
}

/// Whitespace-separated tokens with `#` comments stripped.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
}

fn parse_header<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<PgmHeader> {
    let mut next_int = |field: &str| -> Result<i64> {
        let token = tokens
            .next()
            .ok_or_else(|| PerfusionError::InvalidPgm(format!("Missing {field}")))?;
        token
            .parse()
            .map_err(|_| PerfusionError::InvalidPgm(format!("Invalid {field}: {token:?}")))
    };

    let width = next_int("width")?;
    let height = next_int("height")?;
    let max_value = next_int("max value")?;

    if width <= 0 || height <= 0 {
        return Err(PerfusionError::InvalidDimensions { width, height });
    }
    if max_value <= 0 || max_value > u32::MAX as i64 {
        return Err(PerfusionError::InvalidMaxValue(max_value));
    }

    Ok(PgmHeader {
        width: width as usize,
        height: height as usize,
        max_value: max_value as u32,
    })
}

/// Read only the header of a `P2` file.
pub fn read_header(path: &Path) -> Result<PgmHeader> {
    let text = std::fs::read_to_string(path)?;
    let mut tokens = tokenize(&text);
    match tokens.next() {
        Some(PGM_MAGIC) => parse_header(&mut tokens),
        other => Err(PerfusionError::InvalidPgm(format!(
            "Unexpected magic number: {:?}",
            other.unwrap_or("")
        ))),
    }
}

/// Encode a frame as plain-text PGM, one image row per line.
pub fn encode_pgm(frame: &Frame) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{PGM_MAGIC}");
    let _ = writeln!(out, "{} {}", frame.width(), frame.height());
    let _ = writeln!(out, "{}", frame.max_value());
    for row in frame.data().rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Write a frame as plain-text PGM.
pub fn save_pgm(frame: &Frame, path: &Path) -> Result<()> {
    std::fs::write(path, encode_pgm(frame))?;
    Ok(())
}

/// Load `{base}01.pgm`, `{base}02.pgm`, ... up to `max_frames`.
///
/// A failure on the first frame is an error. A failure on a later frame is
/// taken as the end of the available sequence.
pub fn load_sequence(base: &str, max_frames: usize) -> Result<Vec<Frame>> {
    load_sequence_with_progress(base, max_frames, |_| {})
}

/// Like [`load_sequence`], calling `on_progress(frames_loaded)` after each frame.
pub fn load_sequence_with_progress(
    base: &str,
    max_frames: usize,
    mut on_progress: impl FnMut(usize),
) -> Result<Vec<Frame>> {
    debug!(base, max_frames, "Loading frame sequence");
    let mut frames = Vec::with_capacity(max_frames.min(DEFAULT_MAX_FRAMES));

    for ordinal in 1..=max_frames {
        let path = frame_path(base, ordinal);
        match load_pgm(&path) {
            Ok(frame) => {
                let mut metadata = frame.metadata.clone();
                metadata.frame_index = frames.len();
                frames.push(frame.with_metadata(metadata));
                on_progress(frames.len());
            }
            Err(e) if ordinal == 1 => {
                return Err(PerfusionError::FrameLoad {
                    ordinal,
                    path,
                    source: Box::new(e),
                });
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "End of frame sequence");
                break;
            }
        }
    }

    if frames.is_empty() {
        return Err(PerfusionError::EmptySequence);
    }
    debug!(count = frames.len(), "Frame sequence loaded");
    Ok(frames)
}
