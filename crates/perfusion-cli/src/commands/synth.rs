use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use perfusion_core::consts::{DEFAULT_CONTRAST_INFO, DEFAULT_ROI_CENTER_X, DEFAULT_ROI_CENTER_Y};
use perfusion_core::frame::Frame;
use perfusion_core::io::pgm::{frame_path, save_pgm};

const MAX_VALUE: u32 = 255;
const BLOOD_POOL_RADIUS: f64 = 12.0;
const MYOCARDIUM_RADIUS: f64 = 20.0;
const GAMMA_SHAPE: f64 = 3.0;

#[derive(Args)]
pub struct SynthArgs {
    /// Output directory
    pub dir: PathBuf,

    /// Frame filename prefix inside the output directory
    #[arg(long, default_value = "mri-")]
    pub prefix: String,

    /// Number of frames to write
    #[arg(long, default_value = "20")]
    pub frames: usize,

    /// Frame width in pixels
    #[arg(long, default_value = "160")]
    pub width: usize,

    /// Frame height in pixels
    #[arg(long, default_value = "180")]
    pub height: usize,

    /// Frame at which contrast starts to arrive
    #[arg(long, default_value = "4")]
    pub arrival: usize,

    /// Frame of peak blood-pool enhancement
    #[arg(long, default_value = "9")]
    pub peak: usize,
}

/// Gamma-variate bolus shape, 0 before `t0` and 1 at `tp`.
fn bolus(t: f64, t0: f64, tp: f64) -> f64 {
    if t <= t0 || tp <= t0 {
        return 0.0;
    }
    let x = (t - t0) / (tp - t0);
    x.powf(GAMMA_SHAPE) * (GAMMA_SHAPE * (1.0 - x)).exp()
}

fn synth_frame(args: &SynthArgs, t: usize) -> Result<Frame> {
    let (cx, cy) = (DEFAULT_ROI_CENTER_X as f64, DEFAULT_ROI_CENTER_Y as f64);
    let (t0, tp) = (args.arrival as f64, args.peak as f64);
    let blood = bolus(t as f64, t0, tp);
    let tissue = bolus(t as f64, t0 + 2.0, tp + 3.0);

    let mut pixels = Vec::with_capacity(args.width * args.height);
    for y in 0..args.height {
        for x in 0..args.width {
            let r = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            let value = if r <= BLOOD_POOL_RADIUS {
                40.0 + 180.0 * blood
            } else if r <= MYOCARDIUM_RADIUS {
                60.0 + 50.0 * tissue
            } else {
                25.0 + ((x * 7 + y * 13) % 11) as f64
            };
            pixels.push(value.round().clamp(0.0, MAX_VALUE as f64) as u32);
        }
    }
    Ok(Frame::from_pixels(args.width, args.height, pixels, MAX_VALUE)?)
}

pub fn run(args: &SynthArgs) -> Result<()> {
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create {}", args.dir.display()))?;

    let base_path = args.dir.join(&args.prefix);
    let base = base_path.to_string_lossy();
    for t in 0..args.frames {
        let path = frame_path(&base, t + 1);
        save_pgm(&synth_frame(args, t)?, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let contrast_path = args.dir.join(DEFAULT_CONTRAST_INFO);
    std::fs::write(&contrast_path, "Gadobutrol\n0.1\n")
        .with_context(|| format!("Failed to write {}", contrast_path.display()))?;

    println!(
        "Wrote {} frames ({}x{}) to {}",
        args.frames,
        args.width,
        args.height,
        args.dir.display()
    );
    println!(
        "Analyze with: perfusion analyze --base {} --contrast {}",
        base,
        contrast_path.display()
    );
    Ok(())
}
