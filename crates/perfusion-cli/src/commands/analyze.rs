use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use perfusion_core::config::{AnalysisConfig, RoiConfig};
use perfusion_core::consts::{
    DEFAULT_CONTRAST_INFO, GRADIENT_PLOT_GRID_Y, PLOT_GRID_X, SIGNAL_PLOT_GRID_Y,
};
use perfusion_core::dataset::PerfusionDataset;
use perfusion_core::io::contrast::ContrastAgent;
use perfusion_core::io::image_io::save_png;
use perfusion_core::render::render_image;
use tracing::{debug, info};

use crate::summary;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Analysis config file (TOML); overrides the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frame filename prefix (frames are <BASE>01.pgm, <BASE>02.pgm, ...)
    #[arg(long, default_value = "mri-")]
    pub base: String,

    /// Maximum number of frames to load
    #[arg(long, default_value = "20")]
    pub frames: usize,

    /// ROI center column
    #[arg(long, default_value = "74", allow_hyphen_values = true)]
    pub roi_x: i64,

    /// ROI center row
    #[arg(long, default_value = "90", allow_hyphen_values = true)]
    pub roi_y: i64,

    /// ROI side length in pixels
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub roi_size: i64,

    /// Signal gradient that must be exceeded to mark contrast arrival
    #[arg(long, default_value = "10.0", allow_hyphen_values = true)]
    pub threshold: f64,

    /// Contrast agent metadata file
    #[arg(long, default_value = DEFAULT_CONTRAST_INFO)]
    pub contrast: PathBuf,

    /// Skip contrast agent metadata
    #[arg(long)]
    pub no_contrast: bool,

    /// Skip the peak image and timecourse plots
    #[arg(long)]
    pub no_plots: bool,

    /// Print the per-frame signal and gradient table
    #[arg(long)]
    pub table: bool,

    /// Save the peak frame as PNG
    #[arg(long)]
    pub save_peak: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid analysis config")?
    } else {
        build_config_from_args(args)
    };

    debug!(?config, "Analysis configuration");
    summary::print_analysis_summary(&config);

    let contrast = config
        .contrast_info
        .as_ref()
        .map(|path| {
            ContrastAgent::load(path)
                .with_context(|| format!("Failed to load contrast info {}", path.display()))
        })
        .transpose()?;

    let pb = ProgressBar::new(config.max_frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Loading frames");

    let dataset = PerfusionDataset::analyze_with_progress(&config, |loaded| {
        pb.set_position(loaded as u64);
    })
    .context("Failed to load MRI images")?;
    pb.finish_with_message(format!("Loaded {} frames", dataset.frames().len()));
    info!(
        frames = dataset.frames().len(),
        stage = %dataset.stage(),
        "Analysis finished"
    );

    if !args.no_plots {
        if let Some(peak) = dataset.peak_image() {
            println!("\nImage at peak contrast concentration:");
            println!("Image {}x{}", peak.width(), peak.height());
            print!("{}", render_image(peak, 0.0, peak.max_value() as f64));
        }
        if let Some(series) = dataset.signal_plot() {
            println!("\nSignal timecourse within ROI:");
            print!("{}", series.render(PLOT_GRID_X, SIGNAL_PLOT_GRID_Y));
        }
        if let Some(series) = dataset.gradient_plot() {
            println!("\nGradient of signal timecourse within ROI:");
            print!("{}", series.render(PLOT_GRID_X, GRADIENT_PLOT_GRID_Y));
        }
    }

    if args.table {
        summary::print_timecourse_table(&dataset);
    }

    if let Some(ref path) = args.save_peak {
        if let Some(peak) = dataset.peak_image() {
            save_png(peak, path)
                .with_context(|| format!("Failed to save peak image to {}", path.display()))?;
            info!(path = %path.display(), "Peak image saved");
            println!("\nPeak image saved to {}", path.display());
        }
    }

    if let Some(ref agent) = contrast {
        println!("\nContrast agent: {}, dose = {}", agent.name, agent.dose);
    }
    summary::print_results(&dataset);

    Ok(())
}

fn build_config_from_args(args: &AnalyzeArgs) -> AnalysisConfig {
    AnalysisConfig {
        input_base: args.base.clone(),
        max_frames: args.frames,
        roi: RoiConfig {
            center_x: args.roi_x,
            center_y: args.roi_y,
            size: args.roi_size,
        },
        threshold_gradient: args.threshold,
        contrast_info: (!args.no_contrast).then(|| args.contrast.clone()),
        ..AnalysisConfig::default()
    }
}
