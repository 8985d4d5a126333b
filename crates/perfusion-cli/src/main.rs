mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perfusion", about = "MRI contrast perfusion analysis tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze contrast uptake in an ROI across a frame sequence
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show PGM frame metadata
    Info(commands::info::InfoArgs),
    /// Print or save the default analysis config
    Config(commands::config::ConfigArgs),
    /// Write a synthetic bolus sequence for trying out the tool
    Synth(commands::synth::SynthArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Synth(args) => commands::synth::run(args),
    }
}
