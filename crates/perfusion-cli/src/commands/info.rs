use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use perfusion_core::io::pgm::{load_pgm, read_header};

#[derive(Args)]
pub struct InfoArgs {
    /// Input PGM file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let header = read_header(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", header.width, header.height);
    println!("Max value:   {}", header.max_value);

    let frame = load_pgm(&args.file)?;
    let data = frame.data();

    let min = data.iter().copied().min().unwrap_or(0);
    let max = data.iter().copied().max().unwrap_or(0);
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / data.len() as f64;

    println!("Range:       {}..{}", min, max);
    println!("Mean:        {:.2}", mean);

    Ok(())
}
