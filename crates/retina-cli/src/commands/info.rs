use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use retina_core::histogram::Histogram;
use retina_core::io::load_frame;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", frame.width(), frame.height());
    println!("Channels:    {}", frame.channels());
    println!("Bit depth:   {}", frame.bit_depth);

    // Histogram details only make sense for frames the thresholders accept.
    if frame.ensure_grayscale("info").is_ok() {
        let histogram = Histogram::from_frame(&frame, None)?;
        match histogram.occupied_range() {
            Some((lo, hi)) => println!("Occupied:    levels {lo}..={hi}"),
            None => println!("Occupied:    none"),
        }
        println!("Pixels:      {}", histogram.total());
    }

    Ok(())
}
