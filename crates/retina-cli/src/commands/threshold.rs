use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use retina_core::binarize::{auto_binarize, BinarizationMethod};
use retina_core::frame::rescale;
use retina_core::io::{load_frame, save_binary};

use super::load_config;
use crate::summary::print_threshold_summary;

#[derive(Args)]
pub struct ThresholdArgs {
    /// Input grayscale image (8- or 16-bit)
    pub file: PathBuf,

    /// Engine config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Threshold method, or `all` to compare every method
    #[arg(long)]
    pub method: Option<BinarizationMethod>,

    /// Keep empty leading/trailing histogram bins
    #[arg(long)]
    pub no_compress: bool,

    /// Histogram bin count (defaults to 2^bit_depth)
    #[arg(long)]
    pub bins: Option<usize>,

    /// Significant bits per sample, rescaled to the storage depth first
    #[arg(long)]
    pub bits: Option<u8>,

    /// Output path for the binary PNG
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// `out.png` for a single method, `out_<method>.png` when comparing several.
fn output_path(base: &Path, method: &str, several: bool) -> PathBuf {
    if !several {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "binary".into());
    base.with_file_name(format!("{stem}_{method}.png"))
}

pub fn run(args: &ThresholdArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.binarization;
    if let Some(method) = args.method {
        config.method = method;
    }
    if args.no_compress {
        config.compress_histogram = false;
    }
    if let Some(bins) = args.bins {
        config.bins = Some(bins);
    }

    let mut frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    if let Some(bits) = args.bits {
        frame = rescale(&frame, bits, frame.bit_depth)?;
    }

    let outcomes = auto_binarize(&frame, &config)?;
    print_threshold_summary(&args.file, &config, &outcomes);

    if let Some(ref base) = args.output {
        let several = outcomes.len() > 1;
        for outcome in &outcomes {
            if let Some(ref binary) = outcome.binary {
                let path = output_path(base, outcome.method.name(), several);
                save_binary(binary, &path)
                    .with_context(|| format!("Failed to save {}", path.display()))?;
                println!("Saved {}", path.display());
            }
        }
    }

    Ok(())
}
