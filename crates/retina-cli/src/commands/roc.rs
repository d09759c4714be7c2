use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use retina_core::io::read_scores;
use retina_core::roc::{auc_trapz, auc_wmw, compute_roc_with, save_roc};
use tracing::info;

use super::load_config;
use crate::summary::print_roc_summary;

#[derive(Args)]
pub struct RocArgs {
    /// Score file of the positive samples (.sco)
    pub positives: PathBuf,

    /// Score file of the negative samples (.sco)
    pub negatives: PathBuf,

    /// Engine config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lower scores indicate positives
    #[arg(long)]
    pub lower_is_positive: bool,

    /// Compute ROC points on a worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker count for --parallel
    #[arg(long)]
    pub workers: Option<usize>,

    /// Skip the O(P*N) Wilcoxon-Mann-Whitney estimate
    #[arg(long)]
    pub no_wmw: bool,

    /// Write the curve as `-1 <TPR> <FPR>` lines
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RocArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.roc;
    if args.lower_is_positive {
        config.higher_is_positive = false;
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    let positives = read_scores(&args.positives)
        .with_context(|| format!("Failed to read {}", args.positives.display()))?;
    let negatives = read_scores(&args.negatives)
        .with_context(|| format!("Failed to read {}", args.negatives.display()))?;

    info!(
        positives = positives.len(),
        negatives = negatives.len(),
        "Scores loaded"
    );

    let curve = compute_roc_with(&positives, &negatives, &config)?;
    let trapz = auc_trapz(&curve)?;
    let wmw = if args.no_wmw {
        None
    } else {
        Some(auc_wmw(&positives, &negatives, config.higher_is_positive)?)
    };

    print_roc_summary(&config, positives.len(), negatives.len(), curve.len(), trapz, wmw);

    if let Some(ref path) = args.output {
        save_roc(&curve, path)?;
        println!("ROC curve saved to {}", path.display());
    }

    Ok(())
}
