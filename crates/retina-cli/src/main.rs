mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "retina", about = "Histogram thresholding and ROC/AUC evaluation tool")]
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
    /// Show image metadata and histogram occupancy
    Info(commands::info::InfoArgs),
    /// Select a threshold and binarize a grayscale image
    Threshold(commands::threshold::ThresholdArgs),
    /// Compute a ROC curve and AUC from two score files
    Roc(commands::roc::RocArgs),
    /// Run the randomized AUC consistency checks
    Selftest(commands::selftest::SelfTestArgs),
    /// Print or save the default engine config as TOML
    Config(commands::config::ConfigArgs),
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
        Commands::Info(args) => commands::info::run(args),
        Commands::Threshold(args) => commands::threshold::run(args),
        Commands::Roc(args) => commands::roc::run(args),
        Commands::Selftest(args) => commands::selftest::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
