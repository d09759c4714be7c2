use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use retina_core::consts::{
    DEFAULT_SELF_TEST_EPSILON, DEFAULT_SELF_TEST_ITERATIONS, DEFAULT_SELF_TEST_SAMPLES,
};
use retina_core::roc::{run_self_test, SelfTestOptions};

#[derive(Args)]
pub struct SelfTestArgs {
    /// Number of random iterations
    #[arg(long, default_value_t = DEFAULT_SELF_TEST_ITERATIONS)]
    pub iterations: usize,

    /// Positive and negative scores per iteration
    #[arg(long, default_value_t = DEFAULT_SELF_TEST_SAMPLES)]
    pub samples: usize,

    /// Allowed gap between AUC estimators
    #[arg(long, default_value_t = DEFAULT_SELF_TEST_EPSILON)]
    pub epsilon: f64,

    /// RNG seed
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Worker count for the parallel ROC check
    #[arg(long, default_value = "4")]
    pub workers: usize,
}

pub fn run(args: &SelfTestArgs) -> Result<()> {
    let options = SelfTestOptions {
        iterations: args.iterations,
        samples: args.samples,
        epsilon: args.epsilon,
        seed: args.seed,
        workers: args.workers,
    };

    let pb = ProgressBar::new(options.iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Testing AUC estimators");

    let progress = |done: usize| pb.set_position(done as u64);
    let result = run_self_test(&options, Some(&progress));
    pb.finish_and_clear();
    let report = result?;

    println!(
        "Self-test passed: {} iterations, {} scores each, max |trapz - wmw| = {:.3e}",
        report.iterations, options.samples, report.max_estimator_gap
    );
    Ok(())
}
