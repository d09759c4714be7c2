use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::consts::{
    DEFAULT_SELF_TEST_EPSILON, DEFAULT_SELF_TEST_ITERATIONS, DEFAULT_SELF_TEST_SAMPLES,
    SELF_TEST_INFINITY_PROBABILITY, SELF_TEST_MAX_NANS,
};
use crate::error::{Result, RetinaError};

use super::auc::{auc_trapz_scores, auc_wmw};
use super::curve::{compute_roc, compute_roc_parallel};

/// Parameters of the AUC self-test.
#[derive(Clone, Debug)]
pub struct SelfTestOptions {
    pub iterations: usize,
    /// Positive and negative scores generated per iteration.
    pub samples: usize,
    /// Allowed gap between the trapezoidal and WMW estimates.
    pub epsilon: f64,
    pub seed: u64,
    /// Worker count for the sequential-versus-parallel curve check.
    pub workers: usize,
}

impl Default for SelfTestOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_SELF_TEST_ITERATIONS,
            samples: DEFAULT_SELF_TEST_SAMPLES,
            epsilon: DEFAULT_SELF_TEST_EPSILON,
            seed: 0,
            workers: 4,
        }
    }
}

/// Summary of a passing self-test run.
#[derive(Clone, Debug)]
pub struct SelfTestReport {
    pub iterations: usize,
    /// Largest |AUC_trapz - AUC_wmw| seen across iterations.
    pub max_estimator_gap: f64,
}

/// Uniform scores in [0, 1], with about 1% replaced by +inf or -inf.
fn random_scores(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| {
            if rng.gen_bool(SELF_TEST_INFINITY_PROBABILITY) {
                if rng.gen_bool(0.5) {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            } else {
                rng.gen::<f64>()
            }
        })
        .collect()
}

fn check(iteration: usize, ok: bool, reason: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(RetinaError::SelfTestFailed {
            iteration,
            reason: reason(),
        })
    }
}

/// Run the AUC consistency suite on seeded random scores.
///
/// Each iteration checks that:
/// 1. trapezoidal and WMW AUC agree within `epsilon`;
/// 2. both satisfy the complement law `AUC(hip) + AUC(!hip) = 1`;
/// 3. injected NaN scores leave both estimates unchanged;
/// 4. all-+inf positives against all--inf negatives give AUC 1, or 0 when
///    lower scores are positive;
/// 5. sequential and parallel ROC curves are identical.
///
/// `on_progress` receives the number of completed iterations.
pub fn run_self_test(
    options: &SelfTestOptions,
    on_progress: Option<&dyn Fn(usize)>,
) -> Result<SelfTestReport> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let eps = options.epsilon;
    let mut max_gap = 0.0_f64;

    for k in 1..=options.iterations {
        let mut pos = random_scores(&mut rng, options.samples);
        let mut neg = random_scores(&mut rng, options.samples);

        let trapz = auc_trapz_scores(&pos, &neg, true)?;
        let wmw = auc_wmw(&pos, &neg, true)?;
        let gap = (trapz - wmw).abs();
        max_gap = max_gap.max(gap);
        check(k, gap <= eps, || {
            format!("|AUC_trapz - AUC_wmw| > {eps} ({trapz} - {wmw} = {gap})")
        })?;

        let trapz_lower = auc_trapz_scores(&pos, &neg, false)?;
        let wmw_lower = auc_wmw(&pos, &neg, false)?;
        check(k, (trapz_lower + trapz - 1.0).abs() <= eps, || {
            format!("trapezoidal complement off by {}", trapz_lower + trapz - 1.0)
        })?;
        check(k, (wmw_lower + wmw - 1.0).abs() <= eps, || {
            format!("WMW complement off by {}", wmw_lower + wmw - 1.0)
        })?;

        let sequential = compute_roc(&pos, &neg, true)?;
        let parallel = compute_roc_parallel(&pos, &neg, true, options.workers)?;
        check(k, sequential == parallel, || {
            "sequential and parallel ROC curves differ".to_string()
        })?;

        let pos_nans = rng.gen_range(1..=SELF_TEST_MAX_NANS);
        let neg_nans = rng.gen_range(1..=SELF_TEST_MAX_NANS);
        pos.extend(std::iter::repeat(f64::NAN).take(pos_nans));
        neg.extend(std::iter::repeat(f64::NAN).take(neg_nans));
        let trapz_nan = auc_trapz_scores(&pos, &neg, true)?;
        let wmw_nan = auc_wmw(&pos, &neg, true)?;
        check(k, trapz_nan == trapz, || {
            format!("NaN scores changed AUC_trapz ({trapz} -> {trapz_nan})")
        })?;
        check(k, wmw_nan == wmw, || {
            format!("NaN scores changed AUC_wmw ({wmw} -> {wmw_nan})")
        })?;

        let pos_inf = vec![f64::INFINITY; options.samples];
        let neg_inf = vec![f64::NEG_INFINITY; options.samples];
        let extremes = [
            (auc_trapz_scores(&pos_inf, &neg_inf, true)?, 1.0, "AUC_trapz"),
            (auc_wmw(&pos_inf, &neg_inf, true)?, 1.0, "AUC_wmw"),
            (auc_trapz_scores(&pos_inf, &neg_inf, false)?, 0.0, "AUC_trapz (lower is positive)"),
            (auc_wmw(&pos_inf, &neg_inf, false)?, 0.0, "AUC_wmw (lower is positive)"),
        ];
        for (value, expected, name) in extremes {
            check(k, value == expected, || {
                format!("{name} on infinite scores is {value}, expected {expected}")
            })?;
        }

        debug!(iteration = k, trapz, wmw, "Self-test iteration passed");
        if let Some(progress) = on_progress {
            progress(k);
        }
    }

    info!(
        iterations = options.iterations,
        max_gap, "AUC self-test passed"
    );
    Ok(SelfTestReport {
        iterations: options.iterations,
        max_estimator_gap: max_gap,
    })
}
