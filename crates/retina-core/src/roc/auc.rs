use num_traits::{Float, NumCast};

use crate::error::{Result, RetinaError};

use super::curve::{compute_roc, RocCurve};

/// Area under a ROC curve by the trapezoidal rule along the FPR axis.
///
/// The curve must be non-empty and run from (0,0) to (1,1).
pub fn auc_trapz<T: Float>(curve: &RocCurve<T>) -> Result<T> {
    let (first, last) = match (curve.points.first(), curve.points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RetinaError::EmptySample("ROC")),
    };
    let anchored = first.tpr == T::zero()
        && first.fpr == T::zero()
        && last.tpr == T::one()
        && last.fpr == T::one();
    if !anchored {
        return Err(RetinaError::ComputationInvariant(
            "ROC curve not in the (TPR,FPR) range [(0,0),(1,1)]".into(),
        ));
    }

    let two = T::one() + T::one();
    let area = curve
        .points
        .windows(2)
        .map(|w| (w[0].tpr + w[1].tpr) * (w[0].fpr - w[1].fpr).abs() / two)
        .fold(T::zero(), |acc, a| acc + a);
    Ok(area)
}

/// Trapezoidal AUC of the ROC curve built from two score populations.
pub fn auc_trapz_scores<T: Float>(
    positives: &[T],
    negatives: &[T],
    higher_is_positive: bool,
) -> Result<T> {
    let curve = compute_roc(positives, negatives, higher_is_positive)?;
    auc_trapz(&curve)
}

/// AUC as the Wilcoxon-Mann-Whitney statistic.
///
/// Every (positive, negative) pair scores 1 when the positive ranks ahead,
/// 0.5 on a tie, normalized by `|pos| * |neg|`. NaN scores are discarded.
pub fn auc_wmw<T: Float>(positives: &[T], negatives: &[T], higher_is_positive: bool) -> Result<T> {
    let positives: Vec<T> = positives.iter().copied().filter(|s| !s.is_nan()).collect();
    let negatives: Vec<T> = negatives.iter().copied().filter(|s| !s.is_nan()).collect();
    if positives.is_empty() {
        return Err(RetinaError::EmptySample("positive"));
    }
    if negatives.is_empty() {
        return Err(RetinaError::EmptySample("negative"));
    }

    let mut wins = 0.0_f64;
    for &p in &positives {
        for &n in &negatives {
            let ahead = if higher_is_positive { p > n } else { p < n };
            if ahead {
                wins += 1.0;
            } else if p == n {
                wins += 0.5;
            }
        }
    }

    let pairs = positives.len() as f64 * negatives.len() as f64;
    let auc: T = NumCast::from(wins / pairs).unwrap_or_else(T::nan);
    Ok(auc)
}
