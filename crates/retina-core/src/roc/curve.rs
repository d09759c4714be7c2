use num_traits::{Float, NumCast};
use tracing::debug;

use crate::error::{Result, RetinaError};
use crate::partition::{partition, split_by_ranges_mut};

use super::config::RocConfig;

/// One operating point of a classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocPoint<T> {
    /// Decision threshold producing this point.
    pub threshold: T,
    /// True-positive rate in [0, 1].
    pub tpr: T,
    /// False-positive rate in [0, 1].
    pub fpr: T,
}

impl<T: Float> RocPoint<T> {
    fn same_rates(&self, other: &Self) -> bool {
        self.tpr == other.tpr && self.fpr == other.fpr
    }
}

/// ROC curve ordered from (TPR, FPR) = (0, 0) to (1, 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RocCurve<T> {
    pub points: Vec<RocPoint<T>>,
}

impl<T: Float> RocCurve<T> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (TPR, FPR) pairs in curve order.
    pub fn rates(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.points.iter().map(|p| (p.tpr, p.fpr))
    }
}

/// NaN-free, sorted working copies of both populations plus the candidate
/// thresholds in the order the curve visits them.
struct PreparedScores<T> {
    positives: Vec<T>,
    negatives: Vec<T>,
    thresholds: Vec<T>,
    higher_is_positive: bool,
}

impl<T: Float> PreparedScores<T> {
    fn new(positives: &[T], negatives: &[T], higher_is_positive: bool) -> Result<Self> {
        if positives.is_empty() {
            return Err(RetinaError::EmptySample("positive"));
        }
        if negatives.is_empty() {
            return Err(RetinaError::EmptySample("negative"));
        }

        let positives = sorted_without_nan(positives);
        let negatives = sorted_without_nan(negatives);
        if positives.is_empty() {
            return Err(RetinaError::EmptySample("positive"));
        }
        if negatives.is_empty() {
            return Err(RetinaError::EmptySample("negative"));
        }

        // Distinct scores plus +inf and -inf, which map to the (0,0) and
        // (1,1) extremes.
        let mut thresholds: Vec<T> = positives
            .iter()
            .chain(negatives.iter())
            .copied()
            .chain([T::infinity(), T::neg_infinity()])
            .collect();
        if higher_is_positive {
            thresholds.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        } else {
            thresholds.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        }
        thresholds.dedup();

        Ok(Self {
            positives,
            negatives,
            thresholds,
            higher_is_positive,
        })
    }

    /// Number of sorted scores classified positive at `threshold`.
    fn count_positive(&self, sorted: &[T], threshold: T) -> usize {
        if self.higher_is_positive {
            sorted.len() - sorted.partition_point(|&x| x < threshold)
        } else {
            sorted.partition_point(|&x| x <= threshold)
        }
    }

    /// Fill `out[i]` with the ROC point of `thresholds[i]`.
    fn fill(&self, thresholds: &[T], out: &mut [RocPoint<T>]) {
        for (slot, &threshold) in out.iter_mut().zip(thresholds) {
            let tps = self.count_positive(&self.positives, threshold);
            let fps = self.count_positive(&self.negatives, threshold);
            *slot = RocPoint {
                threshold,
                tpr: ratio(tps, self.positives.len()),
                fpr: ratio(fps, self.negatives.len()),
            };
        }
    }

    /// Collapse repeated rates, anchor at (0,0), and check the (1,1) end.
    fn finish(&self, mut points: Vec<RocPoint<T>>) -> Result<RocCurve<T>> {
        points.dedup_by(|b, a| a.same_rates(b));

        let starts_at_origin = points
            .first()
            .is_some_and(|p| p.tpr == T::zero() && p.fpr == T::zero());
        if !starts_at_origin {
            let threshold = if self.higher_is_positive {
                T::infinity()
            } else {
                T::neg_infinity()
            };
            points.insert(
                0,
                RocPoint {
                    threshold,
                    tpr: T::zero(),
                    fpr: T::zero(),
                },
            );
        }

        let ends_at_one = points
            .last()
            .is_some_and(|p| p.tpr == T::one() && p.fpr == T::one());
        if !ends_at_one {
            return Err(RetinaError::ComputationInvariant(
                "computed ROC not in the (TPR,FPR) range [(0,0),(1,1)]".into(),
            ));
        }

        debug!(
            thresholds = self.thresholds.len(),
            points = points.len(),
            "ROC curve computed"
        );
        Ok(RocCurve { points })
    }
}

fn sorted_without_nan<T: Float>(scores: &[T]) -> Vec<T> {
    let mut kept: Vec<T> = scores.iter().copied().filter(|s| !s.is_nan()).collect();
    kept.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    kept
}

fn ratio<T: Float>(count: usize, total: usize) -> T {
    let count: T = NumCast::from(count).unwrap_or_else(T::nan);
    let total: T = NumCast::from(total).unwrap_or_else(T::nan);
    count / total
}

fn origin<T: Float>() -> RocPoint<T> {
    RocPoint {
        threshold: T::zero(),
        tpr: T::zero(),
        fpr: T::zero(),
    }
}

/// ROC curve of two score populations, computed on the calling thread.
///
/// NaN scores are discarded. When `higher_is_positive` a sample is called
/// positive at threshold `t` if its score is `>= t`, otherwise if `<= t`.
pub fn compute_roc<T: Float>(
    positives: &[T],
    negatives: &[T],
    higher_is_positive: bool,
) -> Result<RocCurve<T>> {
    let prepared = PreparedScores::new(positives, negatives, higher_is_positive)?;
    let mut points = vec![origin(); prepared.thresholds.len()];
    prepared.fill(&prepared.thresholds, &mut points);
    prepared.finish(points)
}

/// ROC curve computed by `workers` threads.
///
/// The output buffer is allocated once at full size and split into
/// contiguous, disjoint slices (see [`partition`]); each worker fills its
/// own slice and the scope end is the join barrier before the curve is
/// deduplicated and validated.
pub fn compute_roc_parallel<T: Float + Send + Sync>(
    positives: &[T],
    negatives: &[T],
    higher_is_positive: bool,
    workers: usize,
) -> Result<RocCurve<T>> {
    let prepared = PreparedScores::new(positives, negatives, higher_is_positive)?;
    let workers = workers.max(1);
    let n = prepared.thresholds.len();

    let mut points = vec![origin(); n];
    let ranges = partition(0..n, workers);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    {
        let chunks = split_by_ranges_mut(&mut points, &ranges);
        let prepared = &prepared;
        pool.scope(|scope| {
            for (range, chunk) in ranges.iter().zip(chunks) {
                let thresholds = &prepared.thresholds[range.clone()];
                scope.spawn(move |_| prepared.fill(thresholds, chunk));
            }
        });
    }

    debug!(workers, thresholds = n, "Parallel ROC workers joined");
    prepared.finish(points)
}

/// Compute a ROC curve sequentially or in parallel as configured.
pub fn compute_roc_with<T: Float + Send + Sync>(
    positives: &[T],
    negatives: &[T],
    config: &RocConfig,
) -> Result<RocCurve<T>> {
    if config.parallel {
        compute_roc_parallel(positives, negatives, config.higher_is_positive, config.workers)
    } else {
        compute_roc(positives, negatives, config.higher_is_positive)
    }
}
