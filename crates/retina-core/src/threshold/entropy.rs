//! Entropy-based thresholds.
//!
//! Kapur J.N., Sahoo P.K., Wong A.K.C. (1985) "A New Method for Gray-Level
//! Picture Thresholding Using the Entropy of the Histogram", Graphical Models
//! and Image Processing 29(3): 273-285.

use crate::consts::{ENTROPY_PROBABILITY_EPSILON, RENYI_CLOSENESS_LEVELS};
use crate::histogram::Histogram;

use super::normalized_cumulative;

/// Probabilities shared by the entropy criteria.
struct EntropyTables<'a> {
    counts: &'a [u64],
    norm: Vec<f64>,
    /// Cumulative probability of the background class, P1.
    p1: Vec<f64>,
    /// Probability of the object class, P2 = 1 - P1.
    p2: Vec<f64>,
    first_bin: usize,
    last_bin: usize,
}

impl<'a> EntropyTables<'a> {
    fn new(histogram: &'a Histogram) -> Option<Self> {
        let (norm, p1) = normalized_cumulative(histogram)?;
        let p2: Vec<f64> = p1.iter().map(|&p| 1.0 - p).collect();
        let levels = norm.len();

        let first_bin = p1
            .iter()
            .position(|p| p.abs() >= ENTROPY_PROBABILITY_EPSILON)
            .unwrap_or(0);
        let last_bin = (first_bin..levels)
            .rev()
            .find(|&i| p2[i].abs() >= ENTROPY_PROBABILITY_EPSILON)
            .unwrap_or(levels - 1);

        Some(Self {
            counts: histogram.bins(),
            norm,
            p1,
            p2,
            first_bin,
            last_bin,
        })
    }

    /// Shannon entropy of background plus object when splitting at `it`.
    fn shannon(&self, it: usize) -> f64 {
        let mut ent_back = 0.0;
        for ih in 0..=it {
            if self.counts[ih] != 0 {
                let p = self.norm[ih] / self.p1[it];
                ent_back -= p * p.ln();
            }
        }
        let mut ent_obj = 0.0;
        for ih in (it + 1)..self.norm.len() {
            if self.counts[ih] != 0 {
                let p = self.norm[ih] / self.p2[it];
                ent_obj -= p * p.ln();
            }
        }
        ent_back + ent_obj
    }

    /// Renyi entropy of order `alpha` (0.5 or 2) when splitting at `it`.
    fn renyi(&self, it: usize, alpha: f64) -> f64 {
        let term = 1.0 / (1.0 - alpha);
        let (ent_back, ent_obj) = if alpha == 0.5 {
            let back: f64 = (0..=it).map(|ih| (self.norm[ih] / self.p1[it]).sqrt()).sum();
            let obj: f64 = ((it + 1)..self.norm.len())
                .map(|ih| (self.norm[ih] / self.p2[it]).sqrt())
                .sum();
            (back, obj)
        } else {
            let back: f64 = (0..=it)
                .map(|ih| self.norm[ih] * self.norm[ih] / (self.p1[it] * self.p1[it]))
                .sum();
            let obj: f64 = ((it + 1)..self.norm.len())
                .map(|ih| self.norm[ih] * self.norm[ih] / (self.p2[it] * self.p2[it]))
                .sum();
            (back, obj)
        };
        let product = ent_back * ent_obj;
        term * if product > 0.0 { product.ln() } else { 0.0 }
    }

    /// First split in `[first_bin, last_bin]` whose score strictly exceeds
    /// both `floor` and every earlier score, or `None` if none does.
    fn argmax_above(&self, floor: f64, score: impl Fn(usize) -> f64) -> Option<usize> {
        let mut best = floor;
        let mut level = None;
        for it in self.first_bin..=self.last_bin {
            let value = score(it);
            if value > best {
                best = value;
                level = Some(it);
            }
        }
        level
    }
}

/// Maximum-entropy threshold (Kapur, Sahoo & Wong).
///
/// The search is bounded by the first bin with nonzero cumulative
/// probability and the last bin with nonzero object probability.
pub fn max_entropy_threshold(histogram: &Histogram) -> Option<usize> {
    let tables = EntropyTables::new(histogram)?;
    tables.argmax_above(f64::MIN, |it| tables.shannon(it))
}

/// Renyi-entropy threshold.
///
/// Computes the optimal splits for alpha = 0.5, 1 and 2, sorts them, and
/// blends them with weights chosen by how close neighbouring candidates
/// are.
pub fn renyi_entropy_threshold(histogram: &Histogram) -> Option<usize> {
    let tables = EntropyTables::new(histogram)?;

    // Each criterion starts from level 0 with a zero best score.
    let t_alpha_1 = tables
        .argmax_above(0.0, |it| tables.shannon(it))
        .unwrap_or(0);
    let t_alpha_half = tables
        .argmax_above(0.0, |it| tables.renyi(it, 0.5))
        .unwrap_or(0);
    let t_alpha_2 = tables
        .argmax_above(0.0, |it| tables.renyi(it, 2.0))
        .unwrap_or(0);

    let mut t_star = [t_alpha_half, t_alpha_1, t_alpha_2];
    t_star.sort_unstable();
    let [t1, t2, t3] = t_star;

    let close = |a: usize, b: usize| (a as i64 - b as i64).abs() <= RENYI_CLOSENESS_LEVELS;
    let (beta1, beta2, beta3) = match (close(t1, t2), close(t2, t3)) {
        (true, true) => (1.0, 2.0, 1.0),
        (true, false) => (0.0, 1.0, 3.0),
        (false, true) => (3.0, 1.0, 0.0),
        (false, false) => (1.0, 2.0, 1.0),
    };

    let omega = tables.p1[t3] - tables.p1[t1];
    let blended = t1 as f64 * (tables.p1[t1] + 0.25 * omega * beta1)
        + 0.25 * t2 as f64 * omega * beta2
        + t3 as f64 * (tables.p2[t3] + 0.25 * omega * beta3);

    Some((blended as usize).min(histogram.len() - 1))
}
