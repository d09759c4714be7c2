use crate::histogram::Histogram;

use super::normalized_cumulative;

/// Yen's maximum correlation threshold.
///
/// Yen J.C., Chang F.J., Chang S. (1995) "A New Criterion for Automatic
/// Multilevel Thresholding", IEEE Trans. on Image Processing 4(3): 370-378.
///
/// Logarithms of non-positive arguments contribute zero to the criterion.
pub fn yen_threshold(histogram: &Histogram) -> Option<usize> {
    let (norm, p1) = normalized_cumulative(histogram)?;
    let levels = norm.len();

    let mut p1_sq = vec![0.0_f64; levels];
    p1_sq[0] = norm[0] * norm[0];
    for ih in 1..levels {
        p1_sq[ih] = p1_sq[ih - 1] + norm[ih] * norm[ih];
    }

    let mut p2_sq = vec![0.0_f64; levels];
    for ih in (0..levels - 1).rev() {
        p2_sq[ih] = p2_sq[ih + 1] + norm[ih + 1] * norm[ih + 1];
    }

    let guarded_ln = |x: f64| if x > 0.0 { x.ln() } else { 0.0 };

    let mut threshold = None;
    let mut max_crit = f64::MIN;
    for it in 0..levels {
        let crit = -guarded_ln(p1_sq[it] * p2_sq[it]) + 2.0 * guarded_ln(p1[it] * (1.0 - p1[it]));
        if crit > max_crit {
            max_crit = crit;
            threshold = Some(it);
        }
    }
    threshold
}
