use tracing::warn;

use crate::consts::MIN_ERROR_MAX_ITERATIONS;
use crate::histogram::moments::{
    cumulative_first_moment, cumulative_mass, cumulative_second_moment,
};
use crate::histogram::Histogram;

use super::mean::mean_threshold;

/// Minimum error threshold, iterative version.
///
/// Kittler and J. Illingworth, "Minimum error thresholding", Pattern
/// Recognition 19 (1986) 41-47; iterative form from Glasbey (1993).
///
/// Starts from the mean threshold and repeatedly moves to the integer part
/// of the root of the two-Gaussian mixture quadratic until it stops moving.
/// A negative discriminant, a NaN or out-of-range root, or too many steps
/// end the search at the last stable threshold with a warning.
pub fn min_error_threshold(histogram: &Histogram) -> Option<usize> {
    let data = histogram.bins();
    let mut threshold = mean_threshold(histogram)?;

    let a_all = cumulative_mass(data, None);
    let b_all = cumulative_first_moment(data, None);
    let c_all = cumulative_second_moment(data, None);

    for _ in 0..MIN_ERROR_MAX_ITERATIONS {
        let a_t = cumulative_mass(data, Some(threshold));
        let b_t = cumulative_first_moment(data, Some(threshold));
        let c_t = cumulative_second_moment(data, Some(threshold));

        let mu = b_t / a_t;
        let nu = (b_all - b_t) / (a_all - a_t);
        let p = a_t / a_all;
        let q = (a_all - a_t) / a_all;
        let sigma2 = c_t / a_t - mu * mu;
        let tau2 = (c_all - c_t) / (a_all - a_t) - nu * nu;

        // Terms of the quadratic in the unknown threshold.
        let w0 = 1.0 / sigma2 - 1.0 / tau2;
        let w1 = mu / sigma2 - nu / tau2;
        let w2 = mu * mu / sigma2 - nu * nu / tau2 + ((sigma2 * q * q) / (tau2 * p * p)).log10();

        let sqterm = w1 * w1 - w0 * w2;
        if sqterm < 0.0 {
            warn!(threshold, "MinError(I): not converging, imaginary root");
            return Some(threshold);
        }

        let root = (w1 + sqterm.sqrt()) / w0;
        if root.is_nan() {
            warn!(threshold, "MinError(I): NaN root, not converging");
            return Some(threshold);
        }

        let next = root.floor();
        if next < 0.0 || next >= data.len() as f64 {
            warn!(threshold, root, "MinError(I): root outside the histogram, not converging");
            return Some(threshold);
        }

        let next = next as usize;
        if next == threshold {
            return Some(threshold);
        }
        threshold = next;
    }

    warn!(
        threshold,
        iterations = MIN_ERROR_MAX_ITERATIONS,
        "MinError(I): iteration limit reached, not converging"
    );
    Some(threshold)
}
