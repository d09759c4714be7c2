use crate::consts::OTSU_OPENCV_EPSILON;
use crate::histogram::Histogram;

/// Otsu's threshold: maximize the between-class variance over interior bins.
///
/// Scans `k` in `[1, L-2]` with running sums. Ties go to the later `k`
/// because the running maximum is replaced on `>=`. A zero denominator
/// (one class empty) counts as zero variance.
pub fn otsu_threshold(histogram: &Histogram) -> Option<usize> {
    let data = histogram.bins();
    let levels = data.len();

    let mut total_intensity = 0.0_f64;
    let mut total_count = 0.0_f64;
    for (k, &count) in data.iter().enumerate() {
        total_intensity += k as f64 * count as f64;
        total_count += count as f64;
    }
    if total_count == 0.0 {
        return None;
    }

    let mut partial_intensity = 0.0_f64;
    let mut partial_count = data[0] as f64;
    let mut best_bcv = 0.0_f64;
    let mut best_k = 0usize;

    for (k, &count) in data.iter().enumerate().take(levels - 1).skip(1) {
        partial_intensity += k as f64 * count as f64;
        partial_count += count as f64;

        let denom = partial_count * (total_count - partial_count);
        let bcv = if denom != 0.0 {
            let num = (partial_count / total_count) * total_intensity - partial_intensity;
            num * num / denom
        } else {
            0.0
        };

        if bcv >= best_bcv {
            best_bcv = bcv;
            best_k = k;
        }
    }

    Some(best_k)
}

/// Otsu's threshold as computed by OpenCV (`THRESH_OTSU`).
///
/// Every bin is a candidate; bins where either class probability is below
/// `f32::EPSILON` are skipped, and the first maximum wins.
pub fn otsu_opencv_threshold(histogram: &Histogram) -> Option<usize> {
    let total = histogram.total();
    if total == 0 {
        return None;
    }
    let scale = 1.0 / total as f64;

    let mu: f64 = histogram
        .bins()
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum::<f64>()
        * scale;

    let mut q1 = 0.0_f64;
    let mut mu1 = 0.0_f64;
    let mut max_sigma = 0.0_f64;
    let mut max_level = 0usize;

    for (i, &count) in histogram.bins().iter().enumerate() {
        let p_i = count as f64 * scale;
        mu1 *= q1;
        q1 += p_i;
        let q2 = 1.0 - q1;

        if q1.min(q2) < OTSU_OPENCV_EPSILON || q1.max(q2) > 1.0 - OTSU_OPENCV_EPSILON {
            continue;
        }

        mu1 = (mu1 + i as f64 * p_i) / q1;
        let mu2 = (mu - q1 * mu1) / q2;
        let sigma = q1 * q2 * (mu1 - mu2) * (mu1 - mu2);
        if sigma > max_sigma {
            max_sigma = sigma;
            max_level = i;
        }
    }

    Some(max_level)
}
