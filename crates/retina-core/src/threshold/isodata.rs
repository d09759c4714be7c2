use tracing::warn;

use crate::histogram::Histogram;

/// Iterative intermeans threshold.
///
/// T.W. Ridler, S. Calvard, "Picture thresholding using an iterative
/// selection method", IEEE Trans. SMC-8 (1978) 630-632.
///
/// Starting just above the first occupied bin (bin 0 excluded), the split
/// level `g` moves up one level at a time until it equals the rounded
/// midpoint of the integer means below and above it. Returns `None` with a
/// warning when `g` runs past `L - 2`.
pub fn isodata_threshold(histogram: &Histogram) -> Option<usize> {
    let data = histogram.bins();
    let levels = data.len();
    if histogram.has_no_mass() {
        return None;
    }

    let mut g = data
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, &c)| c > 0)
        .map(|(i, _)| i + 1)
        .unwrap_or(0);

    loop {
        let (low_count, low_sum) = data
            .iter()
            .enumerate()
            .take(g)
            .fold((0u64, 0u64), |(n, s), (i, &c)| (n + c, s + c * i as u64));
        let (high_count, high_sum) = data
            .iter()
            .enumerate()
            .skip(g + 1)
            .fold((0u64, 0u64), |(n, s), (i, &c)| (n + c, s + c * i as u64));

        if low_count > 0 && high_count > 0 {
            let low_mean = low_sum / low_count;
            let high_mean = high_sum / high_count;
            let midpoint = ((low_mean + high_mean) as f64 / 2.0).round() as usize;
            if g == midpoint {
                return Some(g);
            }
        }

        g += 1;
        if g + 2 > levels {
            warn!("IsoData threshold not found");
            return None;
        }
    }
}
