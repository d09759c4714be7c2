use crate::histogram::Histogram;

/// Zack's triangle threshold.
///
/// A line is drawn from the histogram peak to the empty bin just beyond the
/// farther occupied tail; the split is the bin with the largest distance
/// above that line, minus one. When the far tail lies right of the peak the
/// histogram is mirrored first and the result mirrored back.
pub fn triangle_threshold(histogram: &Histogram) -> Option<usize> {
    let (first, last) = histogram.occupied_range()?;
    let levels = histogram.len() as i64;

    // Line endpoints sit on the zero-count bins next to the data.
    let mut min = first as i64;
    if min > 0 {
        min -= 1;
    }
    let mut min2 = last as i64;
    if min2 < levels - 1 {
        min2 += 1;
    }

    let mut max = 0i64;
    let mut peak = 0u64;
    for (i, &c) in histogram.bins().iter().enumerate() {
        if c > peak {
            max = i as i64;
            peak = c;
        }
    }

    let inverted = (max - min) < (min2 - max);
    let data: Vec<f64> = if inverted {
        min = levels - 1 - min2;
        max = levels - 1 - max;
        histogram.bins().iter().rev().map(|&c| c as f64).collect()
    } else {
        histogram.bins().iter().map(|&c| c as f64).collect()
    };

    if min == max {
        return Some(min as usize);
    }

    // Line nx * x + ny * y - d = 0 through (min, data[min]) and (max, data[max]).
    let mut nx = data[max as usize];
    let mut ny = (min - max) as f64;
    let norm = (nx * nx + ny * ny).sqrt();
    nx /= norm;
    ny /= norm;
    let d = nx * min as f64 + ny * data[min as usize];

    let mut split = min;
    let mut split_distance = 0.0_f64;
    for i in (min + 1)..=max {
        let distance = nx * i as f64 + ny * data[i as usize] - d;
        if distance > split_distance {
            split = i;
            split_distance = distance;
        }
    }
    split -= 1;

    let level = if inverted { levels - 1 - split } else { split };
    Some(level.clamp(0, levels - 1) as usize)
}
