//! Partial sums over a histogram prefix.
//!
//! For counts `h` and a truncation index `j` (defaulting to, and clamped at,
//! the last index):
//!
//! - `A(h, j) = sum h[i]`
//! - `B(h, j) = sum i * h[i]`
//! - `C(h, j) = sum i^2 * h[i]`
//!
//! with `i` running over `0..=j`. Values are recomputed per call.

fn prefix_end(bins: &[u64], upto: Option<usize>) -> usize {
    match upto {
        Some(j) if j < bins.len() => j + 1,
        _ => bins.len(),
    }
}

/// Mass up to `upto` (A).
pub fn cumulative_mass(bins: &[u64], upto: Option<usize>) -> f64 {
    bins[..prefix_end(bins, upto)]
        .iter()
        .map(|&c| c as f64)
        .sum()
}

/// First moment up to `upto` (B).
pub fn cumulative_first_moment(bins: &[u64], upto: Option<usize>) -> f64 {
    bins[..prefix_end(bins, upto)]
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum()
}

/// Second moment up to `upto` (C).
pub fn cumulative_second_moment(bins: &[u64], upto: Option<usize>) -> f64 {
    bins[..prefix_end(bins, upto)]
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f64).powi(2) * c as f64)
        .sum()
}
