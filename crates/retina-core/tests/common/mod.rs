#![allow(dead_code)]

use ndarray::Array2;

use retina_core::frame::Frame;
use retina_core::histogram::Histogram;

/// Symmetric single peak: Otsu 3, Mean 3.
pub const SINGLE_PEAK: [u64; 8] = [0, 0, 5, 10, 5, 0, 0, 0];

/// Two well separated modes over 32 levels.
pub const BIMODAL_32: [u64; 32] = [
    12, 25, 42, 57, 63, 57, 42, 25, 12, 4, 1, 0, 0, 0, 3, 25, 89, 136, 89, 25, 3, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
];

/// Peak near the dark end with a long bright tail.
pub const RIGHT_TAIL: [u64; 16] = [0, 50, 30, 20, 12, 8, 5, 3, 2, 1, 1, 0, 0, 0, 0, 0];

/// Mirror image of [`RIGHT_TAIL`], shifted by one level.
pub const LEFT_TAIL: [u64; 16] = [0, 0, 0, 0, 0, 1, 1, 2, 3, 5, 8, 12, 20, 30, 50, 0];

pub fn hist(bins: &[u64]) -> Histogram {
    Histogram::new(bins.to_vec()).unwrap()
}

/// 8-bit frame whose pixel values reproduce `counts` (row-major, `width` wide).
pub fn frame_from_counts(counts: &[u64], width: usize) -> Frame {
    let values: Vec<u8> = counts
        .iter()
        .enumerate()
        .flat_map(|(level, &n)| std::iter::repeat(level as u8).take(n as usize))
        .collect();
    assert_eq!(values.len() % width, 0, "pixel count must fill whole rows");
    let data = Array2::from_shape_vec((values.len() / width, width), values).unwrap();
    Frame::from_gray8(&data)
}

/// 8-bit frame with `n` pixels at `dark` followed by `n` pixels at `bright`.
pub fn two_level_frame(dark: u8, bright: u8, n: usize) -> Frame {
    let mut data = Array2::<u8>::from_elem((2, n), dark);
    data.row_mut(1).fill(bright);
    Frame::from_gray8(&data)
}
