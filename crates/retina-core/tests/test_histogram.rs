mod common;

use ndarray::{Array2, Array3};

use retina_core::error::RetinaError;
use retina_core::frame::{rescale, Frame};
use retina_core::histogram::moments::{
    cumulative_first_moment, cumulative_mass, cumulative_second_moment,
};
use retina_core::histogram::Histogram;

use common::{hist, two_level_frame, SINGLE_PEAK};

#[test]
fn test_new_rejects_fewer_than_two_bins() {
    assert!(Histogram::new(vec![]).is_err());
    assert!(Histogram::new(vec![7]).is_err());
    assert!(Histogram::new(vec![7, 0]).is_ok());
}

#[test]
fn test_from_frame_counts_levels() {
    let frame = two_level_frame(10, 200, 20);
    let h = Histogram::from_frame(&frame, None).unwrap();
    assert_eq!(h.len(), 256);
    assert_eq!(h.bins()[10], 20);
    assert_eq!(h.bins()[200], 20);
    assert_eq!(h.total(), 40);
    assert_eq!(h.occupied_range(), Some((10, 200)));
}

#[test]
fn test_from_frame_custom_bin_count() {
    let frame = two_level_frame(10, 200, 5);
    let h = Histogram::from_frame(&frame, Some(16)).unwrap();
    assert_eq!(h.len(), 16);
    // 10 * 16 / 256 = 0, 200 * 16 / 256 = 12
    assert_eq!(h.bins()[0], 5);
    assert_eq!(h.bins()[12], 5);
}

#[test]
fn test_from_frame_16bit_default_bins() {
    let data = Array2::<u16>::from_elem((2, 2), 40_000);
    let h = Histogram::from_frame(&Frame::from_gray(data, 16), None).unwrap();
    assert_eq!(h.len(), 65_536);
    assert_eq!(h.bins()[40_000], 4);
}

#[test]
fn test_from_frame_rejects_out_of_range_sample() {
    let data = Array2::<u16>::from_elem((2, 2), 300);
    let err = Histogram::from_frame(&Frame::from_gray(data, 8), None).unwrap_err();
    assert!(matches!(err, RetinaError::InvalidInput(_)));
}

#[test]
fn test_from_frame_rejects_color_and_odd_depths() {
    let rgb = Frame::new(Array3::<u16>::zeros((2, 2, 3)), 8);
    assert!(matches!(
        Histogram::from_frame(&rgb, None),
        Err(RetinaError::InvalidInput(_))
    ));

    let twelve_bit = Frame::from_gray(Array2::<u16>::zeros((2, 2)), 12);
    assert!(Histogram::from_frame(&twelve_bit, None).is_err());

    let empty = Frame::from_gray(Array2::<u16>::zeros((0, 0)), 8);
    assert!(Histogram::from_frame(&empty, None).is_err());
}

#[test]
fn test_from_frame_rejects_single_bin() {
    let frame = two_level_frame(0, 1, 2);
    assert!(Histogram::from_frame(&frame, Some(1)).is_err());
}

#[test]
fn test_compress_trims_empty_tails() {
    let c = hist(&SINGLE_PEAK).compress().unwrap();
    assert_eq!(c.min_bin, 2);
    assert_eq!(c.histogram.bins(), &[5, 10, 5]);
    assert_eq!(c.to_original(1), 3);
}

#[test]
fn test_compress_widens_single_bin() {
    let c = hist(&[0, 0, 9, 0]).compress().unwrap();
    assert_eq!(c.min_bin, 2);
    assert_eq!(c.histogram.bins(), &[9, 0]);

    // Occupied last bin widens to the left.
    let c = hist(&[0, 0, 0, 9]).compress().unwrap();
    assert_eq!(c.min_bin, 2);
    assert_eq!(c.histogram.bins(), &[0, 9]);
}

#[test]
fn test_compress_empty_is_error() {
    let h = hist(&[0, 0, 0]);
    assert!(h.has_no_mass());
    assert_eq!(h.occupied_range(), None);
    assert!(matches!(h.compress(), Err(RetinaError::InvalidInput(_))));
}

#[test]
fn test_cumulative_moments() {
    let bins = [1, 2, 3];
    assert_eq!(cumulative_mass(&bins, None), 6.0);
    assert_eq!(cumulative_first_moment(&bins, None), 8.0);
    assert_eq!(cumulative_second_moment(&bins, None), 14.0);

    assert_eq!(cumulative_mass(&bins, Some(1)), 3.0);
    assert_eq!(cumulative_first_moment(&bins, Some(1)), 2.0);
    assert_eq!(cumulative_second_moment(&bins, Some(0)), 0.0);

    // Past the end clamps to the last index.
    assert_eq!(cumulative_mass(&bins, Some(10)), 6.0);
}

#[test]
fn test_rescale_12_bit_into_16_bit_range() {
    let data = Array2::<u16>::from_shape_vec((1, 3), vec![0, 2048, 4095]).unwrap();
    let scaled = rescale(&Frame::from_gray(data, 16), 12, 16).unwrap();
    assert_eq!(scaled.bit_depth, 16);
    assert_eq!(scaled.gray_view()[[0, 0]], 0);
    assert_eq!(scaled.gray_view()[[0, 2]], 65_535);
    // 2048 * 65535 / 4095 = 32775.5
    assert_eq!(scaled.gray_view()[[0, 1]], 32_776);
}

#[test]
fn test_rescale_rejects_wider_output() {
    let frame = Frame::from_gray(Array2::<u16>::zeros((1, 1)), 8);
    assert!(rescale(&frame, 8, 16).is_err());
    assert!(rescale(&frame, 0, 8).is_err());
}
