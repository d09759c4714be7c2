mod common;

use ndarray::{Array2, Array3};

use retina_core::binarize::{
    auto_binarize, auto_threshold, binarize, BinarizationConfig, BinarizationMethod,
};
use retina_core::error::RetinaError;
use retina_core::frame::Frame;
use retina_core::threshold::ThresholdMethod;

use common::{frame_from_counts, two_level_frame, BIMODAL_32};

fn config(method: ThresholdMethod, compress: bool, bins: Option<usize>) -> BinarizationConfig {
    BinarizationConfig {
        method: BinarizationMethod::Single(method),
        compress_histogram: compress,
        bins,
    }
}

// ---------------------------------------------------------------------------
// binarize
// ---------------------------------------------------------------------------

#[test]
fn test_binarize_is_strictly_greater() {
    let data = Array2::<u8>::from_shape_vec((1, 4), vec![0, 99, 100, 101]).unwrap();
    let out = binarize(&Frame::from_gray8(&data), 100).unwrap();
    assert_eq!(out.as_slice().unwrap(), &[0, 0, 0, 255]);
}

#[test]
fn test_binarize_output_levels_and_shape() {
    let frame = frame_from_counts(&BIMODAL_32, 10);
    let out = binarize(&frame, 12).unwrap();
    assert_eq!(out.dim(), (frame.height(), frame.width()));
    assert!(out.iter().all(|&v| v == 0 || v == 255));
}

#[test]
fn test_binarize_large_16bit_frame() {
    // Above the parallel pixel threshold.
    let data = Array2::<u16>::from_shape_fn((300, 300), |(r, c)| (r * 200 + c) as u16);
    let frame = Frame::from_gray(data, 16);
    let out = binarize(&frame, 45_000).unwrap();

    for ((r, c), &v) in out.indexed_iter() {
        let expected = if r * 200 + c > 45_000 { 255 } else { 0 };
        assert_eq!(v, expected, "pixel ({r}, {c})");
    }
}

#[test]
fn test_binarize_rejects_multichannel() {
    let frame = Frame::new(Array3::<u16>::zeros((4, 4, 3)), 8);
    assert!(matches!(
        binarize(&frame, 10),
        Err(RetinaError::InvalidInput(_))
    ));
}

// ---------------------------------------------------------------------------
// auto_threshold / auto_binarize
// ---------------------------------------------------------------------------

#[test]
fn test_auto_threshold_otsu_two_levels() {
    let frame = two_level_frame(10, 200, 20);
    let compressed = auto_threshold(&frame, &config(ThresholdMethod::Otsu, true, None)).unwrap();
    let full = auto_threshold(&frame, &config(ThresholdMethod::Otsu, false, None)).unwrap();
    assert_eq!(compressed, vec![(ThresholdMethod::Otsu, Some(199))]);
    assert_eq!(full, vec![(ThresholdMethod::Otsu, Some(199))]);
}

#[test]
fn test_auto_threshold_mean_translates_back() {
    let frame = two_level_frame(10, 200, 20);
    let result = auto_threshold(&frame, &config(ThresholdMethod::Mean, true, None)).unwrap();
    assert_eq!(result[0].1, Some(105));
}

#[test]
fn test_auto_threshold_coarse_bins_map_to_intensity() {
    let frame = two_level_frame(10, 200, 20);
    // 16 bins of 16 levels: bin 11 ends at intensity 191.
    for compress in [false, true] {
        let result =
            auto_threshold(&frame, &config(ThresholdMethod::Otsu, compress, Some(16))).unwrap();
        assert_eq!(result[0].1, Some(191), "compress = {compress}");
    }
}

#[test]
fn test_auto_binarize_separates_levels() {
    let frame = two_level_frame(10, 200, 20);
    let outcomes = auto_binarize(&frame, &BinarizationConfig::default()).unwrap();
    assert_eq!(outcomes.len(), 1);

    let binary = outcomes[0].binary.as_ref().unwrap();
    assert!(binary.row(0).iter().all(|&v| v == 0));
    assert!(binary.row(1).iter().all(|&v| v == 255));
}

#[test]
fn test_auto_binarize_all_methods() {
    let frame = frame_from_counts(&BIMODAL_32, 10);
    let config = BinarizationConfig {
        method: BinarizationMethod::All,
        ..BinarizationConfig::default()
    };
    let outcomes = auto_binarize(&frame, &config).unwrap();
    assert_eq!(outcomes.len(), ThresholdMethod::ALL.len());

    for (outcome, method) in outcomes.iter().zip(ThresholdMethod::ALL) {
        assert_eq!(outcome.method, method);
        assert_eq!(outcome.threshold.is_some(), outcome.binary.is_some());
        if let Some(ref binary) = outcome.binary {
            assert_eq!(binary.dim(), (frame.height(), frame.width()));
        }
    }
}

#[test]
fn test_auto_binarize_constant_frame_without_threshold() {
    let frame = Frame::from_gray8(&Array2::<u8>::from_elem((4, 4), 50));
    let outcomes =
        auto_binarize(&frame, &config(ThresholdMethod::IsoData, true, None)).unwrap();
    assert_eq!(outcomes[0].threshold, None);
    assert!(outcomes[0].binary.is_none());
}

#[test]
fn test_binarization_method_parse() {
    assert_eq!(
        "all".parse::<BinarizationMethod>().unwrap(),
        BinarizationMethod::All
    );
    assert_eq!(
        "yen".parse::<BinarizationMethod>().unwrap(),
        BinarizationMethod::Single(ThresholdMethod::Yen)
    );
    assert!("sauvola".parse::<BinarizationMethod>().is_err());
    assert_eq!(BinarizationMethod::All.methods().len(), 9);
}
