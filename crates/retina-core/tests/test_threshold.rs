mod common;

use retina_core::threshold::{
    isodata_threshold, max_entropy_threshold, mean_threshold, min_error_threshold,
    otsu_opencv_threshold, otsu_threshold, renyi_entropy_threshold, select_all,
    select_threshold, triangle_threshold, yen_threshold, ThresholdMethod,
};

use common::{hist, BIMODAL_32, LEFT_TAIL, RIGHT_TAIL, SINGLE_PEAK};

/// Expected thresholds in `ThresholdMethod::ALL` order.
fn assert_all(bins: &[u64], expected: [Option<usize>; 9]) {
    let h = hist(bins);
    for ((method, got), want) in select_all(&h).into_iter().zip(expected) {
        assert_eq!(got, want, "{method} on {bins:?}");
    }
}

// ---------------------------------------------------------------------------
// Reference histograms
// ---------------------------------------------------------------------------

#[test]
fn test_single_peak_otsu_and_mean() {
    let h = hist(&SINGLE_PEAK);
    assert_eq!(otsu_threshold(&h), Some(3));
    assert_eq!(mean_threshold(&h), Some(3));
}

#[test]
fn test_single_peak_other_methods() {
    let h = hist(&SINGLE_PEAK);
    assert_eq!(otsu_opencv_threshold(&h), Some(2));
    assert_eq!(isodata_threshold(&h), Some(3));
    assert_eq!(max_entropy_threshold(&h), Some(2));
    assert_eq!(renyi_entropy_threshold(&h), Some(2));
    assert_eq!(yen_threshold(&h), Some(2));
    // Both class variances collapse; the mean is kept.
    assert_eq!(min_error_threshold(&h), Some(3));
}

#[test]
fn test_bimodal_all_methods() {
    assert_all(
        &BIMODAL_32,
        [
            Some(10), // otsuopencv
            Some(13), // otsu
            Some(11), // isodata
            Some(13), // triangle
            Some(10), // mean
            Some(12), // minerror
            Some(6),  // maxentropy
            Some(10), // renyientropy
            Some(14), // yen
        ],
    );
}

#[test]
fn test_bimodal_splits_inside_the_valley() {
    let h = hist(&BIMODAL_32);
    for (method, level) in select_all(&h) {
        let level = level.unwrap();
        // Dark mode is 0..=10, bright mode 14..=20.
        if matches!(method, ThresholdMethod::MaxEntropy) {
            continue;
        }
        assert!((9..=14).contains(&level), "{method}: {level}");
    }
}

#[test]
fn test_right_tail_all_methods() {
    assert_all(
        &RIGHT_TAIL,
        [
            Some(3),
            Some(3),
            Some(3),
            Some(5),
            Some(2),
            Some(2),
            Some(5),
            Some(5),
            Some(5),
        ],
    );
}

#[test]
fn test_left_tail_all_methods() {
    assert_all(
        &LEFT_TAIL,
        [
            Some(11),
            Some(11),
            Some(10),
            Some(10),
            Some(12),
            Some(12),
            Some(9),
            Some(9),
            Some(9),
        ],
    );
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_empty_histogram_has_no_threshold() {
    let h = hist(&[0, 0, 0, 0]);
    for (method, level) in select_all(&h) {
        assert_eq!(level, None, "{method}");
    }
}

#[test]
fn test_otsu_tie_keeps_later_level() {
    // k = 1 and k = 2 give the same between-class variance.
    assert_eq!(otsu_threshold(&hist(&[1, 0, 0, 1])), Some(2));
}

#[test]
fn test_isodata_not_found() {
    assert_eq!(isodata_threshold(&hist(&[5, 0, 0, 0])), None);
    assert_eq!(isodata_threshold(&hist(&[1, 0, 0, 1])), None);
}

#[test]
fn test_triangle_single_occupied_level() {
    // No bin lies above the tail-to-peak line.
    assert_eq!(triangle_threshold(&hist(&[0, 0, 7, 0])), Some(0));
}

#[test]
fn test_thresholds_stay_in_range() {
    let cases: [&[u64]; 8] = [
        &SINGLE_PEAK,
        &BIMODAL_32,
        &RIGHT_TAIL,
        &LEFT_TAIL,
        &[3, 3],
        &[0, 7, 7, 0],
        &[0, 0, 0, 7, 0, 0, 0, 0],
        &[9, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    ];
    for bins in cases {
        let h = hist(bins);
        for (method, level) in select_all(&h) {
            if let Some(level) = level {
                assert!(level < bins.len(), "{method} on {bins:?}: {level}");
            }
        }
    }
}

#[test]
fn test_select_threshold_dispatches() {
    let h = hist(&BIMODAL_32);
    assert_eq!(select_threshold(&h, ThresholdMethod::Otsu), otsu_threshold(&h));
    assert_eq!(select_threshold(&h, ThresholdMethod::Yen), yen_threshold(&h));
    assert_eq!(
        select_threshold(&h, ThresholdMethod::RenyiEntropy),
        renyi_entropy_threshold(&h)
    );
}

// ---------------------------------------------------------------------------
// ThresholdMethod names
// ---------------------------------------------------------------------------

#[test]
fn test_method_default_is_otsu() {
    assert_eq!(ThresholdMethod::default(), ThresholdMethod::Otsu);
}

#[test]
fn test_method_name_roundtrip() {
    for method in ThresholdMethod::ALL {
        let parsed: ThresholdMethod = method.name().parse().unwrap();
        assert_eq!(parsed, method);
        assert_eq!(format!("{method}"), method.name());
    }
}

#[test]
fn test_method_unknown_name_lists_choices() {
    let err = "bogus".parse::<ThresholdMethod>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("bogus"));
    assert!(msg.contains("renyientropy"));
}

#[test]
fn test_method_serde_lowercase() {
    let json = serde_json::to_string(&ThresholdMethod::OtsuOpenCv).unwrap();
    assert_eq!(json, "\"otsuopencv\"");
    let m: ThresholdMethod = serde_json::from_str("\"minerror\"").unwrap();
    assert_eq!(m, ThresholdMethod::MinError);
}
