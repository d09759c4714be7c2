/// Minimum pixel count (h*w) to binarize on the Rayon pool.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Output level for foreground pixels after binarization.
pub const FOREGROUND_LEVEL: u8 = 255;

/// Output level for background pixels after binarization.
pub const BACKGROUND_LEVEL: u8 = 0;

/// Bit depths accepted for grayscale frames.
pub const SUPPORTED_BIT_DEPTHS: [u8; 2] = [8, 16];

/// Cumulative probabilities below this are treated as zero when bounding
/// the entropy searches (f64 machine epsilon).
pub const ENTROPY_PROBABILITY_EPSILON: f64 = 2.220446049250313e-16;

/// Class probability cut-off used by the OpenCV flavour of Otsu.
pub const OTSU_OPENCV_EPSILON: f64 = f32::EPSILON as f64;

/// Candidate thresholds closer than this (in gray levels) are considered
/// coincident by the Renyi-entropy blending rule.
pub const RENYI_CLOSENESS_LEVELS: i64 = 5;

/// Upper bound on Minimum-Error(I) refinement steps before giving up.
pub const MIN_ERROR_MAX_ITERATIONS: usize = 10_000;

/// Decimal digits written per rate in the ROC text export.
pub const ROC_EXPORT_PRECISION: usize = 6;

/// Default number of self-test iterations.
pub const DEFAULT_SELF_TEST_ITERATIONS: usize = 10;

/// Default number of positive (and negative) scores per self-test iteration.
pub const DEFAULT_SELF_TEST_SAMPLES: usize = 10_000;

/// Tolerance used when comparing AUC estimators in the self-test.
pub const DEFAULT_SELF_TEST_EPSILON: f64 = 1e-9;

/// Probability of replacing a self-test score with +inf or -inf.
pub const SELF_TEST_INFINITY_PROBABILITY: f64 = 0.01;

/// Maximum number of NaN scores injected per population in the self-test.
pub const SELF_TEST_MAX_NANS: usize = 100;
