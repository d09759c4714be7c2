use ndarray::Array2;
use tracing::{info, warn};

use crate::error::Result;
use crate::frame::Frame;
use crate::histogram::Histogram;
use crate::threshold::{select_threshold, ThresholdMethod};

use super::apply::binarize;
use super::config::BinarizationConfig;

/// Result of one threshold method applied to a frame.
#[derive(Clone, Debug)]
pub struct BinarizationOutcome {
    pub method: ThresholdMethod,
    /// Threshold in the frame's intensity domain, `None` when the method
    /// found none.
    pub threshold: Option<u32>,
    /// Binary image, present only when a threshold was found.
    pub binary: Option<Array2<u8>>,
}

/// Compute the intensity threshold of `frame` for every configured method.
///
/// Pipeline: histogram -> optional compression -> threshold selection ->
/// translation back to the intensity domain.
pub fn auto_threshold(
    frame: &Frame,
    config: &BinarizationConfig,
) -> Result<Vec<(ThresholdMethod, Option<u32>)>> {
    let histogram = Histogram::from_frame(frame, config.bins)?;
    let gray_levels = frame.gray_levels();
    let bins = histogram.len();

    // Bin `b` covers intensities up to ((b + 1) * levels / bins) - 1.
    let to_intensity = |bin: usize| ((bin + 1) * gray_levels / bins).saturating_sub(1) as u32;

    let compressed = if config.compress_histogram && !histogram.has_no_mass() {
        Some(histogram.compress()?)
    } else {
        None
    };

    let thresholds = config
        .method
        .methods()
        .into_iter()
        .map(|method| {
            let bin = match &compressed {
                Some(c) => select_threshold(&c.histogram, method).map(|l| c.to_original(l)),
                None => select_threshold(&histogram, method),
            };
            (method, bin.map(to_intensity))
        })
        .collect();

    Ok(thresholds)
}

/// Threshold and binarize `frame` with the configured method(s).
///
/// One outcome per method; a method that finds no threshold is reported
/// with a warning and produces no image.
pub fn auto_binarize(frame: &Frame, config: &BinarizationConfig) -> Result<Vec<BinarizationOutcome>> {
    auto_threshold(frame, config)?
        .into_iter()
        .map(|(method, threshold)| {
            let binary = match threshold {
                Some(t) => {
                    info!(method = %method, threshold = t, "Binarizing");
                    Some(binarize(frame, t)?)
                }
                None => {
                    warn!(method = %method, "No threshold found, skipping binarization");
                    None
                }
            };
            Ok(BinarizationOutcome {
                method,
                threshold,
                binary,
            })
        })
        .collect()
}
