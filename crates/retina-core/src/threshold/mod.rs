pub mod entropy;
pub mod isodata;
pub mod mean;
pub mod min_error;
pub mod otsu;
pub mod triangle;
pub mod yen;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RetinaError;
use crate::histogram::Histogram;

pub use entropy::{max_entropy_threshold, renyi_entropy_threshold};
pub use isodata::isodata_threshold;
pub use mean::mean_threshold;
pub use min_error::min_error_threshold;
pub use otsu::{otsu_opencv_threshold, otsu_threshold};
pub use triangle::triangle_threshold;
pub use yen::yen_threshold;

/// Histogram-based automatic threshold selection criteria.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMethod {
    /// Otsu as implemented by OpenCV's `THRESH_OTSU`.
    OtsuOpenCv,
    /// Otsu's between-class variance maximization.
    #[default]
    Otsu,
    /// Ridler & Calvard iterative selection.
    IsoData,
    /// Zack's triangle method.
    Triangle,
    /// Glasbey's mean of the gray levels.
    Mean,
    /// Kittler & Illingworth minimum error (iterative variant).
    MinError,
    /// Kapur, Sahoo & Wong maximum entropy.
    MaxEntropy,
    /// Kapur, Sahoo & Wong Renyi entropy blend.
    RenyiEntropy,
    /// Yen, Chang & Chang maximum correlation criterion.
    Yen,
}

impl ThresholdMethod {
    /// Every method, in the order the `all` comparison mode reports them.
    pub const ALL: [ThresholdMethod; 9] = [
        Self::OtsuOpenCv,
        Self::Otsu,
        Self::IsoData,
        Self::Triangle,
        Self::Mean,
        Self::MinError,
        Self::MaxEntropy,
        Self::RenyiEntropy,
        Self::Yen,
    ];

    /// Short lowercase identifier used in configuration files and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OtsuOpenCv => "otsuopencv",
            Self::Otsu => "otsu",
            Self::IsoData => "isodata",
            Self::Triangle => "triangle",
            Self::Mean => "mean",
            Self::MinError => "minerror",
            Self::MaxEntropy => "maxentropy",
            Self::RenyiEntropy => "renyientropy",
            Self::Yen => "yen",
        }
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdMethod {
    type Err = RetinaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                RetinaError::InvalidInput(format!(
                    "unknown threshold method \"{s}\", expected one of {{{}}}",
                    names.join(", ")
                ))
            })
    }
}

/// Select a threshold with the given method.
///
/// Returns `None` when the method finds no threshold (empty histogram or
/// IsoData non-convergence).
pub fn select_threshold(histogram: &Histogram, method: ThresholdMethod) -> Option<usize> {
    let level = match method {
        ThresholdMethod::OtsuOpenCv => otsu_opencv_threshold(histogram),
        ThresholdMethod::Otsu => otsu_threshold(histogram),
        ThresholdMethod::IsoData => isodata_threshold(histogram),
        ThresholdMethod::Triangle => triangle_threshold(histogram),
        ThresholdMethod::Mean => mean_threshold(histogram),
        ThresholdMethod::MinError => min_error_threshold(histogram),
        ThresholdMethod::MaxEntropy => max_entropy_threshold(histogram),
        ThresholdMethod::RenyiEntropy => renyi_entropy_threshold(histogram),
        ThresholdMethod::Yen => yen_threshold(histogram),
    };
    debug!(method = %method, ?level, "Threshold selected");
    level
}

/// Run every method on the same histogram.
pub fn select_all(histogram: &Histogram) -> Vec<(ThresholdMethod, Option<usize>)> {
    ThresholdMethod::ALL
        .into_iter()
        .map(|m| (m, select_threshold(histogram, m)))
        .collect()
}

/// Normalized histogram and its cumulative sum, or `None` for an empty histogram.
pub(crate) fn normalized_cumulative(histogram: &Histogram) -> Option<(Vec<f64>, Vec<f64>)> {
    let total = histogram.total();
    if total == 0 {
        return None;
    }
    let total = total as f64;
    let norm: Vec<f64> = histogram.bins().iter().map(|&c| c as f64 / total).collect();
    let cumulative = norm
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect();
    Some((norm, cumulative))
}
