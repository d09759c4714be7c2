pub mod moments;

use tracing::debug;

use crate::error::{Result, RetinaError};
use crate::frame::Frame;

/// Pixel counts per gray level. Always holds at least two bins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<u64>,
}

impl Histogram {
    /// Wrap raw counts, rejecting histograms with fewer than two bins.
    pub fn new(bins: Vec<u64>) -> Result<Self> {
        if bins.len() < 2 {
            return Err(RetinaError::InvalidInput(format!(
                "histogram needs at least 2 bins, got {}",
                bins.len()
            )));
        }
        Ok(Self { bins })
    }

    /// Build the histogram of a single-channel 8/16-bit frame.
    ///
    /// `bins` defaults to the full dynamic range `2^bit_depth`. Sample `v`
    /// falls into bin `floor(v * bins / 2^bit_depth)`.
    pub fn from_frame(frame: &Frame, bins: Option<usize>) -> Result<Self> {
        frame.ensure_grayscale("histogram")?;

        let gray_levels = frame.gray_levels();
        let bins = bins.unwrap_or(gray_levels);
        if bins < 2 {
            return Err(RetinaError::InvalidInput(format!(
                "histogram: bin count must be at least 2, got {bins}"
            )));
        }

        let mut counts = vec![0u64; bins];
        for &v in frame.gray_view().iter() {
            let v = v as usize;
            if v >= gray_levels {
                return Err(RetinaError::InvalidInput(format!(
                    "histogram: sample value {v} exceeds the {}-bit range",
                    frame.bit_depth
                )));
            }
            counts[v * bins / gray_levels] += 1;
        }

        debug!(bins, pixels = frame.gray_view().len(), "Histogram built");
        Self::new(counts)
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Always false: a histogram holds at least two bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total pixel count.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// True when every bin is zero.
    pub fn has_no_mass(&self) -> bool {
        self.bins.iter().all(|&c| c == 0)
    }

    /// Index of the first and last nonzero bin, if any.
    pub fn occupied_range(&self) -> Option<(usize, usize)> {
        let first = self.bins.iter().position(|&c| c > 0)?;
        let last = self.bins.iter().rposition(|&c| c > 0)?;
        Some((first, last))
    }

    /// Bracket the histogram to the range that holds data.
    ///
    /// When a single bin is occupied the range is widened by one neighbour so
    /// the result is still a valid two-bin histogram.
    pub fn compress(&self) -> Result<CompressedHistogram> {
        let (mut min_bin, mut max_bin) = self.occupied_range().ok_or_else(|| {
            RetinaError::InvalidInput("cannot compress a histogram with no data".into())
        })?;

        if min_bin == max_bin {
            if max_bin + 1 < self.bins.len() {
                max_bin += 1;
            } else {
                min_bin -= 1;
            }
        }

        Ok(CompressedHistogram {
            histogram: Self::new(self.bins[min_bin..=max_bin].to_vec())?,
            min_bin,
        })
    }
}

/// A histogram trimmed to its occupied range plus the offset of its first bin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressedHistogram {
    pub histogram: Histogram,
    pub min_bin: usize,
}

impl CompressedHistogram {
    /// Translate a level of the trimmed histogram back to the original domain.
    pub fn to_original(&self, level: usize) -> usize {
        level + self.min_bin
    }
}
