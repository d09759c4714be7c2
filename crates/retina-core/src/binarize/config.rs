use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RetinaError;
use crate::threshold::ThresholdMethod;

/// Which threshold criterion to binarize with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinarizationMethod {
    /// Try every method and report each outcome; the caller compares them.
    All,
    Single(ThresholdMethod),
}

impl Default for BinarizationMethod {
    fn default() -> Self {
        Self::Single(ThresholdMethod::default())
    }
}

impl BinarizationMethod {
    /// The methods this selection expands to.
    pub fn methods(&self) -> Vec<ThresholdMethod> {
        match self {
            Self::All => ThresholdMethod::ALL.to_vec(),
            Self::Single(method) => vec![*method],
        }
    }
}

impl fmt::Display for BinarizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Single(method) => write!(f, "{method}"),
        }
    }
}

impl FromStr for BinarizationMethod {
    type Err = RetinaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Single)
        }
    }
}

impl Serialize for BinarizationMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BinarizationMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Configuration for automatic binarization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinarizationConfig {
    /// Threshold criterion, or `all` to compare every criterion.
    #[serde(default)]
    pub method: BinarizationMethod,
    /// Trim empty leading/trailing bins before selecting the threshold.
    #[serde(default = "default_compress_histogram")]
    pub compress_histogram: bool,
    /// Histogram bin count; `None` uses the full range of the bit depth.
    #[serde(default)]
    pub bins: Option<usize>,
}

fn default_compress_histogram() -> bool {
    true
}

impl Default for BinarizationConfig {
    fn default() -> Self {
        Self {
            method: BinarizationMethod::default(),
            compress_histogram: default_compress_histogram(),
            bins: None,
        }
    }
}
