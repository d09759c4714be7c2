use serde::{Deserialize, Serialize};

use crate::binarize::BinarizationConfig;
use crate::roc::RocConfig;

/// Top-level engine configuration, usually loaded from TOML.
///
/// ```toml
/// [binarization]
/// method = "otsu"
/// compress_histogram = true
///
/// [roc]
/// higher_is_positive = true
/// parallel = true
/// workers = 8
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub binarization: BinarizationConfig,
    #[serde(default)]
    pub roc: RocConfig,
}
