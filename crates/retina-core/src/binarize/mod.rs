pub mod apply;
pub mod auto;
pub mod config;

pub use apply::binarize;
pub use auto::{auto_binarize, auto_threshold, BinarizationOutcome};
pub use config::{BinarizationConfig, BinarizationMethod};
