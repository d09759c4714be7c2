use serde::{Deserialize, Serialize};

/// Configuration for ROC computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RocConfig {
    /// Higher scores mean "more likely positive". When false, lower scores do.
    #[serde(default = "default_higher_is_positive")]
    pub higher_is_positive: bool,
    /// Compute ROC points on a pool of worker threads.
    #[serde(default)]
    pub parallel: bool,
    /// Number of worker threads used when `parallel` is set.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_higher_is_positive() -> bool {
    true
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl Default for RocConfig {
    fn default() -> Self {
        Self {
            higher_is_positive: default_higher_is_positive(),
            parallel: false,
            workers: default_workers(),
        }
    }
}
