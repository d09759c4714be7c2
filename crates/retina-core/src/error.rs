use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetinaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No {0} samples found")]
    EmptySample(&'static str),

    #[error("Computation invariant violated: {0}")]
    ComputationInvariant(String),

    #[error("Cannot open destination {}: {source}", path.display())]
    CannotOpenDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse line {line} of score file {}: {reason}", path.display())]
    ScoreParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Self-test failed at iteration {iteration}: {reason}")]
    SelfTestFailed { iteration: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, RetinaError>;
