pub mod auc;
pub mod config;
pub mod curve;
pub mod export;
pub mod selftest;

pub use auc::{auc_trapz, auc_trapz_scores, auc_wmw};
pub use config::RocConfig;
pub use curve::{compute_roc, compute_roc_parallel, compute_roc_with, RocCurve, RocPoint};
pub use export::{save_roc, write_roc};
pub use selftest::{run_self_test, SelfTestOptions, SelfTestReport};
