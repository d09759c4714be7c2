pub mod binarize;
pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod histogram;
pub mod io;
pub mod partition;
pub mod roc;
pub mod threshold;
