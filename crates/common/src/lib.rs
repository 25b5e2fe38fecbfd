//! scoutrank shared infrastructure
//!
//! Error type, configuration and logging used by every crate in the workspace

pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{canonical_metric_name, parse_weights, ScoutConfig, METRIC_NAMES};
pub use error::ScoutError;
pub type Result<T> = std::result::Result<T, ScoutError>;
