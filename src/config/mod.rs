//! Configuration
//!
//! `DirnodeConfig` is assembled from defaults, an optional global TOML file,
//! an optional explicit file, and `DIRNODE__*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirnodeConfig {
    #[serde(default)]
    pub index: IndexSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings applied when constructing a `DirnodeIndex`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Number of records to pre-allocate for (default: 0)
    #[serde(default)]
    pub initial_capacity: usize,
}
