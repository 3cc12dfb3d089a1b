//! Config composition: defaults plus ordered sources.

pub mod service;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with the defaults every source overlays.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("index.initial_capacity", 0_i64)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")
}
