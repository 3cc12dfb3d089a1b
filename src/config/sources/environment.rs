//! Environment variable source: DIRNODE_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses DIRNODE prefix and __ as separator for nested keys,
/// e.g. `DIRNODE__INDEX__INITIAL_CAPACITY=4096`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("DIRNODE")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
