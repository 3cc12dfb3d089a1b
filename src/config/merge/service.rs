//! MergeService: orchestrates sources, applies merge policy, deserializes to DirnodeConfig.

use crate::config::sources::{environment, global_file};
use crate::config::DirnodeConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<DirnodeConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<DirnodeConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_file_reads_sections() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("dirnode.toml");
        fs::write(
            &path,
            r#"
[index]
initial_capacity = 512

[logging]
level = "debug"
format = "json"
output = "stderr"

[logging.modules]
"dirnode::erase" = "trace"
"#,
        )
        .unwrap();

        let config = MergeService::load_from_file(&path).unwrap();
        assert_eq!(config.index.initial_capacity, 512);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.output, "stderr");
        assert_eq!(
            config.logging.modules.get("dirnode::erase").map(String::as_str),
            Some("trace")
        );
    }

    #[test]
    fn test_load_from_file_fills_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = MergeService::load_from_file(&path).unwrap();
        assert_eq!(config.index.initial_capacity, 0);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.toml");
        assert!(MergeService::load_from_file(&path).is_err());
    }
}
