//! Standard config sources: global file and environment overlay.

use dirnode::ConfigLoader;
use std::fs;

#[test]
fn load_layers_environment_over_global_file() {
    let temp = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", temp.path());
    std::env::set_var("DIRNODE__INDEX__INITIAL_CAPACITY", "4096");

    let config = ConfigLoader::load().unwrap();
    assert_eq!(config.index.initial_capacity, 4096);

    if cfg!(target_os = "linux") {
        let global = dirnode::config::sources::global_file::global_config_path().unwrap();
        assert!(global.starts_with(temp.path()));
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(
            &global,
            "[index]\ninitial_capacity = 16\n\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load().unwrap();
        // Environment wins over the file; untouched keys come from the file
        assert_eq!(config.index.initial_capacity, 4096);
        assert_eq!(config.logging.level, "warn");

        std::env::remove_var("DIRNODE__INDEX__INITIAL_CAPACITY");
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.index.initial_capacity, 16);
    }
}
