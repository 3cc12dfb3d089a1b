//! Subscriber installation; runs in its own process so the global default is free.

use dirnode::logging::{init_logging, LoggingConfig};
use dirnode::DirnodeIndex;
use std::fs;

#[test]
fn file_output_records_index_events() {
    let temp = tempfile::tempdir().unwrap();
    let log_file = temp.path().join("logs").join("dirnode.log");
    let config = LoggingConfig {
        level: "debug".to_string(),
        output: "file".to_string(),
        file: Some(log_file.clone()),
        ..LoggingConfig::default()
    };
    init_logging(Some(&config)).unwrap();

    let mut index = DirnodeIndex::new();
    index.set(1, "docs", 0).unwrap();
    index.set(2, "docs", 0).unwrap();
    assert_eq!(index.clear(0), 1);

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Evicted sibling with the same name"), "{}", contents);
    assert!(contents.contains("displaced=1"), "{}", contents);
    assert!(contents.contains("Cleared index"), "{}", contents);
    assert!(contents.contains("dirnode::erase"), "{}", contents);

    // The global subscriber is already set
    assert!(init_logging(Some(&config)).is_err());
    assert!(init_logging(None).is_err());
}
