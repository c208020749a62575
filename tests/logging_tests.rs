//! Runs in its own process: installs the global subscriber once.

use std::time::Duration;

use solar_assistant::cli::init_logging;

#[test]
fn test_debug_records_are_appended_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solar_assistant.log");
    std::fs::write(&path, "previous run\n").unwrap();

    let guard = init_logging(&path, false).unwrap();
    tracing::debug!(target: "solar_assistant::connector", "Response status code: 200");
    drop(guard);
    std::thread::sleep(Duration::from_millis(50));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("previous run\n"));
    assert!(contents.contains("Response status code: 200"));
    assert!(contents.contains("DEBUG"));
}
