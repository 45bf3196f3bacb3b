//! Integration tests for logger behavior.

use course_planner::logger::{set_level, set_level_from_str, Level};
use course_planner::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_tagged_lines() {
    use course_planner::logger::init_file_logging;
    use std::fs;

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("planner.log");

    assert!(init_file_logging(&log_path));
    // Error lines pass every level, so parallel tests changing the level cannot hide it
    error!("Test error message");

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[ERROR] Test error message"));
}
