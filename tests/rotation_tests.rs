//! Rotation and shutdown tests
//!
//! These tests verify:
//! - File sinks follow their path across external rotation
//! - Banners are rewritten only into empty files
//! - Sinks whose file cannot be reopened are removed silently
//! - Shutdown closes everything and is idempotent

use sink_logger::prelude::*;
use sink_logger::{error, notice};
use std::fs;
use std::io;
use tempfile::TempDir;

fn logger() -> Logger {
    Logger::builder().program("rotd", "4.2").build()
}

fn banner_count(content: &str) -> usize {
    content.matches("rotd 4.2 opening").count()
}

#[test]
fn test_rotate_after_archive_writes_to_new_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("daemon.log");
    let archived = temp_dir.path().join("daemon.log.1");

    let mut logger = logger();
    logger
        .add_file_sink(Severity::Notice, Severity::Error, &log_file)
        .unwrap();
    notice!(logger, "before rotation");

    fs::rename(&log_file, &archived).unwrap();
    assert_eq!(logger.rotate_all(), 0);
    notice!(logger, "after rotation");

    let old = fs::read_to_string(&archived).unwrap();
    let new = fs::read_to_string(&log_file).unwrap();
    assert!(old.contains("before rotation"));
    assert!(!old.contains("after rotation"));
    assert_eq!(banner_count(&new), 1);
    assert!(new.lines().next().unwrap().contains("opening new log file."));
    assert!(new.ends_with("[notice] after rotation\n"));
}

#[test]
fn test_rotate_truncated_file_gets_banner() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("truncated.log");

    let mut logger = logger();
    logger
        .add_file_sink(Severity::Notice, Severity::Error, &log_file)
        .unwrap();
    notice!(logger, "first");

    fs::File::create(&log_file).unwrap();
    logger.rotate_all();

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(banner_count(&content), 1);
    assert!(content.contains("opening new log file."));
    assert!(!content.contains("first"));
}

#[test]
fn test_rotate_non_empty_file_writes_no_banner() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("kept.log");

    let mut logger = logger();
    logger
        .add_file_sink(Severity::Notice, Severity::Error, &log_file)
        .unwrap();
    notice!(logger, "first");

    logger.rotate_all();
    notice!(logger, "second");

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(banner_count(&content), 1);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("first"));
    assert!(lines[2].ends_with("second"));
}

#[test]
fn test_rotate_temporary_file_sink_writes_no_banner() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("temporary.log");

    let mut logger = logger();
    logger
        .add_file_sink(Severity::Notice, Severity::Error, &log_file)
        .unwrap();
    logger.mark_all_temporary();

    fs::File::create(&log_file).unwrap();
    logger.rotate_all();

    assert_eq!(fs::read_to_string(&log_file).unwrap(), "");
}

#[test]
fn test_failed_reopen_removes_only_that_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let doomed_dir = temp_dir.path().join("doomed");
    let doomed = doomed_dir.join("doomed.log");
    let survivor = temp_dir.path().join("survivor.log");

    let mut logger = logger();
    logger
        .add_file_sink(Severity::Notice, Severity::Error, &survivor)
        .unwrap();
    let doomed_id = logger
        .add_file_sink(Severity::Notice, Severity::Error, &doomed)
        .unwrap();
    let stream_id = logger
        .add_stream_sink(Severity::Notice, Severity::Error, "stream", io::sink())
        .unwrap();

    fs::remove_dir_all(&doomed_dir).unwrap();

    assert_eq!(logger.rotate_all(), 1);
    assert!(!logger.contains_sink(doomed_id));
    assert!(logger.contains_sink(stream_id));
    assert_eq!(logger.sink_count(), 2);
    assert_eq!(logger.metrics().rotation_failures(), 1);

    error!(logger, "after failed rotation");
    let content = fs::read_to_string(&survivor).unwrap();
    assert!(content.ends_with("[err] after failed rotation\n"));
    assert!(!doomed.exists());
}

#[test]
fn test_shutdown_closes_file_sinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("shutdown.log");

    let mut logger = logger();
    logger
        .add_file_sink(Severity::Debug, Severity::Error, &log_file)
        .unwrap();
    logger.add_bootstrap_sink();
    error!(logger, "last words");

    logger.shutdown_all();
    assert_eq!(logger.sink_count(), 0);
    error!(logger, "after shutdown");
    logger.shutdown_all();

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("last words"));
    assert!(!content.contains("after shutdown"));
}

#[test]
fn test_drop_flushes_and_closes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("dropped.log");

    {
        let mut logger = logger();
        logger
            .add_file_sink(Severity::Debug, Severity::Error, &log_file)
            .unwrap();
        notice!(logger, "written before drop");
    }

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.ends_with("[notice] written before drop\n"));
}
