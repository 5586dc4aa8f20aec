use std::fs;
use log::{info, debug, error, warn};
use serial_test::serial;
use crate::core::logger;

#[test]
#[serial]
fn test_logger() {
    logger::setup(log::LevelFilter::Info, None);
    info!("info: testing....");
    error!("error: testing...");
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_to_file() {
    let path = "test_logger_to_file.log";
    _ = fs::remove_file(path);

    logger::setup(log::LevelFilter::Warn, Some(path));
    logger::revert_console_output();
    warn!("warn: written to file");
    info!("info: filtered out");
    debug!("debug: filtered out");
    logger::teardown();

    let data = fs::read_to_string(path).unwrap();
    assert_eq!(data.contains("warn: written to file"), true);
    assert_eq!(data.contains("[WARN]"), true);
    assert_eq!(data.contains("filtered out"), false);
    _ = fs::remove_file(path);
}
