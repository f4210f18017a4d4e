//! Tests for TOML-driven construction and size parsing.

use rollog::config::{format_size, parse_size};
use rollog::{Config, DEFAULT_ROTATE_AT, Error, Flags};
use std::fs;

#[test]
fn empty_config_builds_a_stderr_logger() {
    let config = Config::parse("").unwrap();
    let logger = config.build_logger().unwrap();
    assert_eq!(logger.flags(), Flags::STD);
    assert_eq!(logger.prefix(), "");
    assert_eq!(logger.rotate_threshold(), None);
}

#[test]
fn full_config_round_trips_into_a_logger() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("svc.log");
    let content = format!(
        r#"
prefix = "svc: "
flags = ["date", "time", "microseconds", "shortfile"]

[file]
path = "{}"
rotate_at = "2M"
"#,
        log_path.display()
    );
    let config_path = dir.path().join("rollog.toml");
    fs::write(&config_path, content).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let logger = config.build_logger().unwrap();

    assert_eq!(logger.prefix(), "svc: ");
    assert_eq!(
        logger.flags(),
        Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::SHORT_FILE
    );
    assert_eq!(logger.rotate_threshold(), Some(2 * 1024 * 1024));

    logger.emit("up").unwrap();
    let written = fs::read_to_string(&log_path).unwrap();
    assert!(written.starts_with("svc: "), "line: {written:?}");
    assert!(written.contains("config.rs:"), "line: {written:?}");
    assert!(written.ends_with(": up\n"), "line: {written:?}");
}

#[test]
fn empty_file_path_behaves_like_no_file_table() {
    let config = Config::parse("[file]\nrotate_at = \"2M\"").unwrap();
    let logger = config.build_logger().unwrap();
    assert_eq!(logger.rotate_threshold(), None);
}

#[test]
fn unknown_flag_is_a_construction_error() {
    let config = Config::parse(r#"flags = ["datetime"]"#).unwrap();
    assert!(matches!(
        config.build_logger(),
        Err(Error::InvalidFlag(name)) if name == "datetime"
    ));
}

#[test]
fn malformed_size_is_a_construction_error() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!(
        "[file]\npath = \"{}\"\nrotate_at = \"ten megs\"",
        dir.path().join("svc.log").display()
    );
    let config = Config::parse(&content).unwrap();
    assert!(matches!(
        config.build_logger(),
        Err(Error::InvalidSize(size)) if size == "ten megs"
    ));
}

#[test]
fn sizes_below_the_floor_are_replaced_by_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!(
        "[file]\npath = \"{}\"\nrotate_at = \"512K\"",
        dir.path().join("svc.log").display()
    );
    let logger = Config::parse(&content).unwrap().build_logger().unwrap();
    assert_eq!(logger.rotate_threshold(), Some(DEFAULT_ROTATE_AT));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        Config::parse("prefix = ["),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn parse_size_understands_binary_units() {
    assert_eq!(parse_size("10M"), Some(10 * 1024 * 1024));
    assert_eq!(parse_size("512K"), Some(512 * 1024));
    assert_eq!(parse_size("1G"), Some(1024 * 1024 * 1024));
    assert_eq!(parse_size("2MiB"), Some(2 * 1024 * 1024));
    assert_eq!(parse_size("123"), Some(123));
    assert_eq!(parse_size("7B"), Some(7));
    assert_eq!(parse_size(" 4 K "), Some(4096));
}

#[test]
fn parse_size_rejects_garbage() {
    assert_eq!(parse_size(""), None);
    assert_eq!(parse_size("M"), None);
    assert_eq!(parse_size("ten"), None);
    assert_eq!(parse_size("10X"), None);
    assert_eq!(parse_size("10 megs"), None);
}

#[test]
fn format_size_picks_the_largest_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2.00 KB");
    assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
    assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
}
