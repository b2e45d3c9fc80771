//! Logging configuration tests

use trq::infrastructure::config::{resolve_level, Logging};

#[test]
fn test_log_level_parsing() {
    assert_eq!(resolve_level("DEBUG"), "debug");
    assert_eq!(resolve_level("INFO"), "info");
    assert_eq!(resolve_level("WARN"), "warn");
    assert_eq!(resolve_level("ERROR"), "error");
}

#[test]
fn test_lowercase_levels_pass_through() {
    assert_eq!(resolve_level("debug"), "debug");
    assert_eq!(resolve_level("info"), "info");
    assert_eq!(resolve_level("warn"), "warn");
    assert_eq!(resolve_level("error"), "error");
}

#[test]
fn test_unknown_level_falls_back_to_warn() {
    assert_eq!(resolve_level("TRACE"), "warn");
    assert_eq!(resolve_level("verbose"), "warn");
    assert_eq!(resolve_level(""), "warn");
}

#[test]
fn test_logging_defaults() {
    let logging = Logging::default();
    assert!(logging.enable);
    assert!(logging.path.is_none());
    assert_eq!(logging.level, "WARN");
}

#[test]
fn test_logging_section_parses_from_toml() {
    let logging: Logging = toml::from_str(
        r#"
enable = true
path = "/tmp/trq.log"
level = "DEBUG"
"#,
    )
    .unwrap();
    assert!(logging.enable);
    assert_eq!(logging.path.as_deref(), Some("/tmp/trq.log"));
    assert_eq!(logging.level, "DEBUG");
}
