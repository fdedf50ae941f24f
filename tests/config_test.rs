use std::io::Write;

use yatra_api::config::{resolve_port, AppConfig, LogFormat, ServerConfig};

#[test]
fn defaults_bind_port_5000() {
    let config = AppConfig::default();
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.bind_addr(), "0.0.0.0:5000");
    assert_eq!(config.server.base_url(), "http://localhost:5000");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.database.url.is_none());
}

#[test]
fn port_override_wins_over_configured_port() {
    assert_eq!(resolve_port(None, 5000).unwrap(), 5000);
    assert_eq!(resolve_port(Some("8080"), 5000).unwrap(), 8080);
    assert_eq!(resolve_port(Some(" 8080 "), 5000).unwrap(), 8080);
}

#[test]
fn non_numeric_port_is_fatal() {
    assert!(resolve_port(Some("not-a-port"), 5000).is_err());
    assert!(resolve_port(Some("70000"), 5000).is_err());
}

#[test]
fn base_url_follows_resolved_port() {
    let server = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: 8080,
    };
    assert_eq!(server.base_url(), "http://localhost:8080");
}

/// Env layering exercised end to end. Kept as a single test because it
/// mutates process-wide environment variables. The temp file path carries
/// no extension, so this also checks that loading does not depend on a
/// `.toml` suffix.
#[test]
fn load_layers_file_and_port_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = 4000").unwrap();

    std::env::set_var("YATRA_CONFIG", file.path());
    std::env::remove_var("PORT");

    let config = AppConfig::load().expect("config file should load");
    assert_eq!(config.server.port, 4000);

    std::env::set_var("PORT", "8080");
    let config = AppConfig::load().expect("PORT override should load");
    assert_eq!(config.server.port, 8080);

    std::env::set_var("PORT", "yes-please");
    assert!(AppConfig::load().is_err());

    std::env::remove_var("PORT");
    std::env::remove_var("YATRA_CONFIG");
}
