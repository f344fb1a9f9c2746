//! Tests for layered configuration loading.

use fleetdash::DashboardConfig;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Create temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_loads_file_with_defaults() {
    let file = toml_file(
        r#"
[bot_api]
host = "bot"
port = 8000
secret_key = "hunter2"
"#,
    );

    let config = DashboardConfig::load_with_env(Some(file.path()), env(&[])).expect("Loads");
    assert_eq!(config.bot_api.endpoint(), "http://bot:8000/api");
    assert_eq!(config.bot_api.timeout_ms, 5_000);
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.pool_size, 10);
    assert_eq!(config.database.connection_timeout_ms, 5_000);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
}

#[test]
fn test_environment_overrides_file() {
    let file = toml_file(
        r#"
[bot_api]
host = "bot"
port = 8000
secret_key = "from-file"

[database]
name = "anisearch"
"#,
    );

    let config = DashboardConfig::load_with_env(
        Some(file.path()),
        env(&[
            ("FLEETDASH__BOT_API__SECRET_KEY", "from-env"),
            ("FLEETDASH__BOT_API__TIMEOUT_MS", "250"),
            ("FLEETDASH__DATABASE__HOST", "db.internal"),
            ("FLEETDASH__DATABASE__CONNECTION_TIMEOUT_MS", "750"),
            ("FLEETDASH__LOGGING__JSON", "true"),
        ]),
    )
    .expect("Loads");

    assert_eq!(config.bot_api.secret_key, "from-env");
    assert_eq!(config.bot_api.timeout_ms, 250);
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.connection_timeout_ms, 750);
    assert_eq!(config.database.name, "anisearch");
    assert!(config.logging.json);
}

#[test]
fn test_environment_only() {
    let config = DashboardConfig::load_with_env(
        Some(toml_file("").path()),
        env(&[
            ("FLEETDASH__BOT_API__HOST", "127.0.0.1"),
            ("FLEETDASH__BOT_API__PORT", "9000"),
            ("FLEETDASH__BOT_API__SECRET_KEY", "s3cret"),
            ("FLEETDASH__DATABASE__URL", "postgres://u:p@db/anisearch"),
        ]),
    )
    .expect("Loads");

    assert_eq!(config.bot_api.port, 9000);
    assert_eq!(config.database.connection_url(), "postgres://u:p@db/anisearch");
}

#[test]
fn test_missing_bot_api_is_an_error() {
    let file = toml_file("[database]\nname = \"anisearch\"\n");
    let err = DashboardConfig::load_with_env(Some(file.path()), env(&[])).unwrap_err();
    assert!(err.message.contains("Invalid configuration"));
}

#[test]
fn test_explicit_file_must_exist() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let missing = dir.path().join("nope.toml");
    assert!(DashboardConfig::load_with_env(Some(missing.as_path()), env(&[])).is_err());
}

#[test]
fn test_zero_timeout_rejected() {
    let file = toml_file(
        r#"
[bot_api]
host = "bot"
port = 8000
secret_key = "k"
timeout_ms = 0
"#,
    );
    let err = DashboardConfig::load_with_env(Some(file.path()), env(&[])).unwrap_err();
    assert!(err.message.contains("timeout_ms"));
}

#[test]
fn test_empty_host_rejected() {
    let file = toml_file("[bot_api]\nhost = \" \"\nport = 8000\nsecret_key = \"k\"\n");
    let err = DashboardConfig::load_with_env(Some(file.path()), env(&[])).unwrap_err();
    assert!(err.message.contains("bot_api.host"));
}

#[test]
fn test_numeric_looking_secrets_stay_verbatim() {
    let file = toml_file("[bot_api]\nhost = \"bot\"\nport = 8000\nsecret_key = \"k\"\n");

    let config = DashboardConfig::load_with_env(
        Some(file.path()),
        env(&[
            ("FLEETDASH__BOT_API__SECRET_KEY", "007"),
            ("FLEETDASH__DATABASE__PASSWORD", "0123"),
            ("FLEETDASH__DATABASE__USER", "1e3"),
        ]),
    )
    .expect("Loads");

    assert_eq!(config.bot_api.secret_key, "007");
    assert_eq!(config.database.password, "0123");
    assert_eq!(config.database.user, "1e3");
}
