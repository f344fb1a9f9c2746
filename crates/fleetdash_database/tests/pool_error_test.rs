//! Tests for how an unreachable database surfaces through the store.

use fleetdash_database::{ConfigStore, DatabaseConfig, PostgresConfigStore, StoreErrorKind, lazy_pool};
use std::net::TcpListener;
use std::time::{Duration, Instant};

/// A config pointing at a local port nothing listens on.
fn refused_config() -> DatabaseConfig {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Bind ephemeral port");
    let port = listener.local_addr().expect("Local address").port();
    drop(listener);

    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port,
        name: "fleetdash".to_string(),
        user: "nobody".to_string(),
        password: "unused".to_string(),
        pool_size: 1,
        connection_timeout_ms: 200,
        ..DatabaseConfig::default()
    }
}

#[tokio::test]
async fn test_unreachable_database_is_a_pool_error() {
    let pool = lazy_pool(&refused_config()).expect("Lazy pool builds without connecting");
    let store = PostgresConfigStore::new(pool);

    let started = Instant::now();
    let err = store.list_all_guilds_including_removed().await.unwrap_err();
    assert!(matches!(err.kind, StoreErrorKind::Pool(_)), "{}", err);
    assert!(started.elapsed() < Duration::from_secs(10));

    let err = store.list_all_users_including_removed().await.unwrap_err();
    assert!(matches!(err.kind, StoreErrorKind::Pool(_)), "{}", err);
}

#[tokio::test]
async fn test_ping_fails_when_unreachable() {
    let pool = lazy_pool(&refused_config()).expect("Lazy pool builds without connecting");
    let store = PostgresConfigStore::new(pool);

    assert!(store.ping().await.is_err());
}
