//! Tests for the bot-control API client against an in-process fake API.

use axum::{
    Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use fleetdash_telemetry::{
    AUTHENTICATION_HEADER, BotApiConfig, BotApiConfigBuilder, TelemetryClient, TelemetryKind,
    TelemetrySource,
};
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

const SECRET: &str = "test-secret";

/// Answers like the bot process does, rejecting requests without the shared secret.
async fn fake_api(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let authorized = headers
        .get(AUTHENTICATION_HEADER)
        .and_then(|v| v.to_str().ok())
        == Some(SECRET);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string());
    }

    let body = match params.get("type").map(String::as_str) {
        Some("stats") => r#"{"is_ready":true,"guild_count":12,"uptime":3661.2,"latency":0.25}"#,
        Some("logs") => r#"{"logs":"line one\nline two"}"#,
        Some("shards") => r#"{"shards":[{"id":0,"shard_count":1,"latency":0.1}]}"#,
        _ => "{}",
    };
    (StatusCode::OK, body.to_string())
}

async fn slow_api() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    r#"{"is_ready":true}"#
}

/// Serve the router on an ephemeral port and return that port.
async fn spawn(router: Router) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Bind ephemeral port");
    let port = listener.local_addr().expect("Local address").port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake API server");
    });
    port
}

#[tokio::test]
async fn test_fetches_each_kind_with_secret() {
    let port = spawn(Router::new().route("/api", get(fake_api))).await;
    let client = TelemetryClient::new(&BotApiConfig::new("127.0.0.1", port, SECRET))
        .expect("Client builds");

    let stats = client.stats().await.expect("Stats fetched");
    assert!(stats.ready);
    assert_eq!(stats.guild_count, 12);
    assert_eq!(stats.uptime_seconds, 3661.2);

    let logs = client.logs().await.expect("Logs fetched");
    assert_eq!(logs.text, "line one\nline two");

    let shards = client.shards().await.expect("Shards fetched");
    assert_eq!(shards.len(), 1);
    assert_eq!(shards.shards[0].latency_seconds, 0.1);
}

#[tokio::test]
async fn test_status_code_is_not_inspected() {
    let port = spawn(Router::new().route("/api", get(fake_api))).await;
    let client = TelemetryClient::new(&BotApiConfig::new("127.0.0.1", port, "wrong-secret"))
        .expect("Client builds");

    // A 401 is still a transport-level success; the body is returned as-is
    let raw = client.fetch(TelemetryKind::Stats).await.expect("Transport succeeded");
    assert_eq!(raw, b"unauthorized");

    // ...and it is the decoder that rejects it
    let err = client.stats().await.expect_err("Body is not JSON");
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Bind ephemeral port");
        listener.local_addr().expect("Local address").port()
    };
    let client = TelemetryClient::new(&BotApiConfig::new("127.0.0.1", port, SECRET))
        .expect("Client builds");

    let err = client.fetch(TelemetryKind::Stats).await.expect_err("Nothing is listening");
    assert!(err.message.contains("stats"));

    let err = client.stats().await.expect_err("Nothing is listening");
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let port = spawn(Router::new().route("/api", get(slow_api))).await;
    let config = BotApiConfigBuilder::default()
        .host("127.0.0.1")
        .port(port)
        .secret_key(SECRET)
        .timeout_ms(200u64)
        .build()
        .expect("Valid config");
    let client = TelemetryClient::new(&config).expect("Client builds");

    let started = std::time::Instant::now();
    let err = client.logs().await.expect_err("Request must time out");
    assert!(err.is_transport());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_endpoint_is_built_from_host_and_port() {
    let client = TelemetryClient::new(&BotApiConfig::new("bot", 8000, SECRET)).expect("Client builds");
    assert_eq!(client.endpoint(), "http://bot:8000/api");
}
