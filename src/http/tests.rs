//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use reqwest::Method;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("librato/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://metrics-api.librato.com/v1/")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://metrics-api.librato.com/v1/".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let mut extra = std::collections::HashMap::new();
    extra.insert("length".to_string(), "10".to_string());

    let config = RequestConfig::new()
        .query("offset", "0")
        .queries(extra)
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"name": "cpu"}))
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("offset"), Some(&"0".to_string()));
    assert_eq!(config.query.get("length"), Some(&"10".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_endpoint_escapes_segments() {
    let config = HttpClientConfig::builder()
        .base_url("https://metrics-api.librato.com/v1/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.endpoint(&["metrics", "cpu.load"]).unwrap(),
        "https://metrics-api.librato.com/v1/metrics/cpu.load"
    );
    assert_eq!(
        client.endpoint(&["metrics", "a/b c"]).unwrap(),
        "https://metrics-api.librato.com/v1/metrics/a%2Fb%20c"
    );
}

#[test]
fn test_endpoint_without_trailing_slash() {
    let config = HttpClientConfig::builder()
        .base_url("https://metrics-api.librato.com/v1")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.endpoint(&["metrics"]).unwrap(),
        "https://metrics-api.librato.com/v1/metrics"
    );
}

#[test]
fn test_endpoint_requires_base_url() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let err = client.endpoint(&["metrics"]).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .get_json_with_config(&client.endpoint(&["metrics"]).unwrap(), RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .and(query_param("offset", "10"))
        .and(query_param("length", "5"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .get_with_config(
            &client.endpoint(&["metrics"]).unwrap(),
            RequestConfig::new().query("offset", "10").query("length", "5"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_put_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/metrics/cpu"))
        .and(body_json(serde_json::json!({"name": "cpu", "period": 60})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .put_with_config(
            &client.endpoint(&["metrics", "cpu"]).unwrap(),
            RequestConfig::new().json(serde_json::json!({"name": "cpu", "period": 60})),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_http_client_default_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .and(header("X-Default", "yes"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Default", "yes")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get_with_config(
            &client.endpoint(&["metrics"]).unwrap(),
            RequestConfig::new().header("X-Request-Id", "req-456"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_applies_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client =
        HttpClient::with_auth(config, AuthConfig::librato("ops@example.com", "tok")).unwrap();

    let response = client
        .get_with_config(&client.endpoint(&["metrics"]).unwrap(), RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config(&client.endpoint(&["metrics", "missing"]).unwrap(), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Not found"));
}

#[tokio::test]
async fn test_http_client_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config(&client.endpoint(&["metrics"]).unwrap(), RequestConfig::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_http_client_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: crate::error::Result<serde_json::Value> = client
        .request_json(Method::GET, &client.endpoint(&["metrics"]).unwrap(), RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config(
            &client.endpoint(&["slow"]).unwrap(),
            RequestConfig::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    // Client without base URL
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();

    let response = client
        .get_with_config(
            &format!("{}/metrics", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_rejects_relative_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://metrics-api.librato.com/v1/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .get_with_config("metrics", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("has_auth: false"));
}
