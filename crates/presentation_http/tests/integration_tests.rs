//! Integration tests for the dev proxy
#![allow(clippy::expect_used)]

use axum::http::{
    HeaderValue, StatusCode,
    header::{AUTHORIZATION, HOST},
};
use axum_test::TestServer;
use infrastructure::ProxyConfig;
use presentation_http::{ProxyState, create_router};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn proxy_to(target: &str, change_origin: bool) -> TestServer {
    let config = ProxyConfig {
        target: target.to_string(),
        change_origin,
        ..ProxyConfig::for_testing()
    };
    proxy_with(&config)
}

fn proxy_with(config: &ProxyConfig) -> TestServer {
    let state = ProxyState::from_config(config).expect("valid proxy config");
    TestServer::new(create_router(state, config)).expect("Failed to create test server")
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = proxy_to("http://127.0.0.1:1", true);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

// ============ Forwarding Tests ============

#[tokio::test]
async fn forwards_path_query_and_auth_header() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(query_param("date", "2026-03-14"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"events": [], "total": 0}
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let server = proxy_to(&backend.uri(), true);
    let response = server
        .get("/api/v1/events?date=2026-03-14")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer abc"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn forwards_json_body() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"account_id": "kai"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&backend)
        .await;

    let server = proxy_to(&backend.uri(), true);
    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({"account_id": "kai"}))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn change_origin_sets_host_to_target() {
    let backend = MockServer::start().await;
    let authority = backend.address().to_string();
    Mock::given(method("GET"))
        .and(path("/api/v1/time"))
        .and(header("host", authority.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&backend)
        .await;

    let server = proxy_to(&backend.uri(), true);
    let response = server
        .get("/api/v1/time")
        .add_header(HOST, HeaderValue::from_static("localhost:5173"))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn upstream_error_status_is_relayed() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/events/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": {"code": "NOT_FOUND", "message": "Event not found"}
        })))
        .mount(&backend)
        .await;

    let server = proxy_to(&backend.uri(), true);
    let response = server.delete("/api/v1/events/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let server = proxy_to("http://127.0.0.1:1", true);

    let response = server.get("/api/v1/time").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_GATEWAY");
}

// ============ Host Allow-List Tests ============

#[tokio::test]
async fn foreign_host_is_forbidden() {
    let server = proxy_to("http://127.0.0.1:1", true);

    let response = server
        .get("/health")
        .add_header(HOST, HeaderValue::from_static("evil.example.com"))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "HOST_NOT_ALLOWED");
}

#[tokio::test]
async fn tunnel_host_is_allowed() {
    let server = proxy_to("http://127.0.0.1:1", true);

    let response = server
        .get("/health")
        .add_header(HOST, HeaderValue::from_static("quiet-river-42.trycloudflare.com"))
        .await;

    response.assert_status_ok();
}

// ============ Static Files Tests ============

#[tokio::test]
async fn non_api_paths_serve_static_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), "<h1>Jarvis</h1>").expect("write index");

    let config = ProxyConfig {
        target: "http://127.0.0.1:1".to_string(),
        static_dir: Some(dir.path().to_string_lossy().into_owned()),
        ..ProxyConfig::for_testing()
    };
    let server = proxy_with(&config);

    let response = server.get("/index.html").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "<h1>Jarvis</h1>");

    server.get("/missing.js").await.assert_status_not_found();
}
