//! Common test utilities for integration tests.

// Allow dead code in this module - these are helper utilities that may not be
// used by every integration test file.
#![allow(dead_code)]

use audit_scheduler_api::{app::create_app, config};
use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};

/// Test configuration: permissive CORS, small request limits.
pub fn test_config() -> config::Config {
    config::Config {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        },
        logging: config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: config::SecurityConfig {
            cors_origins: vec![],
        },
        limits: config::LimitsConfig {
            max_quantity: 100,
            max_occurrences: 50,
            max_records: 500,
        },
    }
}

/// Build the application router with the test configuration.
pub fn create_test_app() -> Router {
    create_app(test_config())
}

/// Build a JSON POST request.
pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
