#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use manual_service::config::{GeminiSettings, ManualConfig};
use manual_service::services::providers::mock::MockTextProvider;
use manual_service::{build_router, AppState, Application};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const MANUAL_JSON: &str = r#"{"legal":"도로교통법 제32조","cases":"상황-대응-결과","checklist":"1. 현장 확인","aiAnalysis":"• 채증 철저"}"#;

pub fn router_with(provider: Arc<MockTextProvider>) -> Router {
    build_router(AppState::new(provider))
}

pub fn valid_body() -> serde_json::Value {
    serde_json::json!({ "category": "교통", "menu": "주정차 단속" })
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body is JSON")
}

pub fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert!(headers.contains_key("access-control-allow-methods"));
    assert!(headers.contains_key("access-control-allow-headers"));
}

pub fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status, "unexpected status");
}

pub fn test_config(api_key: Option<&str>, api_base: String) -> ManualConfig {
    ManualConfig {
        common: CoreConfig {
            port: 0,
            log_level: "error".to_string(),
        },
        gemini: GeminiSettings {
            api_key: api_key.map(|k| secrecy::SecretString::new(k.to_string())),
            model: "gemini-test".to_string(),
            api_base,
            timeout: Some(std::time::Duration::from_secs(5)),
        },
    }
}

/// Spawn an application on a random port and return its base address.
pub async fn spawn(app: Application) -> String {
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    let client = reqwest::Client::new();
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }

    address
}
