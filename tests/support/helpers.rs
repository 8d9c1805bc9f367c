// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use heritage_core::application::services::{ApplicationServices, ServiceSettings};
use heritage_core::domain::monument::{
    MonumentReadRepository, MonumentSlugService, MonumentWriteRepository, SlugPolicy,
};
use heritage_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{FixedClock, InMemoryMonumentStore, StubTransliterator};

pub fn slug_service(read: Arc<dyn MonumentReadRepository>, max_suffix: u32) -> MonumentSlugService {
    MonumentSlugService::new(
        read,
        Arc::new(StubTransliterator),
        SlugPolicy::new(max_suffix).expect("valid policy"),
    )
}

pub fn build_services_with(
    write: Arc<dyn MonumentWriteRepository>,
    read: Arc<dyn MonumentReadRepository>,
    settings: ServiceSettings,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        write,
        read,
        Arc::new(StubTransliterator),
        Arc::new(FixedClock),
        settings,
    ))
}

pub fn build_services(store: &Arc<InMemoryMonumentStore>) -> Arc<ApplicationServices> {
    build_services_with(store.clone(), store.clone(), ServiceSettings::default())
}

pub fn make_test_router(store: &Arc<InMemoryMonumentStore>) -> axum::Router {
    build_router(HttpState {
        services: build_services(store),
    })
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Status plus parsed JSON body (`Value::Null` for an empty body).
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
