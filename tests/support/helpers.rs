// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryStore};
use airplanes_api::application::ports::{time::Clock, util::SlugGenerator};
use airplanes_api::application::services::ApplicationServices;
use airplanes_api::domain::{airplane::AirplaneRepository, manufacturer::ManufacturerRepository};
use airplanes_api::infrastructure::util::DefaultSlugGenerator;
use airplanes_api::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

pub fn build_services(store: &InMemoryStore) -> Arc<ApplicationServices> {
    let airplane_repo: Arc<dyn AirplaneRepository> = store.airplane_repo();
    let manufacturer_repo: Arc<dyn ManufacturerRepository> = store.manufacturer_repo();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        airplane_repo,
        manufacturer_repo,
        clock,
        slugger,
    ))
}

pub fn make_test_router(store: &InMemoryStore) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
