//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use studio_core::repository::AppointmentRepository;
use studio_store::pg_appointment_repository::PgAppointmentRepository;
use studio_test_support::{InMemoryAppointmentRepository, fixtures};
use tower::ServiceExt;

use studio_api::state::AppState;

/// Base path of the appointment routes.
pub const APPOINTMENTS: &str = "/api/appointments";

/// Build the full app router over `repository`, exactly as the server does.
pub fn build_test_app(repository: Arc<dyn AppointmentRepository>) -> Router {
    studio_api::app(AppState::new(repository))
}

/// An in-memory repository preloaded with the three studio records.
pub fn seeded_repository() -> Arc<InMemoryAppointmentRepository> {
    Arc::new(InMemoryAppointmentRepository::with_records(
        fixtures::studio_records(),
    ))
}

/// Build the full app router over a real `PgAppointmentRepository`.
pub fn build_pg_test_app(pool: PgPool) -> Router {
    build_test_app(Arc::new(PgAppointmentRepository::new(pool)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, json_request("POST", uri, body)).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, json_request("PUT", uri, body)).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request("GET", uri)).await
}

/// Send a DELETE request and return the response; an empty body reads as
/// `Value::Null`.
pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request("DELETE", uri)).await
}
