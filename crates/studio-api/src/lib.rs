//! Tattoo studio appointment service — HTTP layer.
//!
//! Exposes the appointment service layer over axum. The binary in
//! `main.rs` wires configuration, telemetry and the database pool around
//! [`app`].

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use crate::state::AppState;

/// Builds the full application router.
// TODO: Replace CorsLayer::permissive() with restricted origins for production.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/appointments", routes::appointments::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
