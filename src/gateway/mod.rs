//! HTTP gateway (Axum) for the scoring pipeline.
//!
//! Thin dispatch layer: `/evaluate` hands the parsed request to the
//! [`Evaluator`](crate::scoring::Evaluator); `/healthz` and `/ready` report
//! process and collaborator status.

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::evaluate_handler;
pub use state::HandlerState;

use crate::tagger::Tagger;

pub fn create_router_with_state<T: Tagger + 'static>(state: HandlerState<T>) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<T>))
        .route("/evaluate", post(evaluate_handler::<T>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub embedder_mode: &'static str,
    pub regressor_mode: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<T: Tagger + 'static>(State(state): State<HandlerState<T>>) -> Response {
    let embedder_mode = if state.evaluator.embedder().is_stub() {
        "stub"
    } else {
        "real"
    };
    let regressor_mode = if state.evaluator.regressor().is_stub() {
        "stub"
    } else {
        "real"
    };

    // Collaborators are loaded before the router exists, so a responsive
    // process is a ready process.
    let components = ComponentStatus {
        http: "ready",
        embedder_mode,
        regressor_mode,
    };

    (
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
