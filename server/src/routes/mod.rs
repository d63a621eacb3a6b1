//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay exposes two notification endpoints (`/api/webhook` for the
//! streaming platform, `/api/test-subscriber` for manual testing), a
//! liveness probe, and the websocket push channel viewers subscribe to.

pub mod webhook;
pub mod ws;

use axum::Router;
use axum::http::Method;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.client_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/webhook", post(webhook::webhook))
        .route("/api/test-subscriber", post(webhook::test_subscriber))
        .route("/socket", get(ws::handle_ws))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
