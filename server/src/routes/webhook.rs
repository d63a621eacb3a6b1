//! Subscriber notification routes.
//!
//! `POST /api/webhook` is called by the streaming platform integration and
//! `POST /api/test-subscriber` by the test buttons; both accept
//! `{ "username": "<string>" }` and differ only in how they are logged.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::services::relay::{self, RelayError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubscriberBody {
    #[serde(default)]
    pub username: Option<String>,
}

pub(crate) fn relay_error_to_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::MissingUsername | RelayError::InvalidBody => StatusCode::BAD_REQUEST,
        RelayError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = relay_error_to_status(&self);
        let message = if status.is_server_error() { "Internal server error".to_owned() } else { self.to_string() };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// `POST /api/webhook`
pub async fn webhook(State(state): State<AppState>, body: Result<Json<SubscriberBody>, JsonRejection>) -> Response {
    accept(&state, "webhook", body).await
}

/// `POST /api/test-subscriber`
pub async fn test_subscriber(
    State(state): State<AppState>,
    body: Result<Json<SubscriberBody>, JsonRejection>,
) -> Response {
    accept(&state, "test", body).await
}

async fn accept(state: &AppState, source: &'static str, body: Result<Json<SubscriberBody>, JsonRejection>) -> Response {
    match relay_subscriber(state, source, body).await {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => {
            if relay_error_to_status(&err).is_server_error() {
                error!(source, error = %err, "relay: notification failed");
            } else {
                warn!(source, error = %err, "relay: notification rejected");
            }
            err.into_response()
        }
    }
}

async fn relay_subscriber(
    state: &AppState,
    source: &'static str,
    body: Result<Json<SubscriberBody>, JsonRejection>,
) -> Result<(), RelayError> {
    let Json(body) = body.map_err(|_| RelayError::InvalidBody)?;
    let username = body.username.unwrap_or_default();
    let reached = relay::notify(state, &username).await?;
    info!(source, %username, reached, "relay: new subscriber accepted");
    Ok(())
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
