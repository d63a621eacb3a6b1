//! WebSocket handler: one-way push channel to viewers.
//!
//! DESIGN
//! ======
//! On upgrade the viewer is registered with the relay and enters a
//! `select!` loop:
//! - Frames queued by `services::relay::notify` are forwarded as text
//! - Inbound messages are ignored apart from close
//!
//! LIFECYCLE
//! =========
//! 1. Origin check (browser origins must match `CLIENT_URL`)
//! 2. Upgrade, register, send `session:connected` with `client_id`
//! 3. Forward `new_subscriber` frames until either side closes
//! 4. Unregister

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use frames::Frame;
use tracing::{debug, error, info, warn};

use crate::services::relay;
use crate::state::AppState;

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(State(state): State<AppState>, headers: HeaderMap, ws: WebSocketUpgrade) -> Response {
    if !origin_allowed(&headers, &state.config.client_origin) {
        warn!(origin = ?headers.get(header::ORIGIN), "ws: rejected origin");
        return (StatusCode::FORBIDDEN, "origin not allowed").into_response();
    }

    ws.on_upgrade(move |socket| run_ws(socket, state))
}

/// Non-browser clients send no `Origin` and are always allowed.
pub(crate) fn origin_allowed(headers: &HeaderMap, client_origin: &HeaderValue) -> bool {
    match headers.get(header::ORIGIN) {
        None => true,
        Some(origin) => origin.as_bytes().strip_suffix(b"/").unwrap_or(origin.as_bytes()) == client_origin.as_bytes(),
    }
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let (client_id, mut client_rx) = relay::register(&state).await;

    let welcome = match frames::encode_frame(&Frame::connected(client_id)) {
        Ok(text) => text,
        Err(e) => {
            error!(%client_id, error = %e, "ws: failed to encode welcome frame");
            relay::unregister(&state, client_id).await;
            return;
        }
    };
    if socket.send(Message::Text(welcome.into())).await.is_err() {
        relay::unregister(&state, client_id).await;
        return;
    }

    let viewers = state.viewer_count().await;
    info!(%client_id, viewers, "ws: viewer connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Close(_) => break,
                    Message::Text(text) => debug!(%client_id, len = text.len(), "ws: ignoring inbound text"),
                    _ => {}
                }
            }
            Some(text) = client_rx.recv() => {
                if socket.send(Message::Text(text.to_string().into())).await.is_err() {
                    break;
                }
            }
        }
    }

    relay::unregister(&state, client_id).await;
    info!(%client_id, "ws: viewer disconnected");
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
