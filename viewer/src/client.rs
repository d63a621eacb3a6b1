//! Relay client: push-channel subscription and the test endpoint.
//!
//! ERROR HANDLING
//! ==============
//! A frame that fails to decode is logged and skipped; the subscription
//! only ends when the relay closes the socket or the transport fails.

use futures_util::StreamExt;
use notebook::driver::{DriverError, SchedulerHandle};
use serde_json::{Value, json};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::ViewerError;

/// Subscribe to the relay at `relay_url` and push every subscriber name into
/// the notebook. Returns the number of names received once the relay
/// closes the connection.
///
/// # Errors
///
/// Fails if the connection cannot be established, the transport breaks, or
/// the notebook driver has stopped.
pub async fn watch(relay_url: &str, handle: &SchedulerHandle) -> Result<usize, ViewerError> {
    let (mut stream, _) = connect_async(relay_url).await.map_err(|e| ViewerError::WsConnect(Box::new(e)))?;
    info!(%relay_url, "viewer: connected to relay");

    let mut received = 0;
    while let Some(message) = stream.next().await {
        match message.map_err(|e| ViewerError::WsRecv(Box::new(e)))? {
            Message::Text(text) => {
                if handle_text(text.as_str(), handle)? {
                    received += 1;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!(received, "viewer: relay closed the connection");
    Ok(received)
}

/// Route one text frame. Returns whether it carried a subscriber name.
pub(crate) fn handle_text(text: &str, handle: &SchedulerHandle) -> Result<bool, DriverError> {
    let frame = match frames::decode_frame(text) {
        Ok(frame) => frame,
        Err(e) => {
            warn!(error = %e, "viewer: dropping undecodable frame");
            return Ok(false);
        }
    };

    if let Some(username) = frame.username() {
        debug!(%username, "viewer: new subscriber");
        handle.push(username)?;
        return Ok(true);
    }

    if frame.event == frames::EVENT_CONNECTED {
        let client_id = frame.data.get(frames::FIELD_CLIENT_ID).and_then(Value::as_str).unwrap_or("?");
        info!(%client_id, "viewer: session connected");
    } else {
        debug!(event = %frame.event, "viewer: ignoring frame");
    }
    Ok(false)
}

pub(crate) fn test_subscriber_url(base_url: &str) -> String {
    format!("{}/api/test-subscriber", base_url.trim_end_matches('/'))
}

/// POST `username` to the relay's test endpoint and return its reply.
///
/// # Errors
///
/// Fails on transport errors, or with [`ViewerError::Rejected`] when the
/// relay answers with a non-success status.
pub async fn send(base_url: &str, username: &str) -> Result<Value, ViewerError> {
    let response = reqwest::Client::new()
        .post(test_subscriber_url(base_url))
        .json(&json!({ "username": username }))
        .send()
        .await?;
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let message = value.get("error").and_then(Value::as_str).map_or_else(|| value.to_string(), ToOwned::to_owned);
        return Err(ViewerError::Rejected { status: status.as_u16(), message });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
