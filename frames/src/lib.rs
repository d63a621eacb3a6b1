//! Shared frame model and JSON codec for the push channel.
//!
//! This crate owns the wire representation used by both the relay `server`
//! and the `viewer`. Frames are one-way events: the relay emits them, viewers
//! consume them. Payloads stay flexible (`serde_json::Map`) so new events do
//! not need a codec change.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Event broadcast for every accepted subscriber notification.
pub const EVENT_NEW_SUBSCRIBER: &str = "new_subscriber";

/// Event sent once to a viewer right after its channel opens.
pub const EVENT_CONNECTED: &str = "session:connected";

/// Payload key carrying the subscriber name.
pub const FIELD_USERNAME: &str = "username";

/// Payload key carrying the relay-assigned viewer id.
pub const FIELD_CLIENT_ID: &str = "client_id";

/// Error returned by [`encode_frame`] and [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not a JSON frame.
    #[error("failed to decode frame: {0}")]
    Json(#[from] serde_json::Error),
    /// The frame decoded but names no event.
    #[error("frame has an empty event name")]
    EmptyEvent,
}

/// A single message on the push channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Unique identifier for this frame (UUID string).
    pub id: String,
    /// Milliseconds since the Unix epoch when the frame was created.
    pub ts: i64,
    /// Event name, e.g. `"new_subscriber"`.
    pub event: String,
    /// Flat JSON payload.
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Current time as milliseconds since Unix epoch.
fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

impl Frame {
    /// Create a frame with a fresh id and timestamp.
    pub fn new(event: impl Into<String>, data: Map<String, Value>) -> Self {
        Self { id: Uuid::new_v4().to_string(), ts: now_ms(), event: event.into(), data }
    }

    /// `new_subscriber` frame carrying `{ "username": ... }`.
    pub fn new_subscriber(username: impl Into<String>) -> Self {
        Self::new(EVENT_NEW_SUBSCRIBER, Map::new()).with_data(FIELD_USERNAME, username.into())
    }

    /// `session:connected` greeting for a freshly attached viewer.
    #[must_use]
    pub fn connected(client_id: Uuid) -> Self {
        Self::new(EVENT_CONNECTED, Map::new()).with_data(FIELD_CLIENT_ID, client_id.to_string())
    }

    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Subscriber name carried by a `new_subscriber` frame.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        if self.event != EVENT_NEW_SUBSCRIBER {
            return None;
        }
        self.data.get(FIELD_USERNAME).and_then(Value::as_str)
    }
}

/// Encode a frame as a JSON text message.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if the payload cannot be serialized.
pub fn encode_frame(frame: &Frame) -> Result<String, CodecError> {
    Ok(serde_json::to_string(frame)?)
}

/// Decode a JSON text message into a frame.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for malformed text and
/// [`CodecError::EmptyEvent`] when the frame names no event.
pub fn decode_frame(text: &str) -> Result<Frame, CodecError> {
    let frame: Frame = serde_json::from_str(text)?;
    if frame.event.is_empty() {
        return Err(CodecError::EmptyEvent);
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
