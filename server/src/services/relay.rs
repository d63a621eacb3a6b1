//! Relay service: viewer registry and `new_subscriber` fan-out.
//!
//! DESIGN
//! ======
//! Every accepted notification is validated, encoded once, and pushed to
//! each registered viewer with `try_send`. Delivery is fire-and-forget: a
//! viewer whose channel is full misses the frame, a viewer whose channel is
//! closed is pruned. There is no replay for viewers that connect later.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures map to 400 responses, encoding failures to 500 (see
//! `routes::webhook`). A missing viewer is never an error.

use std::sync::Arc;

use frames::{CodecError, Frame};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::state::{AppState, FrameText, VIEWER_CHANNEL_CAPACITY};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("frame encoding failed: {0}")]
    Encode(#[from] CodecError),
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Register a new viewer and return its id and frame receiver.
pub async fn register(state: &AppState) -> (Uuid, mpsc::Receiver<FrameText>) {
    let client_id = Uuid::new_v4();
    let (tx, rx) = mpsc::channel(VIEWER_CHANNEL_CAPACITY);
    let mut viewers = state.viewers.write().await;
    viewers.insert(client_id, tx);
    debug!(%client_id, viewers = viewers.len(), "relay: viewer registered");
    (client_id, rx)
}

pub async fn unregister(state: &AppState, client_id: Uuid) {
    let mut viewers = state.viewers.write().await;
    if viewers.remove(&client_id).is_some() {
        debug!(%client_id, viewers = viewers.len(), "relay: viewer removed");
    }
}

// =============================================================================
// BROADCAST
// =============================================================================

/// Broadcast a `new_subscriber` frame for `username` to every connected
/// viewer. Returns the number of viewers the frame was queued for.
///
/// # Errors
///
/// [`RelayError::MissingUsername`] if `username` is empty, or
/// [`RelayError::Encode`] if the frame cannot be encoded.
pub async fn notify(state: &AppState, username: &str) -> Result<usize, RelayError> {
    if username.is_empty() {
        return Err(RelayError::MissingUsername);
    }

    let text: FrameText = Arc::from(frames::encode_frame(&Frame::new_subscriber(username))?);

    let mut reached = 0;
    let mut closed = Vec::new();
    {
        let viewers = state.viewers.read().await;
        for (client_id, tx) in viewers.iter() {
            match tx.try_send(Arc::clone(&text)) {
                Ok(()) => reached += 1,
                Err(TrySendError::Full(_)) => warn!(%client_id, "relay: viewer channel full, frame dropped"),
                Err(TrySendError::Closed(_)) => closed.push(*client_id),
            }
        }
    }

    if !closed.is_empty() {
        let mut viewers = state.viewers.write().await;
        for client_id in &closed {
            viewers.remove(client_id);
        }
        debug!(pruned = closed.len(), "relay: pruned closed viewers");
    }

    info!(%username, reached, "relay: new_subscriber broadcast");
    Ok(reached)
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
