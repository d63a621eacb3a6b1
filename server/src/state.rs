//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the startup configuration and the registry of connected viewers.
//! Each viewer owns a bounded channel; the relay pushes already-encoded
//! frames into it and the viewer's websocket task forwards them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::config::Config;

/// Encoded frame text, shared between every viewer it is sent to.
pub type FrameText = Arc<str>;

/// Outgoing frames buffered per viewer before the relay starts dropping.
pub const VIEWER_CHANNEL_CAPACITY: usize = 256;

/// Shared application state. Clone is required by Axum; every field is
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Connected viewers: `client_id` -> sender for outgoing frames.
    pub viewers: Arc<RwLock<HashMap<Uuid, mpsc::Sender<FrameText>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config), viewers: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub async fn viewer_count(&self) -> usize {
        self.viewers.read().await.len()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Config::default())
    }

    /// Register a viewer channel by hand and return its receiver.
    pub async fn attach_viewer(state: &AppState, capacity: usize) -> (Uuid, mpsc::Receiver<FrameText>) {
        let (tx, rx) = mpsc::channel(capacity);
        let id = Uuid::new_v4();
        state.viewers.write().await.insert(id, tx);
        (id, rx)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
