//! Terminal viewer for the subscriber notebook.
//!
//! The binary (`notebook-viewer`) subscribes to the relay's push channel and
//! feeds every new subscriber into a [`notebook`] scheduler, rendering the
//! result with one of the surfaces in [`render`].

pub mod client;
pub mod demo;
pub mod render;

use notebook::driver::DriverError;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket receive failed: {0}")]
    WsRecv(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("notebook driver stopped: {0}")]
    Driver(#[from] DriverError),
    #[error("notebook task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
