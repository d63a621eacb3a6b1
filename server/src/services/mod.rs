//! Domain services used by the HTTP and websocket routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the relay logic so route handlers stay focused on
//! protocol translation.

pub mod relay;
