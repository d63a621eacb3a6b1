//! Relay configuration, read once at startup.
//!
//! `PORT` selects the listen port (default 5000). `CLIENT_URL` names the one
//! browser origin allowed to call the API and open the push channel
//! (default `http://localhost:3000`).

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid CLIENT_URL: {0}")]
    InvalidClientUrl(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Client origin without a trailing slash.
    pub client_url: String,
    pub client_origin: HeaderValue,
}

impl Config {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `PORT` is not a port number or
    /// `CLIENT_URL` cannot be used as a header value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let client_url = get("CLIENT_URL")
            .unwrap_or_else(|| DEFAULT_CLIENT_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let client_origin =
            HeaderValue::from_str(&client_url).map_err(|_| ConfigError::InvalidClientUrl(client_url.clone()))?;

        Ok(Self { port, client_url, client_origin })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            client_url: DEFAULT_CLIENT_URL.to_owned(),
            client_origin: HeaderValue::from_static(DEFAULT_CLIENT_URL),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
