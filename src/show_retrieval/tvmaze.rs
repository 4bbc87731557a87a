//! TVMaze catalog client.
//!
//! Fetches the show list from https://api.tvmaze.com using the `/shows`
//! endpoint.

use std::time::Duration;

use super::{Show, ShowProvider, ShowRetrievalError};

/// Base address of the public TVMaze API.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Request timeout applied to the HTTP client.
///
/// reqwest enforces no timeout of its own, so without this a stalled
/// connection would hang a fetch indefinitely. Override it via
/// [`TvMazeClient::with_config`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the TVMaze show catalog.
///
/// Performs exactly one `GET {base_url}/shows` per [`fetch_shows`] call and
/// holds no state between calls beyond its configuration. No retries, no
/// caching.
///
/// [`fetch_shows`]: ShowProvider::fetch_shows
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a client for the public TVMaze API with the default timeout.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit base address and request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base address of the catalog API; a trailing slash is stripped
    /// * `timeout` - Total timeout for one request round-trip
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized, the same
    /// condition under which `reqwest::blocking::Client::new` panics.
    pub fn with_config(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowProvider for TvMazeClient {
    fn fetch_shows(&self) -> Result<Vec<Show>, ShowRetrievalError> {
        let url = format!("{}/shows", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ShowRetrievalError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ShowRetrievalError::Transport(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| ShowRetrievalError::Decode(e.to_string()))
    }
}
