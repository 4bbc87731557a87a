//! Data structures and traits for retrieving the TVMaze show catalog.
//!
//! This module provides the show and image records returned by the catalog
//! endpoint, the error taxonomy for a fetch, and the trait implemented by
//! show sources.

mod tvmaze;

pub use tvmaze::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TvMazeClient};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching the show catalog.
#[derive(Debug, Error)]
pub enum ShowRetrievalError {
    /// The network round-trip could not be completed
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be parsed into the expected shape
    #[error("Failed to parse API response: {0}")]
    Decode(String),
}

/// Artwork URLs for a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// URL of the medium-sized artwork
    pub medium: String,
    /// URL of the original-sized artwork
    pub original: String,
}

/// A single TV series record from the catalog.
///
/// Mirrors the JSON shape of the TVMaze `/shows` endpoint. Fields the API
/// may omit are optional, and unknown fields in a response are ignored so
/// upstream additions never break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Numeric identifier, unique within one response
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Artwork, absent when the API has none
    pub image: Option<Image>,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
}

impl Show {
    /// Returns the summary converted to plain text, if one is present.
    ///
    /// The stored summary keeps the HTML markup exactly as the API returned
    /// it; this accessor is a convenience for view layers that want the
    /// tags stripped before display.
    pub fn summary_text(&self) -> Option<String> {
        self.summary
            .as_ref()
            .map(|s| nanohtml2text::html2text(s).trim().to_string())
    }
}

/// Trait for sources that can fetch the show catalog.
///
/// Implementors retrieve the full list of shows from a catalog backend.
/// Keeping the controller behind this seam lets tests drive it with a stub
/// source and keeps the HTTP transport swappable.
pub trait ShowProvider: Send + Sync {
    /// Fetches the complete show catalog.
    ///
    /// # Returns
    ///
    /// The shows in the order the backend returned them, or a
    /// `ShowRetrievalError` when the request or parsing fails.
    fn fetch_shows(&self) -> Result<Vec<Show>, ShowRetrievalError>;
}
