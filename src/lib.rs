//! showlist - fetch the TVMaze show catalog and track its loading lifecycle
//!
//! This library provides the data layer behind a show list screen: a client
//! for the TVMaze `/shows` endpoint and a controller that owns the
//! three-state loading / loaded / failed status a view renders from.
//! Rendering, image loading and the refresh gesture itself stay with the
//! caller.
//!
//! # Examples
//!
//! ```no_run
//! use showlist::{FetchStatus, ShowListController, TvMazeClient};
//!
//! let controller = ShowListController::new(TvMazeClient::new());
//!
//! // The owner issues the first refresh once at startup.
//! controller.refresh();
//!
//! let shows = loop {
//!     match controller.status() {
//!         FetchStatus::Loading => {
//!             std::thread::sleep(std::time::Duration::from_millis(50));
//!         }
//!         FetchStatus::Loaded(shows) => break shows,
//!         FetchStatus::Failed(message) => panic!("load failed: {message}"),
//!     }
//! };
//!
//! for show in &shows {
//!     println!("{}", show.name);
//! }
//! ```

mod show_list;
mod show_retrieval;

pub use show_list::{FALLBACK_ERROR_MESSAGE, FetchStatus, ShowListController};
pub use show_retrieval::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, Image, Show, ShowProvider, ShowRetrievalError, TvMazeClient,
};
