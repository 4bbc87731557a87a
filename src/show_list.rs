//! Show list controller.
//!
//! Coordinates the fetch lifecycle for a view layer: a three-state status
//! and a `refresh` trigger, nothing else. The view reads status snapshots
//! and renders them; it never mutates controller state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use crate::show_retrieval::{Show, ShowProvider, ShowRetrievalError};

/// Message shown when a fetch error carries no description of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load shows";

/// Outcome of the latest fetch attempt.
///
/// Lives only as long as the controller; nothing is persisted across
/// process restarts.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// A fetch is in progress and no result is available yet
    Loading,
    /// The last fetch succeeded; holds the full catalog, possibly empty
    Loaded(Vec<Show>),
    /// The last fetch failed with the given user-facing message
    Failed(String),
}

impl FetchStatus {
    /// Returns the loaded shows, or an empty slice while loading or after
    /// a failure.
    pub fn shows(&self) -> &[Show] {
        match self {
            FetchStatus::Loaded(shows) => shows,
            _ => &[],
        }
    }
}

/// Coordinates fetching the show catalog and exposes the current status.
///
/// The controller starts in `Loading` and does not fetch on its own; the
/// owning context calls [`refresh`] once at startup and again for every
/// manual refresh. Each fetch runs on a spawned thread so the caller is
/// never blocked on I/O, and each completed fetch replaces the status
/// wholesale.
///
/// [`refresh`]: ShowListController::refresh
pub struct ShowListController {
    provider: Arc<dyn ShowProvider>,
    status: Arc<Mutex<FetchStatus>>,
    in_flight: Arc<AtomicBool>,
}

impl ShowListController {
    /// Creates a controller backed by the given show source.
    ///
    /// The initial status is `Loading`; construction triggers no fetch.
    pub fn new(provider: impl ShowProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            status: Arc::new(Mutex::new(FetchStatus::Loading)),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a snapshot of the current fetch status.
    pub fn status(&self) -> FetchStatus {
        lock_status(&self.status).clone()
    }

    /// Triggers a new fetch of the show catalog.
    ///
    /// If a fetch is already in flight the call is dropped and `false` is
    /// returned; the running fetch still completes and publishes its
    /// result. Otherwise the status flips to `Loading` before this method
    /// returns, discarding any previous result, the fetch starts on a
    /// background thread and `true` is returned.
    ///
    /// There is no way to cancel a fetch once started. A later `refresh`
    /// is also the only retry mechanism after a failure.
    pub fn refresh(&self) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return false;
        }

        *lock_status(&self.status) = FetchStatus::Loading;

        let provider = Arc::clone(&self.provider);
        let status = Arc::clone(&self.status);
        let in_flight = Arc::clone(&self.in_flight);

        thread::spawn(move || {
            let outcome = match provider.fetch_shows() {
                Ok(shows) => FetchStatus::Loaded(shows),
                Err(e) => FetchStatus::Failed(error_message(&e)),
            };

            *lock_status(&status) = outcome;
            in_flight.store(false, Ordering::SeqCst);
        });

        true
    }
}

/// Locks the status mutex, recovering from poisoning.
///
/// A fetch thread only ever assigns a fully-formed `FetchStatus`, so a
/// poisoned value is still consistent and safe to keep using.
fn lock_status(status: &Mutex<FetchStatus>) -> MutexGuard<'_, FetchStatus> {
    status.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Derives the user-facing failure message from a fetch error.
///
/// Uses the error's description, falling back to a fixed generic message
/// when the underlying detail is empty.
fn error_message(error: &ShowRetrievalError) -> String {
    let detail = match error {
        ShowRetrievalError::Transport(detail) | ShowRetrievalError::Decode(detail) => detail,
    };

    if detail.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        error.to_string()
    }
}
