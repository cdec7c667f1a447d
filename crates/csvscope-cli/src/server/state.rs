//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use csvscope::{Explorer, LoadedDataset, Session};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The dataset being explored. One session per server.
    pub session: Arc<RwLock<Session>>,
    /// Loader and profiler shared by all requests.
    pub explorer: Arc<Explorer>,
    /// Largest accepted upload body, in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create new application state with an empty session.
    pub fn new(explorer: Explorer, max_upload_bytes: usize) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            explorer: Arc::new(explorer),
            max_upload_bytes,
        }
    }

    /// Create application state with a dataset already loaded.
    pub fn with_dataset(explorer: Explorer, loaded: LoadedDataset, max_upload_bytes: usize) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::with_dataset(loaded))),
            explorer: Arc::new(explorer),
            max_upload_bytes,
        }
    }
}
