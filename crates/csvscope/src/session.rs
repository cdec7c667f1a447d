//! Session-scoped state: the dataset the user is currently exploring.

use tracing::warn;

use crate::error::Result;
use crate::explorer::{Explorer, LoadedDataset};
use crate::input::SourceMetadata;

/// Holds at most one loaded dataset. A failed load leaves the current
/// dataset untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<LoadedDataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a dataset already loaded.
    pub fn with_dataset(loaded: LoadedDataset) -> Self {
        Self {
            current: Some(loaded),
        }
    }

    /// Replace the current dataset with a new upload.
    pub fn load(
        &mut self,
        explorer: &Explorer,
        name: &str,
        bytes: &[u8],
    ) -> Result<&SourceMetadata> {
        match explorer.load_bytes(name, bytes) {
            Ok(loaded) => {
                let loaded = self.current.insert(loaded);
                Ok(&loaded.source)
            }
            Err(e) => {
                warn!(file = name, error = %e, "upload rejected, keeping current dataset");
                Err(e)
            }
        }
    }

    /// Swap in a dataset that was loaded elsewhere.
    pub fn replace(&mut self, loaded: LoadedDataset) -> &SourceMetadata {
        &self.current.insert(loaded).source
    }

    pub fn current(&self) -> Option<&LoadedDataset> {
        self.current.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the current dataset.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
