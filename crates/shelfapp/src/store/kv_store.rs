use super::backend::StorageBackend;
use super::{CollectionStore, THEME_KEY};
use crate::error::{Result, ShelfError};
use crate::model::{is_valid_key, BookRecord, CollectionName, Theme};
use tracing::{debug, warn};

pub struct KvStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> KvStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw read that folds every failure into `None`.
    fn read_or_none(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, location = %self.backend.location(key), error = %e, "storage read failed");
                None
            }
        }
    }

    fn write_checked(&self, key: &str, value: &str) -> Result<()> {
        if !is_valid_key(key) {
            return Err(ShelfError::InvalidKey(key.to_string()));
        }
        self.backend.write(key, value)
    }
}

impl<B: StorageBackend> CollectionStore for KvStore<B> {
    fn load_collection(&self, name: &CollectionName) -> Vec<BookRecord> {
        let Some(raw) = self.read_or_none(name.as_str()) else {
            debug!(collection = %name, "no stored collection, starting empty");
            return Vec::new();
        };

        match serde_json::from_str::<Vec<BookRecord>>(&raw) {
            Ok(books) => books,
            Err(e) => {
                warn!(collection = %name, error = %e, "stored collection is unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save_collection(&mut self, name: &CollectionName, books: &[BookRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        self.write_checked(name.as_str(), &content)?;
        debug!(collection = %name, count = books.len(), "collection saved");
        Ok(())
    }

    fn load_theme(&self) -> Theme {
        self.read_or_none(THEME_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!(error = %e, "stored theme is unreadable, using default");
                    None
                }
            })
            .unwrap_or_default()
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.write_checked(THEME_KEY, theme.as_str())
    }
}
