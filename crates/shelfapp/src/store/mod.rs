//! # Storage Layer
//!
//! This module defines the storage abstraction for shelf. The [`CollectionStore`]
//! trait is the only way the rest of the crate reads or writes persisted state.
//!
//! ## Split
//!
//! - [`backend::StorageBackend`]: raw key → string I/O.
//! - [`kv_store::KvStore`]: serialization and fallbacks on top of any backend.
//!
//! ## Keys
//!
//! | Key | Content |
//! |-----|---------|
//! | `favorites` | JSON array of book records |
//! | `readingList` | JSON array of book records |
//! | `theme` | `light` or `dark` |
//!
//! Every configured collection gets its own key, named after the collection.
//! Collections are always written whole; there is no incremental update.
//!
//! ## Failure Policy
//!
//! Loading never fails: a missing, unreadable or corrupt value loads as an empty
//! collection (or the default theme) and is logged. Saving returns `Err`, and
//! callers keep their in-memory state as the source of truth.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per key in the data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── shelf.toml      # Configuration
//! ├── favorites       # Collection
//! ├── readingList     # Collection
//! └── theme           # Theme preference
//! ```

use crate::error::Result;
use crate::model::{BookRecord, CollectionName, Theme};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod kv_store;
pub mod mem_backend;
pub mod memory;

pub const THEME_KEY: &str = "theme";

/// Abstract interface for persisted collections and preferences.
pub trait CollectionStore {
    /// Load a collection, defaulting to empty when absent or unreadable.
    fn load_collection(&self, name: &CollectionName) -> Vec<BookRecord>;

    /// Persist the full sequence, replacing what was stored before.
    fn save_collection(&mut self, name: &CollectionName, books: &[BookRecord]) -> Result<()>;

    /// Load the theme preference, defaulting to light.
    fn load_theme(&self) -> Theme;

    /// Persist the theme preference.
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}
