//! # Configuration
//!
//! Shelf configuration is a [`confique`] struct, loaded in priority order:
//! 1. **Environment variables**: `SHELF_PAGE_SIZE`, `SHELF_API_BASE_URL`, etc.
//! 2. **Config file**: `shelf.toml` in the data directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_base_url` | Google Books `volumes` | Search endpoint |
//! | `page_size` | `20` | Results requested per search |
//! | `default_query` | `programming` | Query used when the search text is blank |
//! | `min_query_len` | `2` | Shorter (non-blank) text does not search |
//! | `request_timeout_secs` | `10` | HTTP timeout |
//! | `collections` | `["favorites", "readingList"]` | Collections, in resolution order |
//! | `search_on_start` | `true` | Run the default search when the shell opens |

use crate::commands::search::SearchSettings;
use crate::error::{Result, ShelfError};
use crate::model::{CollectionName, FAVORITES, READING_LIST};
use crate::search::google::DEFAULT_BASE_URL;
use crate::store::THEME_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Search endpoint (Google Books `volumes` or compatible).
    #[config(env = "SHELF_API_BASE_URL", default = "https://www.googleapis.com/books/v1/volumes")]
    pub api_base_url: String,

    #[config(env = "SHELF_PAGE_SIZE", default = 20)]
    pub page_size: u32,

    #[config(env = "SHELF_DEFAULT_QUERY", default = "programming")]
    pub default_query: String,

    #[config(env = "SHELF_MIN_QUERY_LEN", default = 2)]
    pub min_query_len: usize,

    #[config(env = "SHELF_REQUEST_TIMEOUT_SECS", default = 10)]
    pub request_timeout_secs: u64,

    /// Collection names, comma separated in the environment.
    #[config(
        env = "SHELF_COLLECTIONS",
        parse_env = confique::env::parse::list_by_comma,
        default = ["favorites", "readingList"]
    )]
    pub collections: Vec<String>,

    #[config(env = "SHELF_SEARCH_ON_START", default = true)]
    pub search_on_start: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 20,
            default_query: "programming".to_string(),
            min_query_len: 2,
            request_timeout_secs: 10,
            collections: vec![FAVORITES.to_string(), READING_LIST.to_string()],
            search_on_start: true,
        }
    }
}

impl ShelfConfig {
    /// Validated collection names, in configured order.
    ///
    /// Names share the store's key space, so `theme` is reserved. Keys with a
    /// leading `.` (temp files) never pass [`CollectionName::new`].
    pub fn collection_names(&self) -> Result<Vec<CollectionName>> {
        if self.collections.is_empty() {
            return Err(ShelfError::Config(
                "at least one collection must be configured".to_string(),
            ));
        }
        self.collections
            .iter()
            .map(|name| {
                let name = name.trim();
                if name == THEME_KEY {
                    return Err(ShelfError::Config(format!(
                        "collection name {:?} is reserved",
                        name
                    )));
                }
                CollectionName::new(name)
                    .map_err(|_| ShelfError::Config(format!("invalid collection name {:?}", name)))
            })
            .collect()
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            default_query: self.default_query.clone(),
            min_query_len: self.min_query_len,
            page_size: self.page_size,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
