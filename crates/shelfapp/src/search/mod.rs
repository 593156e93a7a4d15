//! # Search
//!
//! The network side of a search. A [`BookSource`] turns a [`SearchRequest`]
//! into a [`SearchOutcome`]: either normalized records or a [`SearchFailure`].
//! Failures are values, not errors: every one of them degrades to a message
//! for the user and leaves the current results alone.
//!
//! Deciding *whether* an outcome may still be applied (most recent search
//! wins) is not this module's job; see [`crate::commands::search`].

use crate::model::BookRecord;
use async_trait::async_trait;
use serde::Serialize;

pub mod connectivity;
pub mod google;

pub use connectivity::{Connectivity, ConnectivityMonitor, StaticConnectivity};
pub use google::GoogleBooksClient;

/// One page of results for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// Failed while the connectivity signal reported offline.
    Offline,
    HttpStatus(u16),
    /// Transport or decoding failure.
    Request(String),
    /// The search worked but matched nothing.
    NoResults,
}

impl SearchFailure {
    pub fn user_message(&self) -> String {
        match self {
            SearchFailure::Offline => {
                "You are offline. Please check your internet connection.".to_string()
            }
            SearchFailure::HttpStatus(code) => {
                format!("Failed to load books: HTTP error! status: {}", code)
            }
            SearchFailure::Request(detail) => format!("Failed to load books: {}", detail),
            SearchFailure::NoResults => "No books found. Try a different search term.".to_string(),
        }
    }
}

pub type SearchOutcome = std::result::Result<Vec<BookRecord>, SearchFailure>;

#[async_trait]
pub trait BookSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> SearchOutcome;
}
