//! Ordering of the displayed search results.
//!
//! The result set itself always stays in API (relevance) order, since it is
//! what toggles resolve against. Sorting only changes what the results view
//! shows, and collections are never reordered.

use super::list;
use super::CmdResult;
use crate::error::{Result, ShelfError};
use crate::model::BookRecord;
use crate::state::AppState;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Title,
    Author,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Title => "title",
            SortOrder::Author => "author",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" | "" => Ok(SortOrder::Relevance),
            "title" => Ok(SortOrder::Title),
            "author" => Ok(SortOrder::Author),
            other => Err(ShelfError::InvalidArgument(format!(
                "Unknown sort order: {} (expected relevance, title or author)",
                other
            ))),
        }
    }
}

/// A sorted copy of `books`. Stable, case-insensitive.
pub fn sorted(books: &[BookRecord], order: SortOrder) -> Vec<BookRecord> {
    let mut out = books.to_vec();
    match order {
        SortOrder::Relevance => {}
        SortOrder::Title => out.sort_by_cached_key(|b| b.title.to_lowercase()),
        SortOrder::Author => out.sort_by_cached_key(|b| b.first_author().to_lowercase()),
    }
    out
}

/// Select the order for the results view and return the re-ordered cards.
pub fn run(state: &mut AppState, order: SortOrder) -> CmdResult {
    state.set_sort_order(order);
    list::results(state)
}
