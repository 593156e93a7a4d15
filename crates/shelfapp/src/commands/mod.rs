//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each command lives in its
//! own submodule and implements plain Rust functions over [`AppState`] and a
//! [`CollectionStore`](crate::store::CollectionStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Network I/O**: searches receive their outcome from a [`BookSource`](crate::search::BookSource)
//!   driven by the caller
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `cards`: view-models of the books to display
//! - `messages`: structured messages with levels (info, success, warning, error)
//! - `refresh`: views that must re-render because something they show changed
//! - `toggle`: what a toggle did, when the command was a toggle
//!
//! ## Command Modules
//!
//! - [`membership`]: Is a book in a collection?
//! - [`toggle`]: Add or remove a book from a collection
//! - [`list`]: Cards for the results view or a collection view
//! - [`search`]: Start and finish searches, most recent wins
//! - [`sort`]: Order the displayed results
//! - [`theme`]: Light/dark preference
//!
//! [`AppState`]: crate::state::AppState

use crate::state::Section;
use crate::view::BookCard;
use serde::Serialize;

pub mod list;
pub mod membership;
pub mod search;
pub mod sort;
pub mod theme;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The id was found nowhere; nothing changed.
    Unresolved,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub cards: Vec<BookCard>,
    pub messages: Vec<CmdMessage>,
    pub refresh: Vec<Section>,
    pub toggle: Option<ToggleOutcome>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_cards(mut self, cards: Vec<BookCard>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_refresh(mut self, refresh: Vec<Section>) -> Self {
        self.refresh = refresh;
        self
    }

    /// Whether a client showing `section` has to redraw it.
    pub fn needs_refresh(&self, section: &Section) -> bool {
        self.refresh.contains(section)
    }
}
