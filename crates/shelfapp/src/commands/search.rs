//! # Search Commands
//!
//! A search is split in two so the network call can happen anywhere (a spawned
//! task, a blocking call in a one-shot command) without holding the state:
//!
//! 1. [`begin`] turns user input into a request and issues a ticket.
//! 2. The caller runs the request against a [`BookSource`](crate::search::BookSource).
//! 3. [`finish`] applies the outcome, but only if its ticket is still the
//!    newest one. Anything older was superseded while in flight and is dropped.
//!
//! On failure the previous results stay in place and the user gets a message.

use super::{list, CmdMessage, CmdResult};
use crate::search::{SearchOutcome, SearchRequest};
use crate::state::{AppState, SearchTicket, Section};
use tracing::debug;

pub const DEFAULT_QUERY: &str = "programming";
pub const MIN_QUERY_LEN: usize = 2;
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub default_query: String,
    pub min_query_len: usize,
    pub page_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY.to_string(),
            min_query_len: MIN_QUERY_LEN,
            page_size: PAGE_SIZE,
        }
    }
}

/// What started a search. Only typed text is held to the minimum length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchTrigger {
    #[default]
    Typed,
    CategoryChange,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub text: String,
    pub category: Option<String>,
    pub trigger: SearchTrigger,
}

impl SearchInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            trigger: SearchTrigger::Typed,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn triggered_by(mut self, trigger: SearchTrigger) -> Self {
        self.trigger = trigger;
        self
    }
}

/// The request for `input`, or `None` when typed text is too short to search.
pub fn request_for(settings: &SearchSettings, input: &SearchInput) -> Option<SearchRequest> {
    let text = input.text.trim();
    let mut query = if text.is_empty() {
        settings.default_query.clone()
    } else if input.trigger == SearchTrigger::Typed
        && text.chars().count() < settings.min_query_len
    {
        return None;
    } else {
        text.to_string()
    };

    if let Some(category) = input.category.as_deref().map(str::trim) {
        if !category.is_empty() {
            query.push_str(" subject:");
            query.push_str(category);
        }
    }

    Some(SearchRequest {
        query,
        max_results: settings.page_size,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub request: SearchRequest,
}

/// Issue a ticket for `input`. Too-short input issues nothing, so an
/// in-flight search stays current.
pub fn begin(
    state: &mut AppState,
    settings: &SearchSettings,
    input: &SearchInput,
) -> Option<PendingSearch> {
    let request = request_for(settings, input)?;
    let ticket = state.issue_ticket();
    debug!(ticket = ticket.value(), query = %request.query, "search issued");
    Some(PendingSearch { ticket, request })
}

/// Apply an outcome. Returns `None` when the ticket has been superseded.
pub fn finish(
    state: &mut AppState,
    ticket: SearchTicket,
    outcome: SearchOutcome,
) -> Option<CmdResult> {
    if !state.is_current(ticket) {
        debug!(ticket = ticket.value(), "discarding stale search outcome");
        return None;
    }

    let result = match outcome {
        Ok(books) => {
            state.replace_results(books);
            list::results(state).with_refresh(vec![Section::Results])
        }
        Err(failure) => {
            debug!(?failure, "search failed");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(failure.user_message()));
            result
        }
    };
    Some(result)
}

pub fn too_short_message(settings: &SearchSettings) -> CmdMessage {
    CmdMessage::info(format!(
        "Enter at least {} characters to search.",
        settings.min_query_len
    ))
}
