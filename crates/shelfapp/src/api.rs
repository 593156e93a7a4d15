//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all shelf operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`AppState`] and the store; nothing else holds them
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (collection names given as strings are validated here)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Searches
//!
//! [`ShelfApi::search`] runs a whole search against a [`BookSource`]. Clients
//! that keep working while a search is in flight (the interactive shell) use
//! [`ShelfApi::begin_search`] and [`ShelfApi::finish_search`] instead and run
//! the request themselves; outcomes of superseded searches are dropped.
//!
//! ## Generic Over CollectionStore
//!
//! `ShelfApi<S: CollectionStore>`:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands::search::{self, PendingSearch, SearchInput, SearchSettings};
use crate::commands::{self, sort::SortOrder, CmdResult};
use crate::error::Result;
use crate::model::{CollectionName, Theme};
use crate::search::{BookSource, SearchOutcome};
use crate::state::{AppState, SearchTicket, Section};
use crate::store::CollectionStore;

pub struct ShelfApi<S: CollectionStore> {
    store: S,
    state: AppState,
    settings: SearchSettings,
}

impl<S: CollectionStore> ShelfApi<S> {
    /// Load `collections` (in resolution order) and the theme from `store`.
    pub fn new(store: S, collections: &[CollectionName], settings: SearchSettings) -> Self {
        let state = AppState::load(&store, collections);
        Self {
            store,
            state,
            settings,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn begin_search(&mut self, input: &SearchInput) -> Option<PendingSearch> {
        search::begin(&mut self.state, &self.settings, input)
    }

    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        outcome: SearchOutcome,
    ) -> Option<CmdResult> {
        search::finish(&mut self.state, ticket, outcome)
    }

    pub async fn search(&mut self, source: &dyn BookSource, input: &SearchInput) -> CmdResult {
        let Some(pending) = self.begin_search(input) else {
            let mut result = CmdResult::default();
            result.add_message(search::too_short_message(&self.settings));
            return result;
        };
        let outcome = source.search(&pending.request).await;
        // Nothing else can issue a ticket while this borrow is held.
        self.finish_search(pending.ticket, outcome)
            .unwrap_or_default()
    }

    pub fn sort(&mut self, order: SortOrder) -> CmdResult {
        commands::sort::run(&mut self.state, order)
    }

    pub fn toggle(&mut self, collection: &str, id: &str) -> Result<CmdResult> {
        let name = self.collection_name(collection)?;
        commands::toggle::run(&mut self.store, &mut self.state, &name, id)
    }

    pub fn is_member(&self, collection: &str, id: &str) -> Result<bool> {
        let name = self.collection_name(collection)?;
        commands::membership::is_member(&self.state, &name, id)
    }

    pub fn list(&self, section: &Section) -> Result<CmdResult> {
        commands::list::run(&self.state, section)
    }

    pub fn list_collection(&self, collection: &str) -> Result<CmdResult> {
        let name = self.collection_name(collection)?;
        self.list(&Section::Collection(name))
    }

    /// Make `section` the visible one and return its cards.
    pub fn switch_section(&mut self, section: Section) -> Result<CmdResult> {
        self.state.switch_section(section)?;
        self.list(self.state.section())
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn show_theme(&self) -> CmdResult {
        commands::theme::show(&self.state)
    }

    pub fn toggle_theme(&mut self) -> CmdResult {
        commands::theme::toggle(&mut self.store, &mut self.state)
    }

    pub fn collection_names(&self) -> Vec<CollectionName> {
        self.state.collection_names()
    }

    /// Parse and check that the collection is configured.
    fn collection_name(&self, raw: &str) -> Result<CollectionName> {
        let name = CollectionName::new(raw)?;
        self.state.collection(&name)?;
        Ok(name)
    }
}
