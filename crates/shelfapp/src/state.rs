//! # Application State
//!
//! Everything the app knows at runtime lives in one [`AppState`], owned by the
//! API facade. There are no globals: commands receive the state (and the store)
//! as arguments.
//!
//! - The **result set** holds the latest successful search, in API order.
//! - The **collections** are loaded once at startup and then mutated only by
//!   the toggle command, which persists them through the store.
//! - The **section** records which view the user is looking at, so a client
//!   can tell whether a re-render signal concerns it.

use crate::commands::sort::SortOrder;
use crate::error::{Result, ShelfError};
use crate::model::{BookRecord, CollectionName, Theme};
use crate::store::CollectionStore;
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// A named, ordered, id-unique list of books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: CollectionName,
    books: Vec<BookRecord>,
}

impl Collection {
    pub fn empty(name: CollectionName) -> Self {
        Self {
            name,
            books: Vec::new(),
        }
    }

    /// Build from stored records, keeping the first occurrence of each id.
    pub fn from_records(name: CollectionName, records: Vec<BookRecord>) -> Self {
        let mut seen = HashSet::new();
        let total = records.len();
        let books: Vec<BookRecord> = records
            .into_iter()
            .filter(|book| seen.insert(book.id.clone()))
            .collect();
        if books.len() != total {
            warn!(
                collection = %name,
                dropped = total - books.len(),
                "stored collection had duplicate ids"
            );
        }
        Self { name, books }
    }

    pub fn name(&self) -> &CollectionName {
        &self.name
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.books.iter().any(|book| book.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id == id)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<BookRecord> {
        let position = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(position))
    }

    /// Append at the end. Returns false (and changes nothing) if the id is present.
    pub(crate) fn append(&mut self, book: BookRecord) -> bool {
        if self.contains(&book.id) {
            return false;
        }
        self.books.push(book);
        true
    }
}

/// The view currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Section {
    Results,
    Collection(CollectionName),
}

/// Identifies one issued search. Only the newest ticket may update results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct AppState {
    results: Vec<BookRecord>,
    sort: SortOrder,
    collections: Vec<Collection>,
    section: Section,
    theme: Theme,
    last_ticket: u64,
}

impl AppState {
    /// Load every configured collection and the theme from the store.
    pub fn load<S: CollectionStore>(store: &S, names: &[CollectionName]) -> Self {
        let mut seen = HashSet::new();
        let collections = names
            .iter()
            .filter(|name| seen.insert((*name).clone()))
            .map(|name| Collection::from_records(name.clone(), store.load_collection(name)))
            .collect();

        Self {
            results: Vec::new(),
            sort: SortOrder::default(),
            collections,
            section: Section::Results,
            theme: store.load_theme(),
            last_ticket: 0,
        }
    }

    pub fn results(&self) -> &[BookRecord] {
        &self.results
    }

    pub(crate) fn replace_results(&mut self, results: Vec<BookRecord>) {
        self.results = results;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub(crate) fn set_sort_order(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection_names(&self) -> Vec<CollectionName> {
        self.collections.iter().map(|c| c.name().clone()).collect()
    }

    pub fn collection(&self, name: &CollectionName) -> Result<&Collection> {
        self.collections
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ShelfError::UnknownCollection(name.to_string()))
    }

    pub(crate) fn collection_mut(&mut self, name: &CollectionName) -> Result<&mut Collection> {
        self.collections
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| ShelfError::UnknownCollection(name.to_string()))
    }

    /// Find a record by id: result set first, then collections in configured order.
    pub fn resolve(&self, id: &str) -> Option<&BookRecord> {
        self.results
            .iter()
            .find(|book| book.id == id)
            .or_else(|| self.collections.iter().find_map(|c| c.get(id)))
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn switch_section(&mut self, section: Section) -> Result<()> {
        if let Section::Collection(name) = &section {
            self.collection(name)?;
        }
        self.section = section;
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub(crate) fn issue_ticket(&mut self) -> SearchTicket {
        self.last_ticket += 1;
        SearchTicket(self.last_ticket)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.last_ticket
    }
}
