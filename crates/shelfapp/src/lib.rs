//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book-shelf library**: search a public book catalog,
//! keep favorites and a reading list, and keep every view of a book consistent
//! with those lists. The `shelf` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (shelf crate)                                          │
//! │  - Parses arguments, runs the shell loop, prints cards      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns AppState and the store                              │
//! │  - Validates collection names, dispatches to commands       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + view.rs                    │
//! │  - Toggle, membership, search bookkeeping, sort, theme      │
//! │  - Returns CmdResult with BookCard view-models              │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage (store/)             │ │  Search (search/)         │
//! │  - CollectionStore trait      │ │  - BookSource trait       │
//! │  - FileStore, InMemoryStore   │ │  - GoogleBooksClient      │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! API items → [`normalize`] → result set (memory only) → cards.
//! Toggles: id → resolved record → mutated collection → persisted → refresh signal.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Outside `search::google` (HTTP) and `store::fs_backend` (files), nothing
//! here touches the outside world. No module writes to stdout/stderr or exits
//! the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`state`]: Result set, collections, visible section, search tickets
//! - [`view`]: Book cards and membership badges
//! - [`store`]: Storage abstraction and implementations
//! - [`search`]: Book sources and connectivity
//! - [`normalize`]: Raw API item → [`model::BookRecord`]
//! - [`model`]: Core data types
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod normalize;
pub mod search;
pub mod state;
pub mod store;
pub mod view;
