//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments opens the interactive shell, which keeps
//! a result set alive between commands and runs searches in the background.
//!
//! ## One-Shot Commands
//!
//! Every one-shot command starts from an empty result set: only the persisted
//! collections are loaded. `toggle`, `fav` and `read` therefore resolve ids
//! from the collections, unless `--query` runs a search first.
//!
//! ## Output
//!
//! `--output json` prints the command result as JSON on stdout instead of
//! colored text. Logs always go to stderr (`-v` or `RUST_LOG` to see them).

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
