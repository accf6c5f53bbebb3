//! # Bookshelf Architecture
//!
//! Bookshelf is a small catalog for a home library: list, add, delete, search,
//! and check books in and out, all kept in one CSV file. The library does the
//! work; the binary only wires it to a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Arguments, logger, terminal presenter, table rendering   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Navigation (nav.rs, input.rs, presenter.rs)                │
//! │  - Screen state machine driven by an outer loop             │
//! │  - Talks to the user only through the Presenter trait       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and Commands (commands/*.rs)                  │
//! │  - Pure operations returning Result<CmdResult>              │
//! │  - Pagination arithmetic in pagination.rs                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait                                          │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation reloads the catalog from the store, and every mutation
//! rewrites it in full. There is no cache and no process-wide state: the
//! [`config::LibraryConfig`] is handed to the API and navigator when they are
//! built.
//!
//! ## Testing Strategy
//!
//! Commands are tested against `InMemoryStore`; the navigator is tested by
//! replaying scripted input through `presenter::fixtures::ScriptedPresenter`.
//! `CsvStore` is tested on temporary files, and the binary end to end by
//! feeding stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: facade over the commands
//! - [`commands`]: list, add, delete, search, status toggle
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Book`, `Status`, search queries
//! - [`pagination`]: page clamping and slicing
//! - [`input`]: validated prompts
//! - [`presenter`]: the UI seam
//! - [`nav`]: screens and the session loop
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod nav;
pub mod pagination;
pub mod presenter;
pub mod store;
