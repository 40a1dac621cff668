//! # Huntdesk Architecture
//!
//! Huntdesk keeps the task catalogue of a puzzle hunt: numbered tasks
//! (`C.SS.NN`) with question, solution and hints, plus a list of items the
//! players have to find. It is a library first; the `huntdesk` binary is one
//! client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes keystrokes into task identifiers              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load snapshot, apply a pure change, save once            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (ident, validate, catalogue, lookup, model)           │
//! │  - Pure functions and value types, no I/O                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Diagnostics go through `tracing`; whoever links the library
//! decides whether and where they end up.
//!
//! ## Testing Strategy
//!
//! - Core modules carry unit tests and `proptest` properties.
//! - Commands are tested against `InMemoryStore`.
//! - `FileStore` and config are tested in temp directories.
//! - `tests/` drives the binary end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`ident`]: Task number normalization and ordering
//! - [`validate`]: Backup document validation
//! - [`catalogue`]: The immutable catalogue value
//! - [`lookup`]: Keypad lookup and reserved codes
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Tasks, media, search items, backup document
//! - [`config`]: Per data directory configuration
//! - [`init`]: Data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod catalogue;
pub mod commands;
pub mod config;
pub mod error;
pub mod ident;
pub mod init;
pub mod lookup;
pub mod model;
pub mod store;
pub mod validate;

pub use catalogue::Catalogue;
pub use error::{HuntError, Result};
pub use ident::{TaskIdentifier, format_complete, format_partial};
pub use validate::{ValidationResult, validate};
