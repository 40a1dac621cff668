//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the command layer reaches
//! persistent state. A store holds exactly two things: the current
//! [`Catalogue`] snapshot and the optional custom logo.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one data directory on disk
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── catalogue.json   # {"tasks": [...], "searchItems": [...]}
//! ├── logo.txt         # custom logo reference, absent when unset
//! └── config.json      # HuntConfig
//! ```
//!
//! `catalogue.json` uses the same shape as an exported backup. It is read
//! through the same checks as an import, so a hand-edited file with an empty
//! id or question is refused rather than loaded.
//!
//! Stores persist whole snapshots. A command computes the next snapshot with
//! the pure [`Catalogue`] operations and hands it over in a single
//! `save_catalogue` call; a store never sees a half-applied change.

use crate::catalogue::Catalogue;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Current snapshot. An empty catalogue if nothing was saved yet.
    fn load_catalogue(&self) -> Result<Catalogue>;

    /// Replace the stored snapshot.
    fn save_catalogue(&mut self, catalogue: &Catalogue) -> Result<()>;

    fn has_catalogue(&self) -> Result<bool>;

    fn load_logo(&self) -> Result<Option<String>>;

    fn save_logo(&mut self, reference: &str) -> Result<()>;

    fn clear_logo(&mut self) -> Result<()>;
}
