//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! huntdesk operations, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and normalizes inputs: task
//! numbers arrive as raw keystrokes (`"10203"`, `"1.02.03"`, `"1-02-03"`)
//! and are turned into a [`TaskIdentifier`] here, so commands only ever see
//! typed identifiers. It does no business logic and no I/O of its own.
//!
//! `HuntApi<S: DataStore>` is generic over the storage backend:
//! `HuntApi<FileStore>` in production, `HuntApi<InMemoryStore>` in tests.

use crate::catalogue::CatalogueError;
use crate::commands::{self, CmdResult, HuntPaths};
use crate::error::{HuntError, Result};
use crate::ident::TaskIdentifier;
use crate::model::{MediaKind, SearchItem, TaskDraft, TaskEdit};
use crate::store::DataStore;
use std::path::Path;

pub struct HuntApi<S: DataStore> {
    store: S,
    paths: HuntPaths,
}

impl<S: DataStore> HuntApi<S> {
    pub fn new(store: S, paths: HuntPaths) -> Self {
        Self { store, paths }
    }

    pub fn paths(&self) -> &HuntPaths {
        &self.paths
    }

    pub fn find(&self, input: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, input)
    }

    pub fn format(&self, input: &str) -> CmdResult {
        commands::format::run(input)
    }

    pub fn list_tasks(&self, chapter: Option<u8>) -> Result<CmdResult> {
        commands::list::run(&self.store, chapter)
    }

    pub fn chapters(&self) -> Result<CmdResult> {
        let config = self.paths.config()?;
        commands::chapters::run(&self.store, &config.chapters)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    /// Creates a task. Missing question or solution are refused by the
    /// catalogue, the other fields default to empty.
    pub fn add_task(&mut self, id: &str, fields: TaskEdit) -> Result<CmdResult> {
        let draft = TaskDraft {
            id: parse_id(id)?,
            question: fields.question.unwrap_or_default(),
            solution: fields.solution.unwrap_or_default(),
            room: fields.room.unwrap_or_default(),
            tip: fields.tip.unwrap_or_default(),
            key: fields.key.unwrap_or_default(),
        };
        commands::tasks::add(&mut self.store, draft)
    }

    pub fn edit_task(&mut self, id: &str, edit: TaskEdit) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::tasks::edit(&mut self.store, &id, edit)
    }

    pub fn remove_task(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::tasks::remove(&mut self.store, &id)
    }

    pub fn list_items(&self, query: Option<&str>) -> Result<CmdResult> {
        commands::items::list(&self.store, query)
    }

    pub fn add_item(&mut self, item: &str, location: &str) -> Result<CmdResult> {
        commands::items::add(&mut self.store, SearchItem::new(item, location))
    }

    pub fn edit_item(&mut self, item: &str, location: &str) -> Result<CmdResult> {
        commands::items::edit(&mut self.store, item, location)
    }

    pub fn remove_item(&mut self, item: &str) -> Result<CmdResult> {
        commands::items::remove(&mut self.store, item)
    }

    pub fn attach_media(
        &mut self,
        id: &str,
        reference: &str,
        kind: Option<MediaKind>,
    ) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::media::add(&mut self.store, &id, reference, kind)
    }

    /// `position` is 1-based, as shown in task details. Position 0 names no
    /// media and is refused like any other out-of-range position; errors
    /// report the position as given.
    pub fn detach_media(&mut self, id: &str, position: usize) -> Result<CmdResult> {
        let id = parse_id(id)?;
        let out_of_range = |task: String| CatalogueError::MediaIndexOutOfRange {
            task,
            index: position,
        };
        let index = position
            .checked_sub(1)
            .ok_or_else(|| out_of_range(id.to_string()))?;
        commands::media::remove(&mut self.store, &id, index).map_err(|e| match e {
            HuntError::Catalogue(CatalogueError::MediaIndexOutOfRange { task, .. }) => {
                out_of_range(task).into()
            }
            other => other,
        })
    }

    pub fn export(&self, out_dir: &Path) -> Result<CmdResult> {
        let config = self.paths.config()?;
        commands::export::run(&self.store, &config.export_prefix, out_dir)
    }

    pub fn import(&mut self, file: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, file)
    }

    pub fn logo(&mut self, action: commands::logo::LogoAction) -> Result<CmdResult> {
        commands::logo::run(&mut self.store, action)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }
}

fn parse_id(input: &str) -> Result<TaskIdentifier> {
    Ok(TaskIdentifier::from_input(input)?)
}
