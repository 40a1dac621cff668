use crate::config::HuntConfig;
use crate::error::Result;
use crate::lookup::LookupOutcome;
use crate::model::{SearchItem, Task};
use std::path::PathBuf;

pub mod chapters;
pub mod config;
pub mod export;
pub mod format;
pub mod find;
pub mod import;
pub mod init;
pub mod items;
pub mod list;
pub mod logo;
pub mod media;
pub mod search;
pub mod tasks;

#[derive(Debug, Clone)]
pub struct HuntPaths {
    pub data_dir: PathBuf,
}

impl HuntPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn config(&self) -> Result<HuntConfig> {
        HuntConfig::load(&self.data_dir)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

/// One row of the chapter overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub chapter: u8,
    pub task_count: usize,
    /// Id chapter navigation jumps to, if the chapter has any task.
    pub first_task: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub tasks: Vec<Task>,
    pub search_items: Vec<SearchItem>,
    pub lookup: Option<LookupOutcome>,
    pub chapters: Vec<ChapterSummary>,
    pub written_paths: Vec<PathBuf>,
    pub config: Option<HuntConfig>,
    pub logo: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_search_items(mut self, items: Vec<SearchItem>) -> Self {
        self.search_items = items;
        self
    }

    pub fn with_lookup(mut self, outcome: LookupOutcome) -> Self {
        self.lookup = Some(outcome);
        self
    }

    pub fn with_chapters(mut self, chapters: Vec<ChapterSummary>) -> Self {
        self.chapters = chapters;
        self
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }

    pub fn with_config(mut self, config: HuntConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_logo(mut self, logo: Option<String>) -> Self {
        self.logo = logo;
        self
    }
}
