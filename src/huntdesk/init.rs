//! Resolving which data directory a run works on, and wiring the API to it.
//!
//! Order of precedence:
//!
//! 1. an explicit directory (`--data-dir` or `HUNTDESK_HOME`);
//! 2. the nearest `.huntdesk/` directory in the cwd or one of its ancestors,
//!    stopping at the home directory;
//! 3. the platform data directory (via the `directories` crate).

use crate::api::HuntApi;
use crate::commands::HuntPaths;
use crate::error::{HuntError, Result};
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub const LOCAL_DIR_NAME: &str = ".huntdesk";

/// Walks up from `cwd` looking for a `.huntdesk` directory.
pub fn find_local_data_dir(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        let candidate = current.join(LOCAL_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        if home_dir.as_ref() == Some(&current) {
            return None;
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

pub fn resolve_data_dir(explicit: Option<PathBuf>, cwd: &Path) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = find_local_data_dir(cwd) {
        return Ok(dir);
    }
    ProjectDirs::from("", "", "huntdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HuntError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: PathBuf) -> HuntApi<FileStore> {
    let store = FileStore::new(data_dir.clone());
    HuntApi::new(store, HuntPaths::new(data_dir))
}
