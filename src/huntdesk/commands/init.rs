use crate::catalogue::Catalogue;
use crate::commands::{CmdMessage, CmdResult, HuntPaths};
use crate::config::HuntConfig;
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use tracing::info;

/// Prepares a data directory. An existing catalogue is never overwritten;
/// otherwise the seed catalogue is written.
pub fn run<S: DataStore>(store: &mut S, paths: &HuntPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();

    if !paths.data_dir.join("config.json").exists() {
        HuntConfig::default().save(&paths.data_dir)?;
    }

    if store.has_catalogue()? {
        result.add_message(CmdMessage::info(format!(
            "Catalogue already present in {}",
            paths.data_dir.display()
        )));
        return Ok(result);
    }

    let seed = Catalogue::sample();
    store.save_catalogue(&seed)?;
    info!(dir = %paths.data_dir.display(), "data directory initialized");
    result.add_message(CmdMessage::success(format!(
        "Initialized huntdesk data at {} with {} sample tasks",
        paths.data_dir.display(),
        seed.tasks().len()
    )));
    Ok(result)
}
