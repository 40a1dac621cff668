use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HuntError, Result};
use crate::store::DataStore;
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// `<prefix>_<YYYY-MM-DD>.json`
pub fn backup_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Writes the current catalogue as a pretty-printed backup into `out_dir`.
///
/// The file is dated with the UTC calendar day, so backups taken around
/// midnight carry the same date wherever the export runs.
pub fn run<S: DataStore>(store: &S, prefix: &str, out_dir: &Path) -> Result<CmdResult> {
    run_on(store, prefix, out_dir, Utc::now().date_naive())
}

fn run_on<S: DataStore>(store: &S, prefix: &str, out_dir: &Path, date: NaiveDate) -> Result<CmdResult> {
    let document = store.load_catalogue()?.to_document();
    let content = serde_json::to_string_pretty(&document).map_err(HuntError::Serialization)?;

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(HuntError::Io)?;
    }
    let path = out_dir.join(backup_filename(prefix, date));
    fs::write(&path, content).map_err(HuntError::Io)?;
    info!(
        path = %path.display(),
        tasks = document.tasks.len(),
        search_items = document.search_items.len(),
        "catalogue exported"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} tasks and {} search items to {}",
        document.tasks.len(),
        document.search_items.len(),
        path.display()
    )));
    Ok(result.with_written_paths(vec![path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use serde_json::Value;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 6).unwrap()
    }

    #[test]
    fn test_backup_filename() {
        assert_eq!(
            backup_filename("Backup_Aufträge", date()),
            "Backup_Aufträge_2024-07-06.json"
        );
    }

    #[test]
    fn test_run_dates_file_in_utc() {
        let store = StoreFixture::new().with_task("1.01.01", "Q", "S").build();
        let dir = tempdir().unwrap();

        let before = Utc::now().date_naive();
        let result = run(&store, "Hunt", dir.path()).unwrap();
        let after = Utc::now().date_naive();

        let name = result.written_paths[0]
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name == backup_filename("Hunt", before) || name == backup_filename("Hunt", after));
    }

    #[test]
    fn test_writes_pretty_document_with_media() {
        let store = StoreFixture::new()
            .with_task("1.01.01", "Q", "S")
            .with_task("1.01.02", "Q2", "S2")
            .with_media("1.01.02", "clip.mp4")
            .with_item("Lamp", "Cellar")
            .build();
        let dir = tempdir().unwrap();
        let out = dir.path().join("backups");

        let result = run_on(&store, "Hunt", &out, date()).unwrap();
        let path = &result.written_paths[0];
        assert_eq!(path, &out.join("Hunt_2024-07-06.json"));

        let raw = fs::read_to_string(path).unwrap();
        assert!(raw.contains("\n  \"tasks\": ["));
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["tasks"][0]["media"], serde_json::json!([]));
        assert_eq!(value["tasks"][1]["media"][0]["type"], "video");
        assert_eq!(value["searchItems"][0]["item"], "Lamp");
    }
}
