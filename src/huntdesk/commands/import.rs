use crate::catalogue::Catalogue;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HuntError, Result};
use crate::store::DataStore;
use crate::validate::{ValidationResult, parse_backup, validate};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Replaces the whole catalogue with the contents of a backup file.
///
/// All or nothing: the store is written once, and only after the file parsed
/// and every entry passed validation.
pub fn run<S: DataStore>(store: &mut S, file: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(file).map_err(HuntError::Io)?;
    let mut result = import_text(store, &text)?;
    result.add_message(CmdMessage::success(format!(
        "Imported {} tasks and {} search items from {}",
        result.tasks.len(),
        result.search_items.len(),
        file.display()
    )));
    Ok(result)
}

fn import_text<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let document = parse_backup(text).map_err(HuntError::ImportParse)?;

    let (tasks, search_items) = match validate(&document) {
        ValidationResult::Accepted {
            tasks,
            search_items,
        } => (tasks, search_items),
        ValidationResult::Rejected(rejection) => {
            warn!(%rejection, "backup rejected");
            return Err(HuntError::ImportRejected(rejection));
        }
    };

    let next = Catalogue::replace_all(tasks, search_items);
    store.save_catalogue(&next)?;
    info!(
        tasks = next.tasks().len(),
        search_items = next.search_items().len(),
        "catalogue replaced from backup"
    );

    let mut result = CmdResult::default()
        .with_tasks(next.tasks().to_vec())
        .with_search_items(next.search_items().to_vec());
    for id in next.duplicate_task_ids() {
        warn!(%id, "duplicate task id in backup");
        result.add_message(CmdMessage::warning(format!(
            "Task id {} appears more than once",
            id
        )));
    }
    for item in next.duplicate_item_keys() {
        warn!(%item, "duplicate search item in backup");
        result.add_message(CmdMessage::warning(format!(
            "Search item \"{}\" appears more than once",
            item
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::validate::Rejection;
    use tempfile::tempdir;

    const VALID: &str = r#"{
        "tasks": [
            {"id": "2.01.01", "question": "Q", "solution": "S", "room": "", "tip": "", "key": "",
             "media": [{"type": "image", "url": "door.png"}]},
            {"id": "1.01.01", "question": "Q", "solution": "S", "room": "", "tip": "", "key": ""}
        ],
        "searchItems": [{"item": "Lamp", "location": "Cellar"}]
    }"#;

    fn seeded() -> InMemoryStore {
        StoreFixture::new().with_task("9.09.09", "Old", "Old").build()
    }

    #[test]
    fn test_replaces_catalogue_in_given_order() {
        let mut store = seeded();
        import_text(&mut store, VALID).unwrap();

        let catalogue = store.load_catalogue().unwrap();
        let ids: Vec<_> = catalogue.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2.01.01", "1.01.01"]);
        assert_eq!(catalogue.tasks()[0].media.len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_parse_failure_is_distinct_and_leaves_store() {
        let mut store = seeded();
        let err = import_text(&mut store, "{\"tasks\": [").unwrap_err();
        assert!(matches!(err, HuntError::ImportParse(_)));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load_catalogue().unwrap().tasks()[0].id, "9.09.09");
    }

    #[test]
    fn test_rejected_document_leaves_store() {
        let mut store = seeded();
        let bad = VALID.replace("\"url\": \"door.png\"", "\"url\": \"\"");
        let err = import_text(&mut store, &bad).unwrap_err();
        assert!(matches!(
            err,
            HuntError::ImportRejected(Rejection::MalformedMedia { .. })
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_leading_byte_order_mark_is_accepted() {
        let mut store = seeded();
        let result = import_text(&mut store, &format!("\u{feff}{}", VALID)).unwrap();
        assert_eq!(result.tasks.len(), 2);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_missing_collections() {
        let mut store = seeded();
        let err = import_text(&mut store, r#"{"tasks": []}"#).unwrap_err();
        assert!(matches!(
            err,
            HuntError::ImportRejected(Rejection::MissingCollections)
        ));
    }

    #[test]
    fn test_empty_collections_clear_catalogue() {
        let mut store = seeded();
        import_text(&mut store, r#"{"tasks": [], "searchItems": []}"#).unwrap();
        assert!(store.load_catalogue().unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_and_reported() {
        let mut store = InMemoryStore::new();
        let doc = r#"{
            "tasks": [
                {"id": "1.01.01", "question": "A", "solution": "S", "room": "", "tip": "", "key": ""},
                {"id": "1.01.01", "question": "B", "solution": "S", "room": "", "tip": "", "key": ""}
            ],
            "searchItems": [
                {"item": "Lamp", "location": "Cellar"},
                {"item": "Lamp", "location": "Attic"}
            ]
        }"#;
        let result = import_text(&mut store, doc).unwrap();

        assert_eq!(store.load_catalogue().unwrap().tasks().len(), 2);
        let warnings: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_run_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("backup.json");
        fs::write(&path, VALID).unwrap();

        let mut store = InMemoryStore::new();
        let result = run(&mut store, &path).unwrap();
        assert_eq!(result.tasks.len(), 2);
        assert!(result.messages.last().unwrap().content.starts_with("Imported 2 tasks"));

        let missing = run(&mut store, &dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, HuntError::Io(_)));
    }
}
