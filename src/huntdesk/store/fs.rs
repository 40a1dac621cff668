use super::DataStore;
use crate::catalogue::Catalogue;
use crate::error::{HuntError, Result};
use crate::validate::{parse_backup, validate};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CATALOGUE_FILENAME: &str = "catalogue.json";
const LOGO_FILENAME: &str = "logo.txt";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn catalogue_path(&self) -> PathBuf {
        self.root.join(CATALOGUE_FILENAME)
    }

    fn logo_path(&self) -> PathBuf {
        self.root.join(LOGO_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HuntError::Io)?;
        }
        Ok(())
    }

    /// Writes next to the target and renames over it, so readers only ever
    /// see the old or the new file.
    fn replace_file(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, content).map_err(HuntError::Io)?;
        fs::rename(&tmp, path).map_err(HuntError::Io)?;
        Ok(())
    }
}

fn corrupt(path: &Path, reason: impl Display) -> HuntError {
    HuntError::Store(format!("{} is corrupt: {}", path.display(), reason))
}

impl DataStore for FileStore {
    fn load_catalogue(&self) -> Result<Catalogue> {
        let path = self.catalogue_path();
        if !path.exists() {
            debug!(path = %path.display(), "no catalogue file, starting empty");
            return Ok(Catalogue::default());
        }
        let content = fs::read_to_string(&path).map_err(HuntError::Io)?;
        let document = parse_backup(&content).map_err(|e| corrupt(&path, e))?;
        let (tasks, search_items) = validate(&document)
            .into_result()
            .map_err(|rejection| corrupt(&path, rejection))?;
        debug!(
            tasks = tasks.len(),
            search_items = search_items.len(),
            "loaded catalogue"
        );
        Ok(Catalogue::replace_all(tasks, search_items))
    }

    fn save_catalogue(&mut self, catalogue: &Catalogue) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&catalogue.to_document()).map_err(HuntError::Serialization)?;
        self.replace_file(&self.catalogue_path(), &content)?;
        debug!(
            tasks = catalogue.tasks().len(),
            search_items = catalogue.search_items().len(),
            "saved catalogue"
        );
        Ok(())
    }

    fn has_catalogue(&self) -> Result<bool> {
        Ok(self.catalogue_path().exists())
    }

    fn load_logo(&self) -> Result<Option<String>> {
        let path = self.logo_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(HuntError::Io)?;
        let reference = content.trim();
        Ok((!reference.is_empty()).then(|| reference.to_string()))
    }

    fn save_logo(&mut self, reference: &str) -> Result<()> {
        self.replace_file(&self.logo_path(), reference)
    }

    fn clear_logo(&mut self) -> Result<()> {
        let path = self.logo_path();
        if path.exists() {
            fs::remove_file(path).map_err(HuntError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchItem;
    use tempfile::tempdir;

    #[test]
    fn test_missing_catalogue_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load_catalogue().unwrap().is_empty());
        assert!(!store.has_catalogue().unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        let catalogue = Catalogue::sample();
        store.save_catalogue(&catalogue).unwrap();

        assert!(store.has_catalogue().unwrap());
        assert_eq!(store.load_catalogue().unwrap(), catalogue);
        assert!(!dir.path().join("data").join("catalogue.tmp").exists());
    }

    #[test]
    fn test_file_uses_backup_shape() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let catalogue = Catalogue::default()
            .add_search_item(SearchItem::new("Lamp", "Cellar"))
            .unwrap();
        store.save_catalogue(&catalogue).unwrap();

        let raw = fs::read_to_string(dir.path().join(CATALOGUE_FILENAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["tasks"], serde_json::json!([]));
        assert_eq!(value["searchItems"][0]["location"], "Cellar");
    }

    #[test]
    fn test_corrupt_catalogue_is_store_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CATALOGUE_FILENAME), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(store.load_catalogue(), Err(HuntError::Store(_))));
    }

    #[test]
    fn test_catalogue_with_empty_fields_is_refused() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CATALOGUE_FILENAME),
            r#"{"tasks": [{"id": "", "question": "", "solution": "", "room": "", "tip": "", "key": ""}],
                "searchItems": [{"item": "", "location": ""}]}"#,
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        let err = store.load_catalogue().unwrap_err();
        assert!(matches!(err, HuntError::Store(_)));
        assert!(err.to_string().contains("invalid task"));
    }

    #[test]
    fn test_catalogue_goes_through_backup_checks() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CATALOGUE_FILENAME),
            "\u{feff}{\"tasks\": [], \"searchItems\": [{\"item\": \"Lamp\", \"location\": \"Cellar\"}]}",
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.load_catalogue().unwrap().search_items().len(), 1);

        fs::write(dir.path().join(CATALOGUE_FILENAME), r#"{"tasks": []}"#).unwrap();
        assert!(matches!(store.load_catalogue(), Err(HuntError::Store(_))));
    }

    #[test]
    fn test_logo_lifecycle() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.load_logo().unwrap(), None);

        store.save_logo("data:image/png;base64,AAAA").unwrap();
        assert_eq!(
            store.load_logo().unwrap().as_deref(),
            Some("data:image/png;base64,AAAA")
        );

        store.clear_logo().unwrap();
        assert_eq!(store.load_logo().unwrap(), None);
        store.clear_logo().unwrap();
    }
}
