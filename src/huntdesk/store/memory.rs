use super::DataStore;
use crate::catalogue::Catalogue;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalogue: Option<Catalogue>,
    logo: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalogue(catalogue: Catalogue) -> Self {
        Self {
            catalogue: Some(catalogue),
            ..Self::default()
        }
    }

    /// Number of `save_catalogue` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_catalogue(&self) -> Result<Catalogue> {
        Ok(self.catalogue.clone().unwrap_or_default())
    }

    fn save_catalogue(&mut self, catalogue: &Catalogue) -> Result<()> {
        self.catalogue = Some(catalogue.clone());
        self.saves += 1;
        Ok(())
    }

    fn has_catalogue(&self) -> Result<bool> {
        Ok(self.catalogue.is_some())
    }

    fn load_logo(&self) -> Result<Option<String>> {
        Ok(self.logo.clone())
    }

    fn save_logo(&mut self, reference: &str) -> Result<()> {
        self.logo = Some(reference.to_string());
        Ok(())
    }

    fn clear_logo(&mut self) -> Result<()> {
        self.logo = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{MediaKind, MediaRef, SearchItem, TaskDraft};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        catalogue: Catalogue,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                catalogue: Catalogue::default(),
            }
        }

        pub fn with_task(mut self, id: &str, question: &str, solution: &str) -> Self {
            let draft = TaskDraft::new(id.parse().unwrap(), question, solution);
            self.catalogue = self.catalogue.add_task(draft).unwrap();
            self
        }

        pub fn with_media(mut self, id: &str, reference: &str) -> Self {
            let media = MediaRef::new(MediaKind::infer(reference), reference);
            self.catalogue = self
                .catalogue
                .attach_media(&id.parse().unwrap(), media)
                .unwrap();
            self
        }

        pub fn with_item(mut self, item: &str, location: &str) -> Self {
            self.catalogue = self
                .catalogue
                .add_search_item(SearchItem::new(item, location))
                .unwrap();
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            self.store.save_catalogue(&self.catalogue).unwrap();
            self.store.saves = 0;
            self.store
        }
    }
}
