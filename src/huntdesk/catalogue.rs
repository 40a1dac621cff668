//! # Catalogue
//!
//! The live set of tasks and search items, as a plain value.
//!
//! Every mutation borrows the current snapshot and returns a fresh
//! [`Catalogue`] (or a [`CatalogueError`]) and leaves the receiver
//! untouched. Persisting the new snapshot is up to the caller; see
//! `commands/` for that side.
//!
//! Uniqueness of task ids and item names is enforced here, on the editor
//! path. [`Catalogue::replace_all`] is the import path and takes whatever the
//! validator accepted, duplicates included.

use crate::ident::{TaskIdentifier, catalogue_order};
use crate::model::{BackupDocument, MediaRef, SearchItem, Task, TaskDraft, TaskEdit};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Task {0} already exists")]
    DuplicateTask(String),

    #[error("Search item \"{0}\" already exists")]
    DuplicateItem(String),

    #[error("Task {0} not found")]
    TaskNotFound(String),

    #[error("Search item \"{0}\" not found")]
    ItemNotFound(String),

    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("Task {task} has no media #{index}")]
    MediaIndexOutOfRange { task: String, index: usize },
}

type Outcome = Result<Catalogue, CatalogueError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    tasks: Vec<Task>,
    search_items: Vec<SearchItem>,
}

fn require(field: &'static str, value: &str) -> Result<(), CatalogueError> {
    if value.is_empty() {
        Err(CatalogueError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn duplicates<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut found = Vec::new();
    for key in keys {
        if !seen.insert(key) && reported.insert(key) {
            found.push(key.to_string());
        }
    }
    found
}

/// Stable sort into listing order, see [`catalogue_order`].
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| catalogue_order(&a.id, &b.id));
}

impl Catalogue {
    pub fn new(tasks: Vec<Task>, search_items: Vec<SearchItem>) -> Self {
        Self {
            tasks,
            search_items,
        }
    }

    /// The catalogue a fresh installation starts with.
    pub fn sample() -> Self {
        let task = |id: &str, question: &str, solution: &str| Task {
            id: id.to_string(),
            question: question.to_string(),
            solution: solution.to_string(),
            room: "-".to_string(),
            tip: "Suche neben einer Tür".to_string(),
            key: "-".to_string(),
            media: Vec::new(),
        };
        Self::new(
            vec![
                task("1.01.01", "Wie lautet der Name des Hotels?", "Hotel Hügelton"),
                task("1.01.02", "Wie heißt das Schmuckgeschäft?", "Glitzerglanz Juwelen"),
            ],
            vec![
                SearchItem::new("Flauschiges Handtuch", "Gasthaus zum korrupten Hirsch"),
                SearchItem::new("Goldene Gurke", "Gasthaus zum korrupten Hirsch"),
            ],
        )
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn search_items(&self) -> &[SearchItem] {
        &self.search_items
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.search_items.is_empty()
    }

    // --- Queries ---

    /// First task stored under `id`.
    pub fn find_task(&self, id: &TaskIdentifier) -> Option<&Task> {
        let key = id.to_string();
        self.tasks.iter().find(|t| t.id == key)
    }

    pub fn find_search_item(&self, item: &str) -> Option<&SearchItem> {
        self.search_items.iter().find(|i| i.item == item)
    }

    /// All tasks in chapter/section/number order.
    pub fn sorted_tasks(&self) -> Vec<Task> {
        let mut sorted = self.tasks.clone();
        sort_tasks(&mut sorted);
        sorted
    }

    pub fn tasks_in_chapter(&self, chapter: u8) -> Vec<Task> {
        self.sorted_tasks()
            .into_iter()
            .filter(|t| t.in_chapter(chapter))
            .collect()
    }

    /// Where chapter navigation jumps to: the first task in stored order
    /// whose id starts with the chapter.
    pub fn first_task_in_chapter(&self, chapter: u8) -> Option<&Task> {
        self.tasks.iter().find(|t| t.in_chapter(chapter))
    }

    /// Editor filter: id substring or case-insensitive question substring.
    pub fn filter_tasks(&self, query: &str) -> Vec<Task> {
        let needle = query.to_lowercase();
        self.sorted_tasks()
            .into_iter()
            .filter(|t| t.id.contains(query) || t.question.to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive match on item name or location, in stored order.
    pub fn filter_search_items(&self, query: &str) -> Vec<SearchItem> {
        let needle = query.to_lowercase();
        self.search_items
            .iter()
            .filter(|i| {
                i.item.to_lowercase().contains(&needle)
                    || i.location.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn duplicate_task_ids(&self) -> Vec<String> {
        duplicates(self.tasks.iter().map(|t| t.id.as_str()))
    }

    pub fn duplicate_item_keys(&self) -> Vec<String> {
        duplicates(self.search_items.iter().map(|i| i.item.as_str()))
    }

    // --- Task mutations ---

    pub fn add_task(&self, draft: TaskDraft) -> Outcome {
        require("question", &draft.question)?;
        require("solution", &draft.solution)?;
        if self.find_task(&draft.id).is_some() {
            return Err(CatalogueError::DuplicateTask(draft.id.to_string()));
        }
        let mut next = self.clone();
        next.tasks.push(draft.into_task());
        Ok(next)
    }

    pub fn edit_task(&self, id: &TaskIdentifier, edit: TaskEdit) -> Outcome {
        self.with_task(id, |task| {
            edit.apply(task);
            require("question", &task.question)?;
            require("solution", &task.solution)
        })
    }

    pub fn remove_task(&self, id: &TaskIdentifier) -> Outcome {
        let key = id.to_string();
        if !self.tasks.iter().any(|t| t.id == key) {
            return Err(CatalogueError::TaskNotFound(key));
        }
        let mut next = self.clone();
        next.tasks.retain(|t| t.id != key);
        Ok(next)
    }

    pub fn attach_media(&self, id: &TaskIdentifier, media: MediaRef) -> Outcome {
        require("url", &media.reference)?;
        self.with_task(id, |task| {
            task.media.push(media.clone());
            Ok(())
        })
    }

    pub fn detach_media(&self, id: &TaskIdentifier, index: usize) -> Outcome {
        self.with_task(id, |task| {
            if index >= task.media.len() {
                return Err(CatalogueError::MediaIndexOutOfRange {
                    task: task.id.clone(),
                    index,
                });
            }
            task.media.remove(index);
            Ok(())
        })
    }

    /// Applies `change` to every task stored under `id` on a copy.
    fn with_task<F>(&self, id: &TaskIdentifier, mut change: F) -> Outcome
    where
        F: FnMut(&mut Task) -> Result<(), CatalogueError>,
    {
        let key = id.to_string();
        let mut next = self.clone();
        let mut found = false;
        for task in next.tasks.iter_mut().filter(|t| t.id == key) {
            change(task)?;
            found = true;
        }
        if !found {
            return Err(CatalogueError::TaskNotFound(key));
        }
        Ok(next)
    }

    // --- Search item mutations ---

    pub fn add_search_item(&self, item: SearchItem) -> Outcome {
        require("item", &item.item)?;
        require("location", &item.location)?;
        if self.find_search_item(&item.item).is_some() {
            return Err(CatalogueError::DuplicateItem(item.item));
        }
        let mut next = self.clone();
        next.search_items.push(item);
        Ok(next)
    }

    pub fn edit_search_item(&self, item: &str, location: &str) -> Outcome {
        require("location", location)?;
        if self.find_search_item(item).is_none() {
            return Err(CatalogueError::ItemNotFound(item.to_string()));
        }
        let mut next = self.clone();
        for entry in next.search_items.iter_mut().filter(|i| i.item == item) {
            entry.location = location.to_string();
        }
        Ok(next)
    }

    pub fn remove_search_item(&self, item: &str) -> Outcome {
        if self.find_search_item(item).is_none() {
            return Err(CatalogueError::ItemNotFound(item.to_string()));
        }
        let mut next = self.clone();
        next.search_items.retain(|i| i.item != item);
        Ok(next)
    }

    // --- Bulk ---

    /// Wholesale replacement with already validated collections.
    pub fn replace_all(tasks: Vec<Task>, search_items: Vec<SearchItem>) -> Self {
        Self::new(tasks, search_items)
    }

    /// Read-only snapshot for export. Media is always present (possibly empty).
    pub fn to_document(&self) -> BackupDocument {
        BackupDocument {
            tasks: self.tasks.clone(),
            search_items: self.search_items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaKind;

    fn id(s: &str) -> TaskIdentifier {
        s.parse().unwrap()
    }

    fn draft(s: &str, question: &str) -> TaskDraft {
        TaskDraft::new(id(s), question, "S")
    }

    fn catalogue(ids: &[&str]) -> Catalogue {
        ids.iter().fold(Catalogue::default(), |c, i| {
            c.add_task(draft(i, &format!("Question {}", i))).unwrap()
        })
    }

    #[test]
    fn add_task_leaves_previous_snapshot_alone() {
        let before = catalogue(&["1.01.01"]);
        let after = before.add_task(draft("1.01.02", "Q")).unwrap();
        assert_eq!(before.tasks().len(), 1);
        assert_eq!(after.tasks().len(), 2);
    }

    #[test]
    fn add_task_refuses_duplicate_id() {
        let c = catalogue(&["1.01.01"]);
        assert_eq!(
            c.add_task(draft("1.01.01", "Other")),
            Err(CatalogueError::DuplicateTask("1.01.01".into()))
        );
    }

    #[test]
    fn add_task_requires_question_and_solution() {
        let c = Catalogue::default();
        assert_eq!(
            c.add_task(draft("1.01.01", "")),
            Err(CatalogueError::EmptyField("question"))
        );
        assert_eq!(
            c.add_task(TaskDraft::new(id("1.01.01"), "Q", "")),
            Err(CatalogueError::EmptyField("solution"))
        );
    }

    #[test]
    fn edit_task_updates_fields_and_keeps_media() {
        let c = catalogue(&["1.01.01"])
            .attach_media(&id("1.01.01"), MediaRef::new(MediaKind::Image, "a.png"))
            .unwrap();
        let edited = c
            .edit_task(
                &id("1.01.01"),
                TaskEdit {
                    solution: Some("New".into()),
                    room: Some("Cellar".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        let task = edited.find_task(&id("1.01.01")).unwrap();
        assert_eq!(task.solution, "New");
        assert_eq!(task.room, "Cellar");
        assert_eq!(task.media.len(), 1);
    }

    #[test]
    fn edit_task_rejects_blanking_required_fields() {
        let c = catalogue(&["1.01.01"]);
        let edit = TaskEdit {
            question: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            c.edit_task(&id("1.01.01"), edit),
            Err(CatalogueError::EmptyField("question"))
        );
    }

    #[test]
    fn edit_and_remove_unknown_task_fail() {
        let c = catalogue(&["1.01.01"]);
        assert_eq!(
            c.edit_task(&id("9.99.99"), TaskEdit::default()),
            Err(CatalogueError::TaskNotFound("9.99.99".into()))
        );
        assert_eq!(
            c.remove_task(&id("9.99.99")),
            Err(CatalogueError::TaskNotFound("9.99.99".into()))
        );
    }

    #[test]
    fn remove_task_drops_it() {
        let c = catalogue(&["1.01.01", "1.01.02"]);
        let after = c.remove_task(&id("1.01.01")).unwrap();
        assert!(after.find_task(&id("1.01.01")).is_none());
        assert_eq!(after.tasks().len(), 1);
    }

    #[test]
    fn detach_media_checks_index() {
        let c = catalogue(&["1.01.01"])
            .attach_media(&id("1.01.01"), MediaRef::new(MediaKind::Video, "a.mp4"))
            .unwrap();
        assert_eq!(
            c.detach_media(&id("1.01.01"), 1),
            Err(CatalogueError::MediaIndexOutOfRange {
                task: "1.01.01".into(),
                index: 1
            })
        );
        let c = c.detach_media(&id("1.01.01"), 0).unwrap();
        assert!(c.find_task(&id("1.01.01")).unwrap().media.is_empty());
    }

    #[test]
    fn sorted_tasks_follow_identifier_order() {
        let c = catalogue(&["2.01.01", "1.10.01", "1.02.03", "1.02.01"]);
        let ids: Vec<String> = c.sorted_tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1.02.01", "1.02.03", "1.10.01", "2.01.01"]);
    }

    #[test]
    fn chapter_queries() {
        let c = catalogue(&["2.05.01", "1.01.01", "2.01.01"]);
        let in_two: Vec<String> = c.tasks_in_chapter(2).into_iter().map(|t| t.id).collect();
        assert_eq!(in_two, vec!["2.01.01", "2.05.01"]);
        assert_eq!(c.first_task_in_chapter(2).unwrap().id, "2.05.01");
        assert!(c.first_task_in_chapter(3).is_none());
    }

    #[test]
    fn filter_tasks_matches_id_or_question() {
        let c = catalogue(&["1.01.01", "2.02.02"])
            .edit_task(
                &id("2.02.02"),
                TaskEdit {
                    question: Some("Where is the HOTEL?".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(c.filter_tasks("1.01").len(), 1);
        assert_eq!(c.filter_tasks("hotel")[0].id, "2.02.02");
        assert_eq!(c.filter_tasks("").len(), 2);
    }

    #[test]
    fn search_items_lifecycle() {
        let c = Catalogue::default()
            .add_search_item(SearchItem::new("Golden Gherkin", "Inn"))
            .unwrap();
        assert_eq!(
            c.add_search_item(SearchItem::new("Golden Gherkin", "Elsewhere")),
            Err(CatalogueError::DuplicateItem("Golden Gherkin".into()))
        );
        let c = c.edit_search_item("Golden Gherkin", "Cellar").unwrap();
        assert_eq!(c.find_search_item("Golden Gherkin").unwrap().location, "Cellar");
        assert_eq!(c.filter_search_items("cell").len(), 1);
        assert_eq!(c.filter_search_items("gherkin").len(), 1);
        let c = c.remove_search_item("Golden Gherkin").unwrap();
        assert!(c.search_items().is_empty());
        assert_eq!(
            c.remove_search_item("Golden Gherkin"),
            Err(CatalogueError::ItemNotFound("Golden Gherkin".into()))
        );
    }

    #[test]
    fn add_search_item_requires_both_fields() {
        assert_eq!(
            Catalogue::default().add_search_item(SearchItem::new("Towel", "")),
            Err(CatalogueError::EmptyField("location"))
        );
    }

    #[test]
    fn replace_all_keeps_duplicates_and_reports_them() {
        let task = catalogue(&["1.01.01"]).tasks()[0].clone();
        let c = Catalogue::replace_all(
            vec![task.clone(), task],
            vec![SearchItem::new("a", "x"), SearchItem::new("a", "y")],
        );
        assert_eq!(c.tasks().len(), 2);
        assert_eq!(c.duplicate_task_ids(), vec!["1.01.01".to_string()]);
        assert_eq!(c.duplicate_item_keys(), vec!["a".to_string()]);
    }

    #[test]
    fn sample_is_sorted_and_unique() {
        let c = Catalogue::sample();
        assert_eq!(c.tasks().len(), 2);
        assert!(c.duplicate_task_ids().is_empty());
        assert_eq!(c.sorted_tasks()[0].id, "1.01.01");
    }
}
