//! # Backup Validation
//!
//! [`validate`] is the only gate between an externally supplied document and
//! the catalogue's replace-all operation. It is a pure function: it never
//! mutates its input, never touches storage, and hands back the collections
//! exactly as supplied when they pass (no normalization, deduplication or
//! re-sorting).
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the document must be a JSON object;
//! 2. `tasks` and `searchItems` must both be arrays;
//! 3. each task, in order, against [`TASK_RULES`], then its `media` list;
//! 4. each search item, in order, against [`SEARCH_ITEM_RULES`].
//!
//! Entity checks are tables of named field rules, so adding a field means
//! adding a row rather than another branch.
//!
//! Duplicate ids or item names inside a document are not rejected here.

use crate::model::{MediaKind, SearchItem, Task};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted {
        tasks: Vec<Task>,
        search_items: Vec<SearchItem>,
    },
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn into_result(self) -> Result<(Vec<Task>, Vec<SearchItem>), Rejection> {
        match self {
            ValidationResult::Accepted {
                tasks,
                search_items,
            } => Ok((tasks, search_items)),
            ValidationResult::Rejected(rejection) => Err(rejection),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid document: expected a JSON object")]
    MalformedDocument,

    #[error("missing or invalid data: `tasks` and `searchItems` must both be lists")]
    MissingCollections,

    #[error("invalid task {task}: {problem}")]
    MalformedTask { task: String, problem: FieldProblem },

    #[error("invalid media #{index} in task {task}: {problem}")]
    MalformedMedia {
        task: String,
        index: usize,
        problem: FieldProblem,
    },

    #[error("invalid search item {item}: {problem}")]
    MalformedSearchItem { item: String, problem: FieldProblem },
}

impl Rejection {
    /// True for failures of the document's overall shape, false when a
    /// single entity is at fault.
    pub fn is_document_level(&self) -> bool {
        matches!(
            self,
            Rejection::MalformedDocument | Rejection::MissingCollections
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("`{0}` is missing")]
    Missing(&'static str),

    #[error("`{0}` must be a string")]
    NotAString(&'static str),

    #[error("`{0}` must not be empty")]
    Empty(&'static str),

    #[error("`{field}` must be one of {allowed:?}")]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("`{0}` must be a list")]
    NotAList(&'static str),

    #[error("entry could not be read: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Present, a string, and not empty.
    Text,
    /// Present and a string; empty allowed.
    OptionalText,
    /// A string drawn from a fixed set.
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
}

const fn field(field: &'static str, rule: Rule) -> FieldRule {
    FieldRule { field, rule }
}

pub const TASK_RULES: &[FieldRule] = &[
    field("id", Rule::Text),
    field("question", Rule::Text),
    field("solution", Rule::Text),
    field("room", Rule::OptionalText),
    field("tip", Rule::OptionalText),
    field("key", Rule::OptionalText),
];

pub const MEDIA_RULES: &[FieldRule] = &[
    field("type", Rule::OneOf(&MediaKind::ALL)),
    field("url", Rule::Text),
];

pub const SEARCH_ITEM_RULES: &[FieldRule] = &[
    field("item", Rule::Text),
    field("location", Rule::Text),
];

impl FieldRule {
    fn check(&self, entry: &Map<String, Value>) -> Result<(), FieldProblem> {
        let value = entry
            .get(self.field)
            .ok_or(FieldProblem::Missing(self.field))?;
        let text = value
            .as_str()
            .ok_or(FieldProblem::NotAString(self.field))?;
        match self.rule {
            Rule::Text if text.is_empty() => Err(FieldProblem::Empty(self.field)),
            Rule::OneOf(allowed) if !allowed.contains(&text) => Err(FieldProblem::NotAllowed {
                field: self.field,
                allowed,
            }),
            _ => Ok(()),
        }
    }
}

fn check_entry(value: &Value, rules: &[FieldRule]) -> Result<(), FieldProblem> {
    let entry = value.as_object().ok_or(FieldProblem::NotAnObject)?;
    rules.iter().try_for_each(|rule| rule.check(entry))
}

fn dump(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

/// Label for a task in messages: its id when usable, else the raw entry.
fn task_label(value: &Value) -> String {
    match value.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => dump(value),
    }
}

fn check_media(task: &Value) -> Result<(), Rejection> {
    let Some(media) = task.get("media") else {
        return Ok(());
    };
    let list = media.as_array().ok_or_else(|| Rejection::MalformedTask {
        task: task_label(task),
        problem: FieldProblem::NotAList("media"),
    })?;
    for (index, entry) in list.iter().enumerate() {
        check_entry(entry, MEDIA_RULES).map_err(|problem| Rejection::MalformedMedia {
            task: task_label(task),
            index,
            problem,
        })?;
    }
    Ok(())
}

fn read<T: DeserializeOwned>(value: &Value) -> Result<T, FieldProblem> {
    serde_json::from_value(value.clone()).map_err(|e| FieldProblem::Unreadable(e.to_string()))
}

fn validate_tasks(values: &[Value]) -> Result<Vec<Task>, Rejection> {
    values
        .iter()
        .map(|value| {
            check_entry(value, TASK_RULES).map_err(|problem| Rejection::MalformedTask {
                task: task_label(value),
                problem,
            })?;
            check_media(value)?;
            read(value).map_err(|problem| Rejection::MalformedTask {
                task: task_label(value),
                problem,
            })
        })
        .collect()
}

fn validate_search_items(values: &[Value]) -> Result<Vec<SearchItem>, Rejection> {
    values
        .iter()
        .map(|value| {
            check_entry(value, SEARCH_ITEM_RULES)
                .and_then(|_| read(value))
                .map_err(|problem| Rejection::MalformedSearchItem {
                    item: dump(value),
                    problem,
                })
        })
        .collect()
}

fn run_checks(document: &Value) -> Result<(Vec<Task>, Vec<SearchItem>), Rejection> {
    let root = document.as_object().ok_or(Rejection::MalformedDocument)?;
    let (Some(Value::Array(tasks)), Some(Value::Array(items))) =
        (root.get("tasks"), root.get("searchItems"))
    else {
        return Err(Rejection::MissingCollections);
    };
    let tasks = validate_tasks(tasks)?;
    let search_items = validate_search_items(items)?;
    Ok((tasks, search_items))
}

/// Parses backup text into a JSON value, skipping a leading UTF-8 byte order
/// mark the way browsers' text readers do.
pub fn parse_backup(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Validates a parsed backup document.
pub fn validate(document: &Value) -> ValidationResult {
    match run_checks(document) {
        Ok((tasks, search_items)) => ValidationResult::Accepted {
            tasks,
            search_items,
        },
        Err(rejection) => ValidationResult::Rejected(rejection),
    }
}
