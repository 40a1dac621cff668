use crate::ident::TaskIdentifier;
use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "avif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub const ALL: [&'static str; 2] = ["image", "video"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Anything that is not recognisably an image is treated as video.
    pub fn infer(reference: &str) -> Self {
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("data:image/") {
            return MediaKind::Image;
        }
        let path = lower.split(['?', '#']).next().unwrap_or_default();
        match path.rsplit_once('.') {
            Some((_, ext)) if IMAGE_EXTENSIONS.contains(&ext) => MediaKind::Image,
            _ => MediaKind::Video,
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(format!("Unknown media kind: {}", other)),
        }
    }
}

/// A piece of media attached to a task. `reference` is opaque (file path,
/// URL or data URL) and never inspected beyond kind inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(rename = "url")]
    pub reference: String,
}

impl MediaRef {
    pub fn new(kind: MediaKind, reference: impl Into<String>) -> Self {
        Self {
            kind,
            reference: reference.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    // Stored as supplied. Canonical when created through the editor, but an
    // imported backup may carry any non-empty string.
    pub id: String,
    pub question: String,
    pub solution: String,
    pub room: String,
    pub tip: String,
    pub key: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

impl Task {
    pub fn identifier(&self) -> Option<TaskIdentifier> {
        self.id.parse().ok()
    }

    pub fn in_chapter(&self, chapter: u8) -> bool {
        self.identifier().is_some_and(|id| id.in_chapter(chapter))
    }
}

/// Input for creating a task through the editor.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub id: TaskIdentifier,
    pub question: String,
    pub solution: String,
    pub room: String,
    pub tip: String,
    pub key: String,
}

impl TaskDraft {
    pub fn new(id: TaskIdentifier, question: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            solution: solution.into(),
            room: String::new(),
            tip: String::new(),
            key: String::new(),
        }
    }

    pub fn into_task(self) -> Task {
        Task {
            id: self.id.to_string(),
            question: self.question,
            solution: self.solution,
            room: self.room,
            tip: self.tip,
            key: self.key,
            media: Vec::new(),
        }
    }
}

/// Field-wise update of an existing task. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub question: Option<String>,
    pub solution: Option<String>,
    pub room: Option<String>,
    pub tip: Option<String>,
    pub key: Option<String>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.solution.is_none()
            && self.room.is_none()
            && self.tip.is_none()
            && self.key.is_none()
    }

    pub(crate) fn apply(&self, task: &mut Task) {
        let fields = [
            (&self.question, &mut task.question),
            (&self.solution, &mut task.solution),
            (&self.room, &mut task.room),
            (&self.tip, &mut task.tip),
            (&self.key, &mut task.key),
        ];
        for (update, field) in fields {
            if let Some(value) = update {
                field.clone_from(value);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub item: String,
    pub location: String,
}

impl SearchItem {
    pub fn new(item: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            location: location.into(),
        }
    }
}

/// The unit exchanged through export and import, and the on-disk shape of
/// the live catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub tasks: Vec<Task>,
    pub search_items: Vec<SearchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_uses_type_and_url_on_the_wire() {
        let media = MediaRef::new(MediaKind::Video, "clip.mp4");
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({"type": "video", "url": "clip.mp4"})
        );
    }

    #[test]
    fn task_without_media_deserializes_to_empty_list() {
        let task: Task = serde_json::from_value(json!({
            "id": "1.01.01", "question": "Q", "solution": "S",
            "room": "", "tip": "", "key": ""
        }))
        .unwrap();
        assert!(task.media.is_empty());
        assert_eq!(task.identifier().unwrap().to_string(), "1.01.01");
    }

    #[test]
    fn document_uses_camel_case_search_items() {
        let doc = BackupDocument {
            tasks: vec![],
            search_items: vec![SearchItem::new("Towel", "Inn")],
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["searchItems"][0]["item"], "Towel");
    }

    #[test]
    fn infer_media_kind() {
        assert_eq!(MediaKind::infer("data:image/png;base64,AAAA"), MediaKind::Image);
        assert_eq!(MediaKind::infer("photos/Door.JPG"), MediaKind::Image);
        assert_eq!(MediaKind::infer("https://x.test/a.webp?size=2"), MediaKind::Image);
        assert_eq!(MediaKind::infer("clip.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::infer("data:video/mp4;base64,AAAA"), MediaKind::Video);
        assert_eq!(MediaKind::infer("no-extension"), MediaKind::Video);
    }

    #[test]
    fn task_in_chapter_ignores_malformed_ids() {
        let mut task = TaskDraft::new("2.01.01".parse().unwrap(), "Q", "S").into_task();
        assert!(task.in_chapter(2));
        task.id = "garbage".into();
        assert!(!task.in_chapter(2));
    }

    #[test]
    fn edit_applies_only_given_fields() {
        let mut task = TaskDraft::new("1.01.01".parse().unwrap(), "Q", "S").into_task();
        TaskEdit {
            tip: Some("Look up".into()),
            ..Default::default()
        }
        .apply(&mut task);
        assert_eq!(task.tip, "Look up");
        assert_eq!(task.question, "Q");
    }
}
