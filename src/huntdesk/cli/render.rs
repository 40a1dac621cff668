//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode-aware processing; German questions are full of
//! umlauts and the occasional emoji. Templates only decide which semantic
//! style each piece gets.
//!
//! Every renderer takes `use_color: Option<bool>`: `None` lets outstanding
//! detect the terminal, `Some(false)` is `--no-color` (and what tests use).

use super::styles::{HUNT_THEME, names};
use super::templates::{
    CHAPTERS_TEMPLATE, ITEM_LIST_TEMPLATE, MESSAGES_TEMPLATE, TASK_DETAIL_TEMPLATE,
    TASK_LIST_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use huntdesk::commands::{ChapterSummary, CmdMessage, MessageLevel};
use huntdesk::model::{SearchItem, Task};
use outstanding::{ThemeChoice, render, render_with_color};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
/// Room left for the solution column in task listings.
pub const SOLUTION_WIDTH: usize = 28;
const ID_WIDTH: usize = 7;
const LABEL_WIDTH: usize = 8;
const ITEM_WIDTH: usize = 32;

#[derive(Serialize)]
struct TaskLineData {
    id: String,
    id_padding: String,
    question: String,
    padding: String,
    solution: String,
}

#[derive(Serialize)]
struct TaskListData {
    tasks: Vec<TaskLineData>,
}

#[derive(Serialize)]
struct FieldData {
    label: String,
    padding: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MediaData {
    position: String,
    kind: &'static str,
    reference: String,
}

#[derive(Serialize)]
struct TaskDetailEntry {
    id: String,
    question: String,
    fields: Vec<FieldData>,
    media: Vec<MediaData>,
}

#[derive(Serialize)]
struct TaskDetailData {
    tasks: Vec<TaskDetailEntry>,
}

#[derive(Serialize)]
struct ItemLineData {
    item: String,
    padding: String,
    location: String,
}

#[derive(Serialize)]
struct ItemListData {
    items: Vec<ItemLineData>,
}

#[derive(Serialize)]
struct ChapterLineData {
    label: String,
    count: String,
    first: Option<String>,
}

#[derive(Serialize)]
struct ChaptersData {
    chapters: Vec<ChapterLineData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    let theme = ThemeChoice::from(&*HUNT_THEME);
    match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// One line per task: id, question (truncated to fit) and solution.
pub fn render_task_list(tasks: &[Task], use_color: Option<bool>) -> String {
    if tasks.is_empty() {
        return String::new();
    }
    let question_width = LINE_WIDTH.saturating_sub(ID_WIDTH + 2 + 2 + SOLUTION_WIDTH);

    let lines = tasks
        .iter()
        .map(|task| {
            let id = task.id.clone();
            let question = truncate_to_width(&task.question, question_width);
            TaskLineData {
                id_padding: pad_to(&id, ID_WIDTH),
                padding: pad_to(&question, question_width),
                question,
                solution: truncate_to_width(&task.solution, SOLUTION_WIDTH),
                id,
            }
        })
        .collect();

    render_template(TASK_LIST_TEMPLATE, &TaskListData { tasks: lines }, use_color)
}

/// Full view of each task, media numbered from 1.
pub fn render_task_details(tasks: &[Task], use_color: Option<bool>) -> String {
    let entries = tasks
        .iter()
        .map(|task| {
            let fields = [
                ("solution", &task.solution, names::SOLUTION),
                ("room", &task.room, names::QUESTION),
                ("tip", &task.tip, names::QUESTION),
                ("key", &task.key, names::QUESTION),
            ]
            .into_iter()
            .filter(|(_, value, _)| !value.is_empty())
            .map(|(label, value, style)| FieldData {
                label: label.to_string(),
                padding: pad_to(label, LABEL_WIDTH),
                value: value.clone(),
                style,
            })
            .collect();

            let media = task
                .media
                .iter()
                .enumerate()
                .map(|(i, m)| MediaData {
                    position: format!("#{}", i + 1),
                    kind: m.kind.as_str(),
                    reference: truncate_to_width(&m.reference, LINE_WIDTH - 20),
                })
                .collect();

            TaskDetailEntry {
                id: task.id.clone(),
                question: task.question.clone(),
                fields,
                media,
            }
        })
        .collect();

    render_template(
        TASK_DETAIL_TEMPLATE,
        &TaskDetailData { tasks: entries },
        use_color,
    )
}

pub fn render_item_list(items: &[SearchItem], use_color: Option<bool>) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lines = items
        .iter()
        .map(|i| {
            let item = truncate_to_width(&i.item, ITEM_WIDTH);
            ItemLineData {
                padding: pad_to(&item, ITEM_WIDTH),
                item,
                location: i.location.clone(),
            }
        })
        .collect();
    render_template(ITEM_LIST_TEMPLATE, &ItemListData { items: lines }, use_color)
}

pub fn render_chapters(chapters: &[ChapterSummary], use_color: Option<bool>) -> String {
    let lines = chapters
        .iter()
        .map(|c| ChapterLineData {
            label: format!("Chapter {}", c.chapter),
            count: match c.task_count {
                1 => "1 task ".to_string(),
                n => format!("{} tasks", n),
            },
            first: c.first_task.clone(),
        })
        .collect();
    render_template(CHAPTERS_TEMPLATE, &ChaptersData { chapters: lines }, use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: Option<bool>) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage], use_color: Option<bool>) {
    print!("{}", render_messages(messages, use_color));
}

/// Spaces needed to bring `text` up to `width` display columns.
fn pad_to(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

/// Truncates to `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
