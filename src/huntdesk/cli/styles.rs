//! Styles for the huntdesk CLI.
//!
//! Templates only ever name semantic styles (`task-id`, `solution`, ...).
//! Those map onto a handful of presentation styles defined once here, so the
//! palette can change without touching a template. Every name used in a
//! template must be registered, otherwise outstanding marks the text with a
//! missing-style indicator.
use console::Style;
use once_cell::sync::Lazy;
use outstanding::{Theme, rgb_to_ansi256};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    // Semantic catalogue styles
    pub const TASK_ID: &str = "task-id";
    pub const QUESTION: &str = "question";
    pub const SOLUTION: &str = "solution";
    pub const LABEL: &str = "label";
    pub const ITEM: &str = "item";
    pub const LOCATION: &str = "location";
    pub const CHAPTER: &str = "chapter";
    pub const HIGHLIGHT: &str = "highlight";
}

pub static HUNT_THEME: Lazy<Theme> = Lazy::new(|| {
    let regular = Style::new();
    let muted = Style::new().color256(rgb_to_ansi256((140, 140, 140)));
    let accent = Style::new().color256(rgb_to_ansi256((222, 165, 0)));
    let positive = Style::new().color256(rgb_to_ansi256((46, 160, 67)));

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::TASK_ID, accent.clone().bold())
        .add(names::QUESTION, regular)
        .add(names::SOLUTION, positive.bold())
        .add(names::LABEL, muted.clone().italic())
        .add(names::ITEM, Style::new().bold())
        .add(names::LOCATION, muted)
        .add(names::CHAPTER, accent)
        .add(
            names::HIGHLIGHT,
            Style::new().black().on_color256(rgb_to_ansi256((255, 235, 59))),
        )
});
