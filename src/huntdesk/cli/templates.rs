//! Output templates, kept as stand-alone minijinja files and included here as
//! string constants.
//!
//! Templates emit their own line breaks. Layout math (column widths,
//! truncation) happens in `render.rs`, so templates only pick styles.
pub const TASK_LIST_TEMPLATE: &str = include_str!("templates/task_list.tmp");
pub const TASK_DETAIL_TEMPLATE: &str = include_str!("templates/task_detail.tmp");
pub const ITEM_LIST_TEMPLATE: &str = include_str!("templates/item_list.tmp");
pub const CHAPTERS_TEMPLATE: &str = include_str!("templates/chapters.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
