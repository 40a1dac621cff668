//! # CLI Behavior
//!
//! Running `huntdesk` with no arguments lists the catalogue. Task numbers are
//! accepted the way the keypad takes them: any non-digit is ignored, so
//! `10102`, `1.01.02` and `1 01 02` name the same task.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `logging`: tracing subscriber setup for `-v` and `HUNTDESK_LOG`
//! - `render`: Output formatting (tables, task details, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal theme
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
