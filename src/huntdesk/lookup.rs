//! Keypad lookup: raw keystrokes in, one [`LookupOutcome`] out.
//!
//! Two codes are reserved and never reach the catalogue. `6.07.24` shows the
//! hidden greeting and `8.88.88` asks for a new logo.

use crate::catalogue::Catalogue;
use crate::ident::{PartialInput, TaskIdentifier};
use crate::model::Task;

pub const EASTER_EGG_CODE: &str = "6.07.24";
pub const LOGO_UPLOAD_CODE: &str = "8.88.88";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Fewer or more than five digits; carries what the keypad would show.
    Incomplete(String),
    EasterEgg,
    LogoUpload,
    Found(Task),
    NotFound(TaskIdentifier),
}

impl LookupOutcome {
    pub fn task(&self) -> Option<&Task> {
        match self {
            LookupOutcome::Found(task) => Some(task),
            _ => None,
        }
    }
}

pub fn lookup(catalogue: &Catalogue, input: &str) -> LookupOutcome {
    let partial = PartialInput::from(input);
    let id = match partial.complete() {
        Ok(id) => id,
        Err(_) => return LookupOutcome::Incomplete(partial.display()),
    };

    match id.to_string().as_str() {
        EASTER_EGG_CODE => LookupOutcome::EasterEgg,
        LOGO_UPLOAD_CODE => LookupOutcome::LogoUpload,
        _ => match catalogue.find_task(&id) {
            Some(task) => LookupOutcome::Found(task.clone()),
            None => LookupOutcome::NotFound(id),
        },
    }
}
