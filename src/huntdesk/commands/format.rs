use crate::commands::{CmdMessage, CmdResult};
use crate::ident::{format_complete, format_partial};

/// Shows what the keypad display and the lookup would make of `input`.
pub fn run(input: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("partial:  {}", format_partial(input))));
    let complete = format_complete(input);
    if complete.is_empty() {
        result.add_message(CmdMessage::warning("complete: (not a complete task number)"));
    } else {
        result.add_message(CmdMessage::success(format!("complete: {}", complete)));
    }
    result
}
