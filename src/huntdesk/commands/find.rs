use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::{LookupOutcome, lookup};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &S, input: &str) -> Result<CmdResult> {
    let catalogue = store.load_catalogue()?;
    let outcome = lookup(&catalogue, input);
    debug!(input, ?outcome, "lookup");

    let mut result = CmdResult::default();
    match &outcome {
        LookupOutcome::Incomplete(shown) => {
            result.add_message(CmdMessage::warning(format!(
                "Incomplete task number \"{}\": five digits are needed",
                shown
            )));
        }
        LookupOutcome::NotFound(id) => {
            result.add_message(CmdMessage::error(format!("No task with number {}", id)));
        }
        LookupOutcome::LogoUpload => {
            result.add_message(CmdMessage::info(
                "Reserved code: set a new logo with `huntdesk logo set <REFERENCE>`",
            ));
        }
        LookupOutcome::EasterEgg | LookupOutcome::Found(_) => {}
    }
    Ok(result.with_lookup(outcome))
}
