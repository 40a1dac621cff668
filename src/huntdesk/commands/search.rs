use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Filters tasks (id or question) and search items (name or location) at once.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let catalogue = store.load_catalogue()?;
    let tasks = catalogue.filter_tasks(query);
    let items = catalogue.filter_search_items(query);

    let mut result = CmdResult::default();
    if tasks.is_empty() && items.is_empty() {
        result.add_message(CmdMessage::info(format!("Nothing matches \"{}\".", query)));
    }
    Ok(result.with_tasks(tasks).with_search_items(items))
}
