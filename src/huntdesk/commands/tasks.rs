use crate::catalogue::CatalogueError;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ident::TaskIdentifier;
use crate::model::{TaskDraft, TaskEdit};
use crate::store::DataStore;
use tracing::info;

pub fn add<S: DataStore>(store: &mut S, draft: TaskDraft) -> Result<CmdResult> {
    let id = draft.id;
    let next = store.load_catalogue()?.add_task(draft)?;
    store.save_catalogue(&next)?;
    info!(%id, "task added");

    let mut result =
        CmdResult::default().with_tasks(next.find_task(&id).cloned().into_iter().collect());
    result.add_message(CmdMessage::success(format!("Added task {}", id)));
    Ok(result)
}

pub fn edit<S: DataStore>(store: &mut S, id: &TaskIdentifier, edit: TaskEdit) -> Result<CmdResult> {
    let current = store.load_catalogue()?;
    if edit.is_empty() {
        let task = current
            .find_task(id)
            .cloned()
            .ok_or_else(|| CatalogueError::TaskNotFound(id.to_string()))?;
        let mut result = CmdResult::default().with_tasks(vec![task]);
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let next = current.edit_task(id, edit)?;
    store.save_catalogue(&next)?;
    info!(%id, "task edited");

    let mut result =
        CmdResult::default().with_tasks(next.find_task(id).cloned().into_iter().collect());
    result.add_message(CmdMessage::success(format!("Updated task {}", id)));
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, id: &TaskIdentifier) -> Result<CmdResult> {
    let next = store.load_catalogue()?.remove_task(id)?;
    store.save_catalogue(&next)?;
    info!(%id, "task removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed task {}", id)));
    Ok(result)
}
