use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ident::TaskIdentifier;
use crate::model::{MediaKind, MediaRef};
use crate::store::DataStore;
use tracing::info;

/// Attaches `reference` to a task. The kind is inferred when not given.
pub fn add<S: DataStore>(
    store: &mut S,
    id: &TaskIdentifier,
    reference: &str,
    kind: Option<MediaKind>,
) -> Result<CmdResult> {
    let kind = kind.unwrap_or_else(|| MediaKind::infer(reference));
    let next = store
        .load_catalogue()?
        .attach_media(id, MediaRef::new(kind, reference))?;
    store.save_catalogue(&next)?;
    info!(%id, kind = kind.as_str(), "media attached");

    let mut result =
        CmdResult::default().with_tasks(next.find_task(id).cloned().into_iter().collect());
    result.add_message(CmdMessage::success(format!(
        "Attached {} to task {}",
        kind.as_str(),
        id
    )));
    Ok(result)
}

/// Detaches the media at the zero-based `index`.
pub fn remove<S: DataStore>(store: &mut S, id: &TaskIdentifier, index: usize) -> Result<CmdResult> {
    let next = store.load_catalogue()?.detach_media(id, index)?;
    store.save_catalogue(&next)?;
    info!(%id, index, "media detached");

    let mut result =
        CmdResult::default().with_tasks(next.find_task(id).cloned().into_iter().collect());
    result.add_message(CmdMessage::success(format!(
        "Removed media #{} from task {}",
        index, id
    )));
    Ok(result)
}
