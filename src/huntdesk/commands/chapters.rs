use crate::commands::{ChapterSummary, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Overview of the configured chapters and where navigation lands for each.
pub fn run<S: DataStore>(store: &S, chapters: &[u8]) -> Result<CmdResult> {
    let catalogue = store.load_catalogue()?;
    let summaries = chapters
        .iter()
        .map(|&chapter| ChapterSummary {
            chapter,
            task_count: catalogue.tasks().iter().filter(|t| t.in_chapter(chapter)).count(),
            first_task: catalogue
                .first_task_in_chapter(chapter)
                .map(|t| t.id.clone()),
        })
        .collect();
    Ok(CmdResult::default().with_chapters(summaries))
}
