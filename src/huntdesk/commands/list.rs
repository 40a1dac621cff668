use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Tasks in listing order, optionally limited to one chapter.
pub fn run<S: DataStore>(store: &S, chapter: Option<u8>) -> Result<CmdResult> {
    let catalogue = store.load_catalogue()?;
    let tasks = match chapter {
        Some(chapter) => catalogue.tasks_in_chapter(chapter),
        None => catalogue.sorted_tasks(),
    };

    let mut result = CmdResult::default();
    if tasks.is_empty() {
        let msg = match chapter {
            Some(chapter) => format!("No tasks in chapter {}.", chapter),
            None => "No tasks yet.".to_string(),
        };
        result.add_message(CmdMessage::info(msg));
    }
    Ok(result.with_tasks(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_lists_in_identifier_order() {
        let store = StoreFixture::new()
            .with_task("2.01.01", "Q", "S")
            .with_task("1.10.01", "Q", "S")
            .with_task("1.02.03", "Q", "S")
            .build();
        let result = run(&store, None).unwrap();
        assert_eq!(ids(&result), vec!["1.02.03", "1.10.01", "2.01.01"]);
    }

    #[test]
    fn test_chapter_filter() {
        let store = StoreFixture::new()
            .with_task("2.01.01", "Q", "S")
            .with_task("1.10.01", "Q", "S")
            .build();
        let result = run(&store, Some(2)).unwrap();
        assert_eq!(ids(&result), vec!["2.01.01"]);

        let empty = run(&store, Some(3)).unwrap();
        assert!(empty.tasks.is_empty());
        assert_eq!(empty.messages[0].content, "No tasks in chapter 3.");
    }
}
