use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SearchItem;
use crate::store::DataStore;
use tracing::info;

/// Search items in stored order, filtered when a query is given.
pub fn list<S: DataStore>(store: &S, query: Option<&str>) -> Result<CmdResult> {
    let catalogue = store.load_catalogue()?;
    let items = match query {
        Some(q) => catalogue.filter_search_items(q),
        None => catalogue.search_items().to_vec(),
    };
    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info("No search items."));
    }
    Ok(result.with_search_items(items))
}

pub fn add<S: DataStore>(store: &mut S, item: SearchItem) -> Result<CmdResult> {
    let name = item.item.clone();
    let next = store.load_catalogue()?.add_search_item(item.clone())?;
    store.save_catalogue(&next)?;
    info!(item = %name, "search item added");

    let mut result = CmdResult::default().with_search_items(vec![item]);
    result.add_message(CmdMessage::success(format!("Added search item \"{}\"", name)));
    Ok(result)
}

pub fn edit<S: DataStore>(store: &mut S, item: &str, location: &str) -> Result<CmdResult> {
    let next = store.load_catalogue()?.edit_search_item(item, location)?;
    store.save_catalogue(&next)?;
    info!(item, "search item edited");

    let mut result = CmdResult::default()
        .with_search_items(next.find_search_item(item).cloned().into_iter().collect());
    result.add_message(CmdMessage::success(format!("Moved \"{}\" to {}", item, location)));
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, item: &str) -> Result<CmdResult> {
    let next = store.load_catalogue()?.remove_search_item(item)?;
    store.save_catalogue(&next)?;
    info!(item, "search item removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed search item \"{}\"", item)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_list_and_filter() {
        let store = StoreFixture::new()
            .with_item("Lamp", "Cellar")
            .with_item("Towel", "Inn")
            .build();
        assert_eq!(list(&store, None).unwrap().search_items.len(), 2);

        let filtered = list(&store, Some("INN")).unwrap();
        assert_eq!(filtered.search_items, vec![SearchItem::new("Towel", "Inn")]);
    }

    #[test]
    fn test_add_edit_remove() {
        let mut store = StoreFixture::new().build();
        add(&mut store, SearchItem::new("Lamp", "Cellar")).unwrap();
        assert!(add(&mut store, SearchItem::new("Lamp", "Attic")).is_err());

        let result = edit(&mut store, "Lamp", "Attic").unwrap();
        assert_eq!(result.search_items[0].location, "Attic");

        remove(&mut store, "Lamp").unwrap();
        assert!(store.load_catalogue().unwrap().search_items().is_empty());
        assert_eq!(store.save_count(), 3);
    }

    #[test]
    fn test_edit_requires_location() {
        let mut store = StoreFixture::new().with_item("Lamp", "Cellar").build();
        assert!(edit(&mut store, "Lamp", "").is_err());
        assert_eq!(store.save_count(), 0);
    }
}
