use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HuntError, Result};
use crate::store::DataStore;
use tracing::info;

#[derive(Debug, Clone)]
pub enum LogoAction {
    Show,
    Set(String),
    Clear,
}

pub fn run<S: DataStore>(store: &mut S, action: LogoAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        LogoAction::Show => {
            let logo = store.load_logo()?;
            if logo.is_none() {
                result.add_message(CmdMessage::info("No custom logo set."));
            }
            Ok(result.with_logo(logo))
        }
        LogoAction::Set(reference) => {
            let reference = reference.trim();
            if reference.is_empty() {
                return Err(HuntError::Api("Logo reference cannot be empty".into()));
            }
            store.save_logo(reference)?;
            info!("logo replaced");
            result.add_message(CmdMessage::success("Logo updated."));
            Ok(result.with_logo(Some(reference.to_string())))
        }
        LogoAction::Clear => {
            store.clear_logo()?;
            info!("logo cleared");
            result.add_message(CmdMessage::success("Logo reset to default."));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_set_show_clear() {
        let mut store = InMemoryStore::new();
        let shown = run(&mut store, LogoAction::Show).unwrap();
        assert_eq!(shown.logo, None);

        run(&mut store, LogoAction::Set(" logo.svg ".into())).unwrap();
        let shown = run(&mut store, LogoAction::Show).unwrap();
        assert_eq!(shown.logo.as_deref(), Some("logo.svg"));

        run(&mut store, LogoAction::Clear).unwrap();
        assert_eq!(store.load_logo().unwrap(), None);
    }

    #[test]
    fn test_empty_reference_is_refused() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, LogoAction::Set("  ".into())).is_err());
        assert_eq!(store.load_logo().unwrap(), None);
    }
}
