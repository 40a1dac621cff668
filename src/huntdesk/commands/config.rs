use crate::commands::export::backup_filename;
use crate::commands::{CmdMessage, CmdResult, HuntPaths};
use crate::config::HuntConfig;
use crate::error::Result;
use chrono::Utc;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &HuntPaths, action: ConfigAction) -> Result<CmdResult> {
    let config = paths.config()?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let message = match config.get(&key) {
                Some(value) => CmdMessage::info(value),
                None => CmdMessage::error(HuntConfig::unknown_key(&key)),
            };
            let mut result = CmdResult::default();
            result.add_message(message);
            Ok(result)
        }
        ConfigAction::Set(key, value) => set(paths, config, &key, &value),
    }
}

/// Invalid values are reported as an error message and nothing is written.
fn set(paths: &HuntPaths, mut config: HuntConfig, key: &str, value: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Err(problem) = config.set(key, value) {
        result.add_message(CmdMessage::error(problem));
        return Ok(result);
    }
    config.save(&paths.data_dir)?;
    info!(key, value = config.get(key).as_deref(), "setting changed");

    result.add_message(CmdMessage::success(describe_change(&config, key)));
    Ok(result.with_config(config))
}

fn describe_change(config: &HuntConfig, key: &str) -> String {
    match key {
        "chapters" => {
            let chapters: Vec<String> = config.chapters.iter().map(u8::to_string).collect();
            format!("Chapter navigation now offers {}", chapters.join(", "))
        }
        "export-prefix" => format!(
            "Backups will be written as {}",
            backup_filename(&config.export_prefix, Utc::now().date_naive())
        ),
        other => format!("{} updated", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    #[test]
    fn test_set_then_show_key() {
        let dir = tempdir().unwrap();
        let paths = HuntPaths::new(dir.path());

        let set = run(
            &paths,
            ConfigAction::Set("chapters".into(), "1,2,3,4,5".into()),
        )
        .unwrap();
        assert_eq!(
            set.messages[0].content,
            "Chapter navigation now offers 1, 2, 3, 4, 5"
        );

        let shown = run(&paths, ConfigAction::ShowKey("chapters".into())).unwrap();
        assert_eq!(shown.messages[0].content, "1,2,3,4,5");
    }

    #[test]
    fn test_prefix_change_names_next_backup() {
        let dir = tempdir().unwrap();
        let res = run(
            &HuntPaths::new(dir.path()),
            ConfigAction::Set("export-prefix".into(), " Hunt ".into()),
        )
        .unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert!(res.messages[0].content.starts_with("Backups will be written as Hunt_"));
        assert_eq!(res.config.unwrap().export_prefix, "Hunt");
    }

    #[test]
    fn test_invalid_value_is_reported_not_saved() {
        let dir = tempdir().unwrap();
        let paths = HuntPaths::new(dir.path());
        let res = run(&paths, ConfigAction::Set("chapters".into(), "x".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert_eq!(res.messages[0].content, "Chapters must be digits 0-9, got: x");
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn test_unknown_key_lists_known_settings() {
        let dir = tempdir().unwrap();
        let paths = HuntPaths::new(dir.path());
        for action in [
            ConfigAction::ShowKey("colour".into()),
            ConfigAction::Set("colour".into(), "red".into()),
        ] {
            let res = run(&paths, action).unwrap();
            assert_eq!(res.messages[0].level, MessageLevel::Error);
            assert_eq!(
                res.messages[0].content,
                "Unknown setting `colour`. Known settings: chapters, export-prefix"
            );
        }
    }

    #[test]
    fn test_show_all_defaults() {
        let dir = tempdir().unwrap();
        let res = run(&HuntPaths::new(dir.path()), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config.unwrap(), HuntConfig::default());
    }
}
