use crate::commands::{CmdMessage, CmdResult};
use crate::config::DexConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes settings stored in `dir`.
///
/// Bad keys and values come back as error messages, not `Err`; `Err` is
/// reserved for failing to read or write `config.json`.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let config = DexConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => Ok(show_key(&config, &key)),
        ConfigAction::Set(key, value) => set(dir, config, &key, &value),
    }
}

fn show_key(config: &DexConfig, key: &str) -> CmdResult {
    let mut result = CmdResult::default();
    let message = match config.get(key) {
        Some(value) => CmdMessage::info(value),
        None => CmdMessage::error(unknown_key(key)),
    };
    result.add_message(message);
    result
}

fn set(dir: &Path, mut config: DexConfig, key: &str, value: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if key == "database" && Path::new(value.trim()).is_dir() {
        result.add_message(CmdMessage::error(format!(
            "'{}' is a directory, not a database file.",
            value.trim()
        )));
        return Ok(result);
    }
    if let Err(e) = config.set(key, value) {
        result.add_message(CmdMessage::error(e));
        return Ok(result);
    }

    config.save(dir)?;
    log::debug!("config {} updated in {}", key, dir.display());

    if key == "database" && !config.database.exists() {
        result.add_message(CmdMessage::info(format!(
            "'{}' does not exist yet. It will be created on the first save.",
            config.database.display()
        )));
    }
    let shown = config.get(key).unwrap_or_else(|| value.to_string());
    result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {} (known keys: {})",
        key,
        DexConfig::keys().join(", ")
    )
}
