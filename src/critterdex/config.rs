//! # Configuration
//!
//! Settings live in `config.json` inside the config directory, which is
//! resolved in priority order:
//! 1. `CRITTERDEX_CONFIG_DIR` environment variable
//! 2. The OS config directory (via the `directories` crate)
//! 3. The current directory
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `database` | `database.txt` | File used when a load or save is given no path |
//! | `load-on-start` | `false` | Load `database` when the interactive session starts |
//!
//! `CRITTERDEX_DB` overrides `database` for a single run.

use crate::error::{DexError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_DATABASE: &str = "database.txt";
pub const CONFIG_DIR_ENV: &str = "CRITTERDEX_CONFIG_DIR";
pub const DATABASE_ENV: &str = "CRITTERDEX_DB";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DexConfig {
    /// Database file used when no path is given
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Load the database when an interactive session starts
    #[serde(default)]
    pub load_on_start: bool,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            load_on_start: false,
        }
    }
}

/// Where `config.json` lives for this process.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "critterdex", "critterdex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

impl DexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DexError::Io)?;
        let config: DexConfig =
            serde_json::from_str(&content).map_err(DexError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DexError::Serialization)?;
        fs::write(config_path, content).map_err(DexError::Io)?;
        Ok(())
    }

    /// Applies `CRITTERDEX_DB` if it is set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(db) = std::env::var_os(DATABASE_ENV) {
            if !db.is_empty() {
                self.database = PathBuf::from(db);
            }
        }
        self
    }

    /// Resolve an optional user-supplied path: blank means the configured default.
    pub fn database_or<'a>(&'a self, path: Option<&'a Path>) -> &'a Path {
        match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => &self.database,
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["database", "load-on-start"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database" => Some(self.database.display().to_string()),
            "load-on-start" => Some(self.load_on_start.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "database" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("database cannot be empty".to_string());
                }
                self.database = PathBuf::from(value);
                Ok(())
            }
            "load-on-start" => {
                self.load_on_start = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for load-on-start: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DexConfig::default();
        assert_eq!(config.database, PathBuf::from("database.txt"));
        assert!(!config.load_on_start);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = DexConfig::load(dir.path()).unwrap();
        assert_eq!(config, DexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = DexConfig::default();
        config.set("database", "kanto.txt").unwrap();
        config.set("load-on-start", "yes").unwrap();
        config.save(&nested).unwrap();

        let loaded = DexConfig::load(&nested).unwrap();
        assert_eq!(loaded.database, PathBuf::from("kanto.txt"));
        assert!(loaded.load_on_start);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"load_on_start": true}"#).unwrap();

        let config = DexConfig::load(dir.path()).unwrap();
        assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
        assert!(config.load_on_start);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            DexConfig::load(dir.path()),
            Err(DexError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_and_set() {
        let mut config = DexConfig::default();
        assert_eq!(config.get("database").as_deref(), Some("database.txt"));
        assert_eq!(config.get("load-on-start").as_deref(), Some("false"));
        assert_eq!(config.get("colour"), None);

        assert!(config.set("load-on-start", "perhaps").is_err());
        assert!(config.set("database", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, DexConfig::default());
    }

    #[test]
    fn test_database_or_falls_back_on_blank() {
        let config = DexConfig::default();
        assert_eq!(config.database_or(None), Path::new("database.txt"));
        assert_eq!(config.database_or(Some(Path::new(""))), Path::new("database.txt"));
        assert_eq!(
            config.database_or(Some(Path::new("johto.txt"))),
            Path::new("johto.txt")
        );
    }
}
