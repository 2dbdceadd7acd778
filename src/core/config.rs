//! Configuration management with layered hierarchy
//!
//! The database path is an explicit value threaded through every entry
//! point; there is no process-wide mutable default.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Database file created in the working directory when nothing else is
/// configured.
pub const DEFAULT_DB_FILE: &str = "liquor_supply.db";

/// LQS configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file for all record operations
    pub db_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (resolved in db_file())

        // 2. Global user config (~/.config/lqs/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(db) = std::env::var("LQS_DB") {
            config.db_file = Some(PathBuf::from(db));
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "lqs")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.db_file.is_some() {
            self.db_file = other.db_file;
        }
    }

    /// Resolve the database path: CLI flag, then config file / environment,
    /// then the built-in default.
    pub fn db_file(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        self.db_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_file() {
        let config = Config::default();
        assert_eq!(config.db_file(None), PathBuf::from(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            db_file: Some(PathBuf::from("/var/lib/lqs/store.db")),
        };
        let cli = PathBuf::from("/tmp/other.db");
        assert_eq!(config.db_file(Some(cli.as_path())), cli);
    }

    #[test]
    fn test_config_value_beats_default() {
        let config = Config {
            db_file: Some(PathBuf::from("store.db")),
        };
        assert_eq!(config.db_file(None), PathBuf::from("store.db"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut config = Config {
            db_file: Some(PathBuf::from("a.db")),
        };
        config.merge(Config {
            db_file: Some(PathBuf::from("b.db")),
        });
        assert_eq!(config.db_file, Some(PathBuf::from("b.db")));

        config.merge(Config::default());
        assert_eq!(config.db_file, Some(PathBuf::from("b.db")));
    }
}
