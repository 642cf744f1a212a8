//! Project configuration loading and defaults.
//!
//! Optional JSON config file; every field has a default so a missing or
//! partial config behaves identically to the built-in paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::overview::DEFAULT_IGNORED_KEYS;

/// Tool configuration, loaded from `.cmdcov.config.json` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Structured commands file path
    #[serde(default = "default_commands_path")]
    pub commands: PathBuf,

    /// Reference manual path
    #[serde(default = "default_manual_path")]
    pub manual: PathBuf,

    /// Commands overview document path
    #[serde(default = "default_overview_path")]
    pub overview: PathBuf,

    /// Output path for the generated overview skeleton
    #[serde(default = "default_overview_path")]
    pub generated_overview: PathBuf,

    /// Record keys excluded from argument collection when generating
    #[serde(default = "default_ignored_keys")]
    pub ignored_argument_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commands: default_commands_path(),
            manual: default_manual_path(),
            overview: default_overview_path(),
            generated_overview: default_overview_path(),
            ignored_argument_keys: default_ignored_keys(),
        }
    }
}

impl Config {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::AuditError::from_io(path, e))?;
        serde_json::from_str(&content).map_err(|e| crate::AuditError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save config to a file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            crate::AuditError::Json {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        std::fs::write(path, content).map_err(|e| crate::AuditError::from_io(path, e))
    }

    /// Load from the default location or fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load(".cmdcov.config.json").unwrap_or_default()
    }
}

fn default_commands_path() -> PathBuf {
    PathBuf::from("commands.json")
}

fn default_manual_path() -> PathBuf {
    PathBuf::from("api_manual.md")
}

fn default_overview_path() -> PathBuf {
    PathBuf::from("commands_overview.md")
}

fn default_ignored_keys() -> Vec<String> {
    DEFAULT_IGNORED_KEYS.iter().map(|k| k.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"commands": "data/cmds.json"}"#).unwrap();
        assert_eq!(config.commands, PathBuf::from("data/cmds.json"));
        assert_eq!(config.manual, PathBuf::from("api_manual.md"));
        assert!(config.ignored_argument_keys.contains(&"msgId".to_string()));
    }

    #[test]
    fn config_round_trips_through_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.manual = PathBuf::from("docs/manual.md");
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.manual, PathBuf::from("docs/manual.md"));
        assert_eq!(loaded.overview, config.overview);
    }

    #[test]
    fn missing_config_is_not_found() {
        let err = Config::load("nope/.cmdcov.config.json").unwrap_err();
        assert!(matches!(err, crate::AuditError::NotFound { .. }));
    }
}
