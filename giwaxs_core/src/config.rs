//! # Application Configuration
//!
//! Per-user settings stored as JSON in the platform config directory
//! (`~/.config/giwaxs_gui/config.json` on Linux). The file is rewritten
//! atomically on every save.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ShellError, ShellResult};
use crate::file_io::{read_json, write_json_atomic};

/// Directory name below the platform config dir
pub const APP_DIR_NAME: &str = "giwaxs_gui";

/// Number of entries kept in the recent projects list
pub const MAX_RECENT_PROJECTS: usize = 10;

/// Config key of the applied theme
pub const STYLE_KEY: &str = "style";

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the last applied theme
    #[serde(default)]
    pub style: Option<String>,

    /// Project directories, most recent first
    #[serde(default)]
    pub recent_projects: Vec<PathBuf>,

    /// Any other string settings
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl AppConfig {
    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
    }

    /// Load the config, falling back to defaults when the file is missing or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return AppConfig::default();
        }
        match read_json(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                AppConfig::default()
            }
        }
    }

    /// Save the config, creating its directory if needed
    pub fn save(&self, path: &Path) -> ShellResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShellError::file_error("create config dir", parent.display().to_string(), e.to_string())
            })?;
        }
        write_json_atomic(self, path)
    }

    /// Read a setting. `"style"` maps to [`AppConfig::style`].
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == STYLE_KEY {
            self.style.as_deref()
        } else {
            self.values.get(key).map(String::as_str)
        }
    }

    /// Write a setting. `"style"` maps to [`AppConfig::style`].
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if key == STYLE_KEY {
            self.style = Some(value.into());
        } else {
            self.values.insert(key.to_string(), value.into());
        }
    }

    /// Move `dir` to the front of the recent projects list
    pub fn push_recent_project(&mut self, dir: PathBuf) {
        self.recent_projects.retain(|p| p != &dir);
        self.recent_projects.insert(0, dir);
        self.recent_projects.truncate(MAX_RECENT_PROJECTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_style_key_maps_to_field() {
        let mut config = AppConfig::default();
        assert_eq!(config.get(STYLE_KEY), None);

        config.set(STYLE_KEY, "Light");
        assert_eq!(config.style.as_deref(), Some("Light"));

        config.set("last_export_dir", "/tmp");
        assert_eq!(config.get("last_export_dir"), Some("/tmp"));
    }

    #[test]
    fn test_recent_projects_front_dedup_cap() {
        let mut config = AppConfig::default();
        for i in 0..12 {
            config.push_recent_project(PathBuf::from(format!("/data/run_{}", i)));
        }
        assert_eq!(config.recent_projects.len(), MAX_RECENT_PROJECTS);
        assert_eq!(config.recent_projects[0], PathBuf::from("/data/run_11"));

        config.push_recent_project(PathBuf::from("/data/run_5"));
        assert_eq!(config.recent_projects[0], PathBuf::from("/data/run_5"));
        assert_eq!(config.recent_projects.iter().filter(|p| p.ends_with("run_5")).count(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = temp_dir().join(format!("giwaxs_test_config_{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.json");

        let mut config = AppConfig::default();
        config.set(STYLE_KEY, "Dark Grey");
        config.push_recent_project(PathBuf::from("/data/run_01"));
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load_or_default(&path), config);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unreadable_config_falls_back() {
        let path = temp_dir().join(format!("giwaxs_test_bad_config_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[1, 2").unwrap();
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
        let _ = std::fs::remove_file(&path);
    }
}
