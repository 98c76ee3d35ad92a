// SPDX-License-Identifier: MPL-2.0
//! User preference persistence.
//!
//! Preferences are stored as pretty-printed TOML in a `settings.toml`
//! under the platform configuration directory. Saving is best-effort:
//! the application keeps running with in-memory state if the file cannot
//! be written, and a missing or corrupt file loads as the defaults.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Aviary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Preferred locale in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Light, dark, or follow the system preference.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = [valid").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_theme_mode_defaults_to_system() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.theme_mode, ThemeMode::System);
        assert_eq!(loaded.language, Some("en-US".to_string()));
    }
}
