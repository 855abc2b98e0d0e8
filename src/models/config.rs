use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_FILE_NAME: &str = "projects.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub last_file: Option<PathBuf>,
    #[serde(default)]
    pub last_opened: Option<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            last_file: None,
            last_opened: None,
        }
    }
}

impl UserConfig {
    /// File to open when none is named on the command line.
    pub fn default_file(&self) -> PathBuf {
        self.last_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_FILE_NAME))
    }

    pub fn remember_file(&mut self, path: PathBuf) {
        self.last_file = Some(path);
        self.last_opened = Some(Local::now().format("%Y-%m-%d %H:%M").to_string());
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("ideas").join("config.json"))
}

pub fn load_config() -> UserConfig {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => UserConfig::default(),
    }
}

pub fn load_config_from(path: &std::path::Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            UserConfig::default()
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read config");
            UserConfig::default()
        }
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), std::io::Error> {
    match get_config_path() {
        Some(path) => save_config_to(&path, config),
        None => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )),
    }
}

pub fn save_config_to(path: &std::path::Path, config: &UserConfig) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json"));
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.default_file(), PathBuf::from("data").join("projects.json"));
    }

    #[test]
    fn test_garbage_config_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config_from(&path), UserConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = UserConfig::default();
        config.remember_file(PathBuf::from("data/weekend.json"));
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.default_file(), PathBuf::from("data/weekend.json"));
        assert!(loaded.last_opened.is_some());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"last_file": "mine.json"}"#).unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.last_file, Some(PathBuf::from("mine.json")));
    }
}
