use anyhow::{Context, Result};
use directories::ProjectDirs;
use jobboard_core::BoardConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "jobboard";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file backing the key-value storage
    pub storage_path: Option<PathBuf>,
    pub board: BoardConfig,
}

pub fn get_config_dir() -> Result<PathBuf> {
    // JOBBOARD_CONFIG_PATH overrides the default config directory
    if let Ok(path) = std::env::var("JOBBOARD_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }

    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .context("Could not determine config directory")
}

pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

pub fn get_storage_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.storage_path {
        return Ok(path.clone());
    }
    Ok(get_config_dir()?.join("storage.json"))
}

/// Load the config file, or defaults when it does not exist.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => get_config_file()?,
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(raw: &str) -> Result<Config> {
    Ok(toml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::ListOrder;

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("").unwrap();
        assert!(config.storage_path.is_none());
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn board_section_is_read() {
        let config = parse_config(
            r#"
            storage_path = "/tmp/jobs.json"

            [board]
            storage_key = "qaJobs"
            list_order = "legacy"
            validate_input = false
            "#,
        )
        .unwrap();
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/jobs.json")));
        assert_eq!(config.board.storage_key, "qaJobs");
        assert_eq!(config.board.list_order, ListOrder::Legacy);
        assert!(!config.board.validate_input);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config.board.storage_key, "devJobs");
    }

    #[test]
    fn explicit_storage_path_wins() {
        let config = Config {
            storage_path: Some(PathBuf::from("jobs.json")),
            ..Config::default()
        };
        assert_eq!(get_storage_path(&config).unwrap(), PathBuf::from("jobs.json"));
    }
}
