//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, XcvrError};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["type-check.yml", "type-check.yaml"];

/// Find the configuration file by searching current and parent directories,
/// then the user configuration directory
pub fn find_config_file() -> ConfigResult<PathBuf> {
    let start_dir = env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?;

    match find_config_file_from(start_dir) {
        Ok(path) => Ok(path),
        Err(ConfigError::NotFound(searched)) => {
            find_user_config_file().ok_or(ConfigError::NotFound(searched))
        }
        Err(e) => Err(e),
    }
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Look for a config file in the platform user config directory
fn find_user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "type-check")?;
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, XcvrError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, XcvrError> {
    // An empty file is a valid "all defaults" config
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load the configuration: an explicit path must exist, otherwise discovery
/// falls back to built-in defaults
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>), XcvrError> {
    if let Some(path) = explicit {
        let config = parse_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    match find_config_file() {
        Ok(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        Err(ConfigError::NotFound(_)) => Ok((Config::default(), None)),
        Err(e) => Err(e.into()),
    }
}
