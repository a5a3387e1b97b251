use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::config::ConfigError;

/// NexList config directory (~/.nexlist)
pub fn nexlist_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".nexlist")
}

/// ~/.nexlist/config.json
pub fn config_json_path() -> PathBuf {
    nexlist_dir().join("config.json")
}

pub fn load_config_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn save_config_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = serde_json::to_string_pretty(value).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(write_err)
}
