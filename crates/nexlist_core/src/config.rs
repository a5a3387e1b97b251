use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::{config_json_path, load_config_json};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Backend origin, without a trailing `/todos`.
    pub api_base: String,
    /// Value of the `access_token` session cookie, for clients that cannot
    /// complete the browser login themselves.
    pub access_token: Option<String>,
    pub http_proxy: String,
    pub https_proxy: String,
    /// Open the login page in a browser instead of only printing it.
    pub open_browser: bool,
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            access_token: None,
            http_proxy: String::new(),
            https_proxy: String::new(),
            open_browser: true,
        }
    }
}

impl Config {
    /// Defaults, then `~/.nexlist/config.json` or `./config.toml`, then the
    /// environment.
    pub fn new() -> Self {
        Self::from_sources(
            &config_json_path(),
            Path::new(CONFIG_FILE_PATH),
            |key| std::env::var(key).ok(),
        )
    }

    /// Load a specific file (`.json` or `.toml`), then apply the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_sources(
        json_path: &Path,
        toml_path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Config::default();

        let mut loaded = false;
        if json_path.exists() {
            match load_config_json::<Config>(json_path) {
                Ok(file_config) => {
                    config = file_config;
                    loaded = true;
                }
                Err(e) => log::warn!("Ignoring config file: {e}"),
            }
        }

        if !loaded && toml_path.exists() {
            match Self::read_toml(toml_path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring config file: {e}"),
            }
        }

        config.apply_env(env);
        config
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::read_toml(path),
            _ => load_config_json(path),
        }
    }

    fn read_toml(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = env("NEXLIST_API_BASE") {
            self.api_base = api_base;
        }
        if let Some(token) = env("NEXLIST_ACCESS_TOKEN") {
            self.access_token = Some(token).filter(|t| !t.trim().is_empty());
        }
        if let Some(http_proxy) = env("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Some(https_proxy) = env("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
        if let Some(open) = env("NEXLIST_OPEN_BROWSER") {
            self.open_browser = parse_bool_env(&open);
        }
    }

    /// `api_base` without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn parse_bool_env_true_values() {
        for value in ["1", "true", "TRUE", " yes ", "Y", "on"] {
            assert!(parse_bool_env(value), "value {value:?} should be true");
        }
    }

    #[test]
    fn parse_bool_env_false_values() {
        for value in ["0", "false", "no", "off", "", "  "] {
            assert!(!parse_bool_env(value), "value {value:?} should be false");
        }
    }

    #[test]
    fn defaults_when_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_sources(
            &dir.path().join("config.json"),
            &dir.path().join("config.toml"),
            no_env,
        );
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url(), DEFAULT_API_BASE);
    }

    #[test]
    fn json_file_wins_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, r#"{"api_base": "http://json.test"}"#).unwrap();
        std::fs::write(&toml_path, "api_base = \"http://toml.test\"\n").unwrap();

        let config = Config::from_sources(&json_path, &toml_path, no_env);
        assert_eq!(config.api_base, "http://json.test");
        assert!(config.open_browser);
    }

    #[test]
    fn toml_used_when_json_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, "not json").unwrap();
        std::fs::write(&toml_path, "api_base = \"http://toml.test/\"\nopen_browser = false\n")
            .unwrap();

        let config = Config::from_sources(&json_path, &toml_path, no_env);
        assert_eq!(config.base_url(), "http://toml.test");
        assert!(!config.open_browser);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        std::fs::write(&json_path, r#"{"api_base": "http://json.test"}"#).unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            ("NEXLIST_API_BASE", "http://env.test"),
            ("NEXLIST_ACCESS_TOKEN", "jwt-value"),
            ("NEXLIST_OPEN_BROWSER", "off"),
        ]);
        let config = Config::from_sources(&json_path, &dir.path().join("none.toml"), |key| {
            env.get(key).map(|v| v.to_string())
        });
        assert_eq!(config.api_base, "http://env.test");
        assert_eq!(config.access_token.as_deref(), Some("jwt-value"));
        assert!(!config.open_browser);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "api_base = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
