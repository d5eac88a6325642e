use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Base URL used when no configuration is present.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const CONFIG_FILE_PATH: &str = "soliris.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the SOLIRIS backend, without a trailing slash.
    pub api_base: Option<String>,
}

fn soliris_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".soliris")
}

fn soliris_config_json_path() -> PathBuf {
    soliris_dir().join("config.json")
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration, layering `~/.soliris/config.json`, then a
    /// local `soliris.toml`, then environment overrides.
    pub fn new() -> Self {
        let mut config = Config { api_base: None };

        let mut loaded = false;
        let json_path = soliris_config_json_path();
        if json_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&json_path) {
                if let Ok(file_config) = serde_json::from_str::<Config>(&content) {
                    config = file_config;
                    loaded = true;
                }
            }
        }

        if !loaded && std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(api_base) = std::env::var("SOLIRIS_API_BASE") {
            config.api_base = Some(api_base);
        }
        config
    }

    /// Construct a config pointing at an explicit base URL.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Config {
            api_base: Some(api_base.into()),
        }
    }

    /// Effective base URL, with the trailing slash stripped.
    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .map(|base| base.trim_end_matches('/'))
            .unwrap_or(DEFAULT_API_BASE)
    }
}
