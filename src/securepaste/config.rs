use crate::error::{PasteError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const BASE_URL_ENV: &str = "SECUREPASTE_URL";
/// Overrides the platform config directory.
pub const HOME_ENV: &str = "SECUREPASTE_HOME";

/// Client configuration, stored as `config.json` in the user's config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL of the paste service; `/api/pastes` is appended per request
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size used when a listing command does not pass one
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout. Unset means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.set_base_url(&base_url.into());
        config
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: ClientConfig = serde_json::from_str(&content)?;
        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Applies `SECUREPASTE_URL` when it is set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.set_base_url(&url);
            }
        }
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = normalize_base_url(url);
    }

    pub fn set_page_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(PasteError::Config("page-size must be at least 1".into()));
        }
        self.page_size = size;
        Ok(())
    }

    /// Value of a user-facing key (`base-url`, `page-size`, `timeout`).
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "page-size" => Some(self.page_size.to_string()),
            "timeout" => Some(
                self.timeout_secs
                    .map(|s| format!("{}s", s))
                    .unwrap_or_else(|| "default".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "base-url" => {
                if value.trim().is_empty() {
                    return Err("base-url must not be empty".to_string());
                }
                self.set_base_url(value);
                Ok(())
            }
            "page-size" => {
                let size: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid page-size: {}", value))?;
                self.set_page_size(size).map_err(|e| e.to_string())
            }
            "timeout" => {
                if value == "default" || value == "none" {
                    self.timeout_secs = None;
                    return Ok(());
                }
                let secs: u64 = value
                    .trim_end_matches('s')
                    .parse()
                    .map_err(|_| format!("Invalid timeout: {}", value))?;
                self.timeout_secs = Some(secs);
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["base-url", "page-size", "timeout"]
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// `{base_url}/api/pastes`
    pub fn api_base(&self) -> String {
        format!("{}{}", self.base_url, crate::backend::API_PREFIX)
    }
}

/// `$SECUREPASTE_HOME` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "securepaste", "securepaste")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PasteError::Config("Could not determine config dir".into()))
}

/// Strips whitespace and trailing slashes.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
