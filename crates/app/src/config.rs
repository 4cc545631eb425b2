//! Application configuration
//!
//! Loaded from `newsdesk.toml` under the platform config directory; every
//! field has a default so a missing file is fine.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base origin of the platform API
    pub api_base_url: String,
    /// Idle minutes before the session is flagged expired
    pub idle_timeout_minutes: u64,
    /// Seconds between idle checks
    pub session_check_secs: u64,
    /// Seconds between news feed auto-refreshes
    pub feed_refresh_secs: u64,
    /// Default page size for list requests
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api/".to_string(),
            idle_timeout_minutes: 30,
            session_check_secs: 60,
            feed_refresh_secs: 300,
            page_size: 10,
        }
    }
}

impl AppConfig {
    /// Load from the default location; defaults when the file is absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Config file location under the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "newsdesk", "newsdesk")
            .map(|dirs| dirs.config_dir().join("newsdesk.toml"))
    }

    /// Database location under the platform data directory
    pub fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "newsdesk", "newsdesk").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;
        Ok(dirs.data_dir().join("newsdesk.db"))
    }

    pub fn idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.idle_timeout_minutes as i64)
    }

    pub fn session_check_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.session_check_secs)
    }

    pub fn feed_refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.feed_refresh_secs)
    }
}
