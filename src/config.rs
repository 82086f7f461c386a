//! Configuration handling for the registration client

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "HIREWAVE_API_URL";

/// Default API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// User configuration for the registration client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterConfig {
    /// Base URL of the HireWave API
    pub api_base_url: Option<String>,
    /// How long notifications stay visible, in milliseconds
    pub toast_duration_ms: Option<u64>,
}

impl RegisterConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "hirewave", "hirewave-register")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: RegisterConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// API base URL: environment override, then config file, then default
    pub fn api_base_url(&self) -> String {
        Self::resolve_api_base_url(std::env::var(API_URL_ENV).ok(), self.api_base_url.as_deref())
    }

    fn resolve_api_base_url(env: Option<String>, configured: Option<&str>) -> String {
        env.filter(|v| !v.trim().is_empty())
            .or_else(|| configured.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }
}
