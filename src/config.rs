//! Configuration Management
//!
//! Handles persistent configuration storage for nimbusctl.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Default API endpoint, used when neither flag, environment nor config
/// file overrides it.
const DEFAULT_API_URL: &str = "https://api.nimbus.dev/v1";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API base URL
    #[serde(default)]
    pub api_url: Option<String>,
    /// API token
    #[serde(default)]
    pub token: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nimbusctl").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Get effective API URL (CLI flag > NIMBUS_API_URL > config > default)
    pub fn effective_api_url(&self, override_url: Option<&str>) -> Result<Url> {
        let raw = override_url
            .map(str::to_owned)
            .or_else(|| std::env::var("NIMBUS_API_URL").ok())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Url::parse(&raw).with_context(|| format!("Invalid API URL: {}", raw))
    }

    /// Get effective API token (NIMBUS_TOKEN > config)
    pub fn effective_token(&self) -> Result<String> {
        std::env::var("NIMBUS_TOKEN")
            .ok()
            .or_else(|| self.token.clone())
            .context("No API token configured. Set NIMBUS_TOKEN or add \"token\" to the config file")
    }
}
