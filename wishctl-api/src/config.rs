//! Endpoint configuration for the wishctl tools
//!
//! The API base URL is the only deploy-environment knob. Resolution
//! priority: flag/env > `~/.wishctl/config.toml` > default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wishctl_core::{Result, WishError};

/// Default backend endpoint (local backend development)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8004";

/// Configuration for the wishctl ecosystem
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishConfig {
    pub api: Option<ApiConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
}

impl WishConfig {
    /// Config file path: ~/.wishctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wishctl/config.toml")
    }

    /// Load config from the default path; a missing file is an empty config
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|err| {
            WishError::config(format!("failed to read {}: {err}", path.display()))
        })?;

        toml::from_str(&content).map_err(|err| {
            WishError::config(format!("invalid TOML in {}: {err}", path.display()))
        })
    }
}

/// Resolve the API base URL. Priority: flag/env > config.toml > default.
pub fn resolve_endpoint(flag: Option<String>) -> String {
    if let Some(endpoint) = flag {
        return endpoint;
    }

    if let Ok(config) = WishConfig::load() {
        if let Some(endpoint) = config.api.and_then(|api| api.endpoint) {
            return endpoint;
        }
    }

    DEFAULT_ENDPOINT.to_string()
}
