use serde::{Deserialize, Serialize};

use crate::models::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// INTELLIA backend API configuration
    pub backend: BackendConfig,
    /// Role used when a request does not name one
    pub default_role: Role,
}

/// Where and how to reach the INTELLIA backend API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL for the backend API (e.g. "http://localhost:8000").
    pub base_url: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (capped at 300).
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            backend: BackendConfig::default(),
            default_role: Role::General,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparseable values are
    /// ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("INTELLIA_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(url) = lookup("INTELLIA_API_BASE_URL") {
            config.backend.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(val) = lookup("INTELLIA_CONNECT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.backend.connect_timeout_secs = v;
            }
        }
        if let Some(val) = lookup("INTELLIA_REQUEST_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.backend.request_timeout_secs = v.min(300);
            }
        }
        if let Some(val) = lookup("INTELLIA_DEFAULT_ROLE") {
            match val.parse() {
                Ok(role) => config.default_role = role,
                Err(_) => tracing::warn!("Ignoring unknown INTELLIA_DEFAULT_ROLE: {val}"),
            }
        }

        config
    }
}
