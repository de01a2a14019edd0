//! Client configuration.
//!
//! Configuration is stored in `.triage/config.yaml` and includes:
//! - The backend base URL
//! - The request timeout in seconds
//!
//! The backend URL can be overridden with the `TRIAGE_BACKEND_URL`
//! environment variable, which takes precedence over the file.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

pub const CONFIG_DIR: &str = ".triage";
const CONFIG_FILE: &str = "config.yaml";
const BACKEND_URL_ENV: &str = "TRIAGE_BACKEND_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket backend API
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_backend_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from `.triage/config.yaml`, falling back to
    /// defaults if the file does not exist. The `TRIAGE_BACKEND_URL`
    /// environment variable overrides the file value.
    pub fn load() -> Result<Self> {
        let mut config = match fs::read_to_string(Self::path()) {
            Ok(content) => serde_yaml_ng::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(e.into()),
        };

        if let Ok(url) = env::var(BACKEND_URL_ENV)
            && !url.is_empty()
        {
            config.backend_url = url;
        }

        Ok(config)
    }

    /// Write configuration to `.triage/config.yaml`, creating the directory
    /// if needed.
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(CONFIG_DIR)?;
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(Self::path(), content)?;
        Ok(())
    }

    pub fn path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Set a configuration value by dotted key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend_url" => self.backend_url = value.to_string(),
            "request_timeout" => {
                self.request_timeout = value.parse().map_err(|_| {
                    TriageError::Config(format!("invalid request_timeout '{value}'"))
                })?;
            }
            _ => return Err(TriageError::Config(format!("unknown key '{key}'"))),
        }
        Ok(())
    }

    /// Get a configuration value by dotted key name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "backend_url" => Ok(self.backend_url.clone()),
            "request_timeout" => Ok(self.request_timeout.to_string()),
            _ => Err(TriageError::Config(format!("unknown key '{key}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8000/api");
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut config = Config::default();
        config.set("backend_url", "http://tickets.internal/api").unwrap();
        assert_eq!(
            config.get("backend_url").unwrap(),
            "http://tickets.internal/api"
        );

        config.set("request_timeout", "5").unwrap();
        assert_eq!(config.request_timeout, 5);

        assert!(config.set("request_timeout", "soon").is_err());
        assert!(config.set("nope", "x").is_err());
        assert!(config.get("nope").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = Config::default();
        config.backend_url = "http://example.com/api".to_string();
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed.backend_url, config.backend_url);
        assert_eq!(parsed.request_timeout, 30);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: Config = serde_yaml_ng::from_str("backend_url: http://x/api\n").unwrap();
        assert_eq!(parsed.backend_url, "http://x/api");
        assert_eq!(parsed.request_timeout, 30);
    }
}
