//! Configuration for the review CLI
//!
//! Layered in this order, later layers winning:
//! 1. built-in defaults
//! 2. an optional TOML file (`--config`)
//! 3. environment (`NEC_GATEWAY_URL`, `NEC_VERSION`, `NEC_REVIEW_DATA_DIR`)
//! 4. command-line flags

use anyhow::Context;
use analysis_client::config::{DEFAULT_GATEWAY_URL, DEFAULT_NEC_VERSION};
use analysis_client::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory under the platform data dir
const APP_DIR: &str = "nec-review";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gateway: GatewaySection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewaySection {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_nec_version")]
    pub nec_version: String,
}

fn default_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

fn default_nec_version() -> String {
    DEFAULT_NEC_VERSION.to_string()
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            url: default_url(),
            nec_version: default_nec_version(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageSection {
    /// Where documents are persisted; platform data dir when unset
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Defaults, then the file if one was given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overlay environment variables
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        if let Some(url) = var("NEC_GATEWAY_URL") {
            self.gateway.url = url;
        }
        if let Some(version) = var("NEC_VERSION") {
            self.gateway.nec_version = version;
        }
        if let Some(dir) = var("NEC_REVIEW_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(&self.gateway.url).with_nec_version(&self.gateway.nec_version)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }
}

/// Get platform-specific data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.url, "http://localhost:8000");
        assert_eq!(config.gateway.nec_version, "2023");
        assert!(config.data_dir().ends_with("nec-review"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AppConfig::from_str(
            r#"
            [gateway]
            url = "https://nec.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway.url, "https://nec.example.com/");
        assert_eq!(config.gateway.nec_version, "2023");
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(
            config.gateway_config().endpoint("/analyze-file"),
            "https://nec.example.com/analyze-file"
        );
    }

    #[test]
    fn test_parse_full_file() {
        let config = AppConfig::from_str(
            r#"
            [gateway]
            url = "http://10.0.0.5:8000"
            nec_version = "2020"

            [storage]
            data_dir = "/var/lib/nec-review"
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway_config().nec_version, "2020");
        assert_eq!(config.data_dir(), PathBuf::from("/var/lib/nec-review"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AppConfig::from_str("[gateway\nurl = 1").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nec-review.toml");
        fs::write(&path, "[gateway]\nnec_version = \"2017\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.gateway.nec_version, "2017");

        assert!(AppConfig::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let vars: HashMap<&str, &str> = [
            ("NEC_GATEWAY_URL", "http://gateway:9000"),
            ("NEC_REVIEW_DATA_DIR", "/tmp/nec"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::from_str("[gateway]\nurl = \"http://file:1\"\n").unwrap();
        config.apply_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.gateway.url, "http://gateway:9000");
        assert_eq!(config.gateway.nec_version, "2023");
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/nec"));
    }
}
