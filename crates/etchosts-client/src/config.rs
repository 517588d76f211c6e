//! Store configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use etchosts_core::OutputFormat;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Connection and layout settings for a shared hosts store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store endpoints, e.g. `https://10.0.0.1:2379`.
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Key holding the serialized hosts text (default: `/etchosts`).
    #[serde(default = "default_key")]
    pub key: String,

    /// CA certificate: a path (leading `~` allowed) or base64 PEM data.
    #[serde(default)]
    pub ca: String,

    /// Client certificate, same forms as `ca`.
    #[serde(default)]
    pub cert: String,

    /// Client private key, same forms as `ca`.
    #[serde(default)]
    pub private_key: String,

    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_dial_timeout")]
    pub dial_timeout_secs: u64,

    /// Per-request timeout in seconds (default: 3).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Layout used when publishing (default: unix).
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            key: default_key(),
            ca: String::new(),
            cert: String::new(),
            private_key: String::new(),
            dial_timeout_secs: default_dial_timeout(),
            request_timeout_secs: default_request_timeout(),
            format: OutputFormat::default(),
        }
    }
}

impl StoreConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> ClientResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Platform config path, e.g. `~/.config/etchosts/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("etchosts").join("config.toml"))
    }

    /// Check that credentials and endpoints are present.
    pub fn validate(&self) -> ClientResult<()> {
        if self.ca.is_empty() || self.cert.is_empty() || self.private_key.is_empty() {
            return Err(ClientError::Config("certs config is empty".into()));
        }
        if self.endpoints.is_empty() {
            return Err(ClientError::Config("endpoints config is empty".into()));
        }
        if self.key.is_empty() {
            return Err(ClientError::Config("hosts key is empty".into()));
        }
        Ok(())
    }

    /// Connect timeout for network-backed store implementations
    pub const fn dial_timeout(&self) -> Duration {
        Duration::from_secs(self.dial_timeout_secs)
    }

    /// Per-request timeout for network-backed store implementations
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Default value functions for serde.
fn default_key() -> String {
    String::from("/etchosts")
}

const fn default_dial_timeout() -> u64 {
    5
}

const fn default_request_timeout() -> u64 {
    3
}
