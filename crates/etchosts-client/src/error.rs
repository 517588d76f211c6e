//! Error types for the hosts storage client.

use etchosts_core::HostsError;
use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors from configuration, credential loading and store access
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration is invalid or missing required fields.
    #[error("config error: {0}")]
    Config(String),

    /// A TLS credential could not be read or decoded.
    #[error("failed to load {name}: {reason}")]
    Credential {
        /// Which credential (`ca`, `cert` or `private_key`)
        name: &'static str,
        reason: String,
    },

    /// The hosts key has never been written.
    #[error("hosts key not found: {key}")]
    KeyNotFound { key: String },

    /// The requested revision does not exist (yet).
    #[error("revision {revision} not found")]
    RevisionNotFound { revision: i64 },

    /// Backend failure reported by a store implementation.
    #[error("store error: {0}")]
    Store(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML config parse error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Hosts model error.
    #[error(transparent)]
    Hosts(#[from] HostsError),
}

impl ClientError {
    /// Returns true if the key or revision does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound { .. } | Self::RevisionNotFound { .. }
        )
    }
}
