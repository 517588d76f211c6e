use std::net::IpAddr;

use thiserror::Error;

/// Result type alias for hosts operations
pub type Result<T> = std::result::Result<T, HostsError>;

/// Errors produced while parsing, merging or querying host entries
#[derive(Error, Debug)]
pub enum HostsError {
    /// Malformed line, empty domain or invalid address token
    #[error("parse error: {0}")]
    Parse(String),

    /// An identical entry already existed; its enabled flag was merged
    #[error("duplicate hostname entry for {domain} -> {address}")]
    Duplicate {
        /// Domain of the merged entry
        domain: String,
        /// Address of the merged entry
        address: IpAddr,
    },

    /// An entry for the same domain and family existed with another address
    /// and was replaced
    #[error("conflicting hostname entries for {domain} -> {address} and -> {previous}")]
    Conflict {
        /// Domain of the replaced entry
        domain: String,
        /// Address that won
        address: IpAddr,
        /// Address that was replaced
        previous: IpAddr,
    },

    /// No entry matched the requested domain
    #[error("hostname not found: {domain}")]
    NotFound {
        /// Domain that was looked up
        domain: String,
    },

    /// Family argument was neither IPv4 nor IPv6
    #[error("family argument must be 4 or 6, got {0}")]
    InvalidFamily(String),

    /// JSON export/import failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HostsError {
    /// Returns true for merge diagnostics (duplicate or conflict).
    ///
    /// The collection has already been mutated when one of these is
    /// returned, so callers usually log it and carry on.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::Conflict { .. })
    }

    /// Returns true if the error came from parsing input text
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if a lookup target was missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
