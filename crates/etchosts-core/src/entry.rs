//! The host entry record.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::address::{parse_address, Family};
use crate::error::{HostsError, Result};

/// One domain-to-address binding with an enabled flag.
///
/// Identity is `(domain, address)`; the family follows from the address.
/// The enabled flag is mergeable state and does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct HostEntry {
    domain: String,
    address: IpAddr,
    enabled: bool,
}

/// Unvalidated wire shape used by export/import
#[derive(Deserialize)]
struct RawEntry {
    domain: String,
    address: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

/// Characters that separate tokens on a hosts line. `\r` is included so
/// CRLF input parses like LF input.
pub(crate) const SEPARATORS: [char; 3] = [' ', '\t', '\r'];

const fn default_enabled() -> bool {
    true
}

impl TryFrom<RawEntry> for HostEntry {
    type Error = HostsError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        Self::new(raw.domain, &raw.address, raw.enabled)
    }
}

impl HostEntry {
    /// Build an entry from a domain and an address token.
    ///
    /// Fails with [`HostsError::Parse`] if the domain is empty or contains a
    /// space, tab, line break or `#`, or if the address is not an IPv4/IPv6
    /// literal.
    pub fn new(domain: impl Into<String>, address: &str, enabled: bool) -> Result<Self> {
        let address = parse_address(address)?;
        Self::with_address(domain, address, enabled)
    }

    /// Build an entry from an already parsed address.
    pub fn with_address(domain: impl Into<String>, address: IpAddr, enabled: bool) -> Result<Self> {
        let domain = domain.into();
        validate_domain(&domain)?;
        Ok(Self {
            domain,
            address,
            enabled,
        })
    }

    /// Domain name, exactly as written
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Bound address
    pub const fn address(&self) -> IpAddr {
        self.address
    }

    /// Family of the bound address
    pub const fn family(&self) -> Family {
        Family::of(&self.address)
    }

    /// Returns true if the address is IPv6
    pub const fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }

    /// Returns false for entries written behind a leading `#`
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True if both entries bind the same domain within the same family
    pub(crate) fn same_slot(&self, other: &Self) -> bool {
        self.domain == other.domain && self.family() == other.family()
    }

    pub(crate) fn matches(&self, domain: &str, family: Family) -> bool {
        self.domain == domain && self.family() == family
    }
}

fn validate_domain(domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(HostsError::parse("domain is empty"));
    }
    if domain.contains(|c: char| SEPARATORS.contains(&c) || c == '\n' || c == '#') {
        return Err(HostsError::parse(format!(
            "domain '{domain}' contains a separator or '#'"
        )));
    }
    Ok(())
}

impl PartialEq for HostEntry {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.address == other.address
    }
}

impl Eq for HostEntry {}

/// Per-entry line: `<address> <domain>`, prefixed with `# ` when disabled
impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enabled {
            f.write_str("# ")?;
        }
        write!(f, "{} {}", self.address, self.domain)
    }
}
