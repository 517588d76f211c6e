//! Address classification and the loopback sort key.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HostsError, Result};

/// IP family of a host entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// IPv4 (`A` records)
    Ipv4,
    /// IPv6 (`AAAA` records)
    Ipv6,
}

impl Family {
    /// Family of a parsed address
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Self::Ipv4,
            IpAddr::V6(_) => Self::Ipv6,
        }
    }

    /// Numeric IP version (4 or 6)
    #[must_use]
    pub const fn version(self) -> u8 {
        match self {
            Self::Ipv4 => 4,
            Self::Ipv6 => 6,
        }
    }

    /// Returns true for IPv6
    #[must_use]
    pub const fn is_ipv6(self) -> bool {
        matches!(self, Self::Ipv6)
    }
}

impl TryFrom<u8> for Family {
    type Error = HostsError;

    fn try_from(version: u8) -> Result<Self> {
        match version {
            4 => Ok(Self::Ipv4),
            6 => Ok(Self::Ipv6),
            other => Err(HostsError::InvalidFamily(other.to_string())),
        }
    }
}

impl FromStr for Family {
    type Err = HostsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(Self::Ipv4),
            "6" | "v6" | "ipv6" => Ok(Self::Ipv6),
            _ => Err(HostsError::InvalidFamily(s.to_string())),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => f.write_str("IPv4"),
            Self::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// Result of classifying a textual address token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// Strict dotted-quad IPv4 literal
    Ipv4,
    /// IPv6 literal
    Ipv6,
    /// Neither
    Invalid,
}

/// Classify a token as IPv4, IPv6 or invalid.
///
/// IPv4 is tried first. Zone suffixes (`fe80::1%lo0`) and octets with
/// leading zeros are rejected.
#[must_use]
pub fn classify(token: &str) -> AddressKind {
    if token.parse::<Ipv4Addr>().is_ok() {
        AddressKind::Ipv4
    } else if token.parse::<std::net::Ipv6Addr>().is_ok() {
        AddressKind::Ipv6
    } else {
        AddressKind::Invalid
    }
}

/// Parse an address token, failing with [`HostsError::Parse`] when
/// [`classify`] would report it invalid.
pub fn parse_address(token: &str) -> Result<IpAddr> {
    token
        .parse::<IpAddr>()
        .map_err(|e| HostsError::parse(format!("invalid IP address '{token}': {e}")))
}

/// Sort key that moves `127.x.y.z` to `0.x.y.z`.
///
/// Only used for ordering; the displayed address never changes.
#[must_use]
pub fn loopback_surrogate(address: IpAddr) -> IpAddr {
    match address {
        IpAddr::V4(v4) => {
            let [first, b, c, d] = v4.octets();
            if first == 127 {
                IpAddr::V4(Ipv4Addr::new(0, b, c, d))
            } else {
                address
            }
        }
        IpAddr::V6(_) => address,
    }
}

/// Compare two addresses of the same family by their loopback surrogates,
/// most significant byte first.
///
/// Addresses of different families compare IPv4 first, though the host
/// list comparator resolves family before ever reaching this point.
#[must_use]
pub fn compare_surrogates(a: IpAddr, b: IpAddr) -> Ordering {
    match (loopback_surrogate(a), loopback_surrogate(b)) {
        (IpAddr::V4(x), IpAddr::V4(y)) => x.octets().cmp(&y.octets()),
        (IpAddr::V6(x), IpAddr::V6(y)) => x.octets().cmp(&y.octets()),
        (IpAddr::V4(_), IpAddr::V6(_)) => Ordering::Less,
        (IpAddr::V6(_), IpAddr::V4(_)) => Ordering::Greater,
    }
}
