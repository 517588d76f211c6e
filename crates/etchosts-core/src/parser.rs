//! Line-level hosts-file parsing.
//!
//! A line is `<address> <domain> [<domain>...]`, optionally disabled by a
//! leading `#`. Anything after a further `#` is a comment.

use crate::address::parse_address;
use crate::entry::{HostEntry, SEPARATORS};
use crate::error::{HostsError, Result};

/// Parse one line into zero or more entries sharing the same address.
///
/// - A blank line is a [`HostsError::Parse`].
/// - A leading `#` (after leading spaces or tabs) marks every entry on the
///   line as disabled. It is the only disable marker.
/// - Text from the next `#` onwards is dropped.
/// - Tabs and runs of spaces separate tokens. Other Unicode whitespace is
///   part of a token.
/// - The first token must be an address. With no domain tokens after it the
///   result is empty.
///
/// Any invalid token fails the whole line; no partial result is returned.
pub fn parse_line(line: &str) -> Result<Vec<HostEntry>> {
    let mut rest = line.trim_start_matches(SEPARATORS);
    if rest.is_empty() {
        return Err(HostsError::parse("line is blank"));
    }

    let mut enabled = true;
    if let Some(stripped) = rest.strip_prefix('#') {
        enabled = false;
        rest = stripped;
    }

    let payload = rest.split('#').next().unwrap_or_default();
    let mut tokens = payload.split(SEPARATORS).filter(|t| !t.is_empty());

    let Some(address) = tokens.next() else {
        return Ok(Vec::new());
    };
    let address = parse_address(address)?;

    tokens
        .map(|domain| HostEntry::with_address(domain, address, enabled))
        .collect()
}
