//! The de-duplicating host list.
//!
//! A [`HostList`] holds at most one entry per `(domain, family)` pair, so a
//! domain may map to one IPv4 and one IPv6 address at the same time. The
//! list is not kept sorted; [`HostList::sort`] is called by every operation
//! whose output depends on order.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::net::IpAddr;
use std::ops::Index;

use serde::Serialize;
use tracing::debug;

use crate::address::{compare_surrogates, Family};
use crate::entry::HostEntry;
use crate::error::{HostsError, Result};
use crate::format::OutputFormat;

const LOCALHOST: &str = "localhost";

/// Ordered set of host entries with merge-on-add semantics
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HostList {
    entries: Vec<HostEntry>,
}

/// Canonical ordering of two entries:
///
/// 1. IPv4 before IPv6
/// 2. `localhost` before any other domain
/// 3. Address, with `127.x.y.z` ranked as `0.x.y.z`
/// 4. Domain, byte-wise
#[must_use]
pub fn canonical_order(a: &HostEntry, b: &HostEntry) -> Ordering {
    a.is_ipv6()
        .cmp(&b.is_ipv6())
        .then_with(|| (b.domain() == LOCALHOST).cmp(&(a.domain() == LOCALHOST)))
        .then_with(|| compare_surrogates(a.address(), b.address()))
        .then_with(|| a.domain().as_bytes().cmp(b.domain().as_bytes()))
}

impl HostList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their current order
    pub fn entries(&self) -> &[HostEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HostEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostEntry> {
        self.entries.iter()
    }

    /// Merge an entry into the list.
    ///
    /// - An equal entry (same domain and address) already present: its
    ///   enabled flag becomes `existing || new`, and
    ///   [`HostsError::Duplicate`] is returned.
    /// - An entry for the same domain and family with a different address:
    ///   it is replaced by `entry` in place, and [`HostsError::Conflict`]
    ///   is returned.
    /// - Otherwise the entry is appended.
    ///
    /// Both errors are diagnostics. The list has been updated by the time
    /// they are returned and nothing is rolled back.
    pub fn add(&mut self, entry: HostEntry) -> Result<()> {
        if let Some(index) = self.index_of(&entry) {
            let existing = &mut self.entries[index];
            existing.set_enabled(existing.enabled() || entry.enabled());
            return Err(HostsError::Duplicate {
                domain: entry.domain().to_string(),
                address: entry.address(),
            });
        }

        if let Some(index) = self.entries.iter().position(|e| e.same_slot(&entry)) {
            let address = entry.address();
            let previous = std::mem::replace(&mut self.entries[index], entry);
            return Err(HostsError::Conflict {
                domain: previous.domain().to_string(),
                address,
                previous: previous.address(),
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Sort into canonical order (see [`canonical_order`]).
    pub fn sort(&mut self) {
        self.entries.sort_by(canonical_order);
    }

    pub fn contains(&self, entry: &HostEntry) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.entries.iter().any(|e| e.domain() == domain)
    }

    pub fn contains_address(&self, address: IpAddr) -> bool {
        self.entries.iter().any(|e| e.address() == address)
    }

    /// Position of an equal entry
    pub fn index_of(&self, entry: &HostEntry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    /// Position of the entry for `domain` in `family`
    pub fn index_of_domain_family(&self, domain: &str, family: Family) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(domain, family))
    }

    /// Remove the entry at `index`. Out-of-range indexes are ignored.
    ///
    /// Returns the number of entries removed (0 or 1).
    pub fn remove(&mut self, index: usize) -> usize {
        if index < self.entries.len() {
            self.entries.remove(index);
            1
        } else {
            0
        }
    }

    /// Remove both the IPv4 and the IPv6 entry for `domain`.
    pub fn remove_domain(&mut self, domain: &str) -> usize {
        self.remove_domain_family(domain, Family::Ipv4)
            + self.remove_domain_family(domain, Family::Ipv6)
    }

    pub fn remove_domain_family(&mut self, domain: &str, family: Family) -> usize {
        self.index_of_domain_family(domain, family)
            .map_or(0, |index| self.remove(index))
    }

    /// Enable the first entry for `domain`, whatever its family.
    pub fn enable(&mut self, domain: &str) -> Result<()> {
        self.set_enabled_where(domain, |e| e.domain() == domain, true)
    }

    /// Disable the first entry for `domain`, whatever its family.
    pub fn disable(&mut self, domain: &str) -> Result<()> {
        self.set_enabled_where(domain, |e| e.domain() == domain, false)
    }

    pub fn enable_family(&mut self, domain: &str, family: Family) -> Result<()> {
        self.set_enabled_where(domain, |e| e.matches(domain, family), true)
    }

    pub fn disable_family(&mut self, domain: &str, family: Family) -> Result<()> {
        self.set_enabled_where(domain, |e| e.matches(domain, family), false)
    }

    fn set_enabled_where(
        &mut self,
        domain: &str,
        pred: impl Fn(&HostEntry) -> bool,
        enabled: bool,
    ) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(pred)
            .ok_or_else(|| HostsError::NotFound {
                domain: domain.to_string(),
            })?;
        self.entries[index].set_enabled(enabled);
        Ok(())
    }

    /// All entries bound to `address`, in stored order
    pub fn filter_by_address(&self, address: IpAddr) -> Vec<&HostEntry> {
        self.entries
            .iter()
            .filter(|e| e.address() == address)
            .collect()
    }

    /// All entries for `domain` (at most one per family)
    pub fn filter_by_domain(&self, domain: &str) -> Vec<&HostEntry> {
        self.entries
            .iter()
            .filter(|e| e.domain() == domain)
            .collect()
    }

    /// The entry for `domain` in `family`, if any.
    ///
    /// There is never more than one, so this returns the first match.
    pub fn find_by_domain_family(&self, domain: &str, family: Family) -> Option<&HostEntry> {
        self.entries.iter().find(|e| e.matches(domain, family))
    }

    /// Distinct addresses in canonical order. Sorts the list first.
    pub fn unique_addresses(&mut self) -> Vec<IpAddr> {
        self.sort();
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(HostEntry::address)
            .filter(|address| seen.insert(*address))
            .collect()
    }

    /// Serialize in the requested layout. Sorts the list first.
    pub fn format(&mut self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Unix => self.format_unix(),
            OutputFormat::Windows => self.format_windows(),
        }
    }

    /// One line per address:
    ///
    /// ```text
    /// 127.0.0.1 localhost web
    /// # 127.0.0.1 old-web
    /// ```
    pub fn format_unix(&mut self) -> String {
        let mut out = String::new();

        for address in self.unique_addresses() {
            let (enabled, disabled): (Vec<&HostEntry>, Vec<&HostEntry>) = self
                .filter_by_address(address)
                .into_iter()
                .partition(|e| e.enabled());

            if !enabled.is_empty() {
                // Writing into a String cannot fail.
                let _ = writeln!(out, "{address} {}", join_domains(&enabled));
            }
            if !disabled.is_empty() {
                let _ = writeln!(out, "# {address} {}", join_domains(&disabled));
            }
        }

        out
    }

    /// One line per entry, `# `-prefixed when disabled.
    pub fn format_windows(&mut self) -> String {
        self.sort();
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(out, "{entry}");
        }
        out
    }

    /// Export all entries, in stored order, as pretty-printed JSON.
    pub fn dump(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Merge every entry from a JSON export into this list.
    ///
    /// Duplicates and conflicts are resolved by [`HostList::add`] and not
    /// reported; only malformed JSON or invalid entries fail.
    pub fn apply(&mut self, json: &str) -> Result<()> {
        let incoming: Vec<HostEntry> = serde_json::from_str(json)?;
        for entry in incoming {
            if let Err(err) = self.add(entry) {
                debug!(%err, "merged entry while applying export");
            }
        }
        Ok(())
    }
}

fn join_domains(entries: &[&HostEntry]) -> String {
    entries
        .iter()
        .map(|e| e.domain())
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromIterator<HostEntry> for HostList {
    /// Collect through [`HostList::add`], dropping merge diagnostics.
    fn from_iter<I: IntoIterator<Item = HostEntry>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            let _ = list.add(entry);
        }
        list
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a HostEntry;
    type IntoIter = std::slice::Iter<'a, HostEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Index<usize> for HostList {
    type Output = HostEntry;

    fn index(&self, index: usize) -> &HostEntry {
        &self.entries[index]
    }
}

/// Unix format of a sorted copy
impl fmt::Display for HostList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clone().format_unix())
    }
}
