//! A hosts document: the raw text plus the list parsed from it.

use tracing::{debug, warn};

use crate::error::HostsError;
use crate::format::OutputFormat;
use crate::list::HostList;
use crate::parser::parse_line;

/// A problem found on one input line. Line numbers start at 1.
#[derive(Debug)]
pub struct LineDiagnostic {
    pub line: usize,
    pub error: HostsError,
}

/// Hosts text and its parsed, sorted [`HostList`].
///
/// The raw bytes are kept exactly as given. Output is re-derived from the
/// list, so blank lines, comment-only lines and spacing are not preserved.
#[derive(Debug, Default)]
pub struct HostsDocument {
    data: Vec<u8>,
    hosts: HostList,
    diagnostics: Vec<LineDiagnostic>,
}

impl HostsDocument {
    /// Parse hosts text line by line.
    ///
    /// Bad lines never abort parsing: parse failures and merge diagnostics
    /// are collected per line and the rest of the input is still read.
    /// Invalid UTF-8 is decoded lossily for parsing only.
    pub fn parse(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let mut hosts = HostList::new();
        let mut diagnostics = Vec::new();

        for (index, line) in String::from_utf8_lossy(&data).split('\n').enumerate() {
            let line_no = index + 1;
            let entries = match parse_line(line) {
                Ok(entries) => entries,
                Err(error) => {
                    // Blank lines are expected; everything else is worth a trace.
                    if !line.trim().is_empty() {
                        debug!(line = line_no, %error, "skipping unparsable line");
                        diagnostics.push(LineDiagnostic {
                            line: line_no,
                            error,
                        });
                    }
                    continue;
                }
            };

            for entry in entries {
                if let Err(error) = hosts.add(entry) {
                    warn!(line = line_no, %error, "merged inconsistent entry");
                    diagnostics.push(LineDiagnostic {
                        line: line_no,
                        error,
                    });
                }
            }
        }

        hosts.sort();
        debug!(
            entries = hosts.len(),
            diagnostics = diagnostics.len(),
            "parsed hosts document"
        );

        Self {
            data,
            hosts,
            diagnostics,
        }
    }

    /// The bytes this document was parsed from
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub const fn hosts(&self) -> &HostList {
        &self.hosts
    }

    pub fn hosts_mut(&mut self) -> &mut HostList {
        &mut self.hosts
    }

    pub fn into_hosts(self) -> HostList {
        self.hosts
    }

    /// Per-line problems found while parsing, in line order
    pub fn diagnostics(&self) -> &[LineDiagnostic] {
        &self.diagnostics
    }

    /// True if any line duplicated or conflicted with an earlier one
    pub fn has_merge_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.error.is_warning())
    }

    /// Serialize the current list in the requested layout.
    pub fn format(&mut self, format: OutputFormat) -> String {
        self.hosts.format(format)
    }
}
