//! Canonical model of an `/etc/hosts` file.
//!
//! This crate turns arbitrary hosts-file text into a de-duplicated,
//! conflict-resolved list of entries and writes it back out in a
//! deterministic order:
//!
//! - **Parsing**: [`parse_line`] and [`HostsDocument::parse`]
//! - **Merging**: [`HostList::add`] keeps one entry per domain and family
//! - **Ordering**: [`canonical_order`] (IPv4 first, `localhost` first,
//!   loopback addresses first, then address and domain)
//! - **Output**: Unix, Windows and JSON via [`HostList::format`] and
//!   [`HostList::dump`]
//!
//! Nothing here performs I/O; storage lives in `etchosts-client`.
//!
//! # Example
//!
//! ```rust
//! use etchosts_core::{HostsDocument, OutputFormat};
//!
//! let mut doc = HostsDocument::parse("10.0.0.1 app\n127.0.0.1 localhost\n");
//! assert_eq!(
//!     doc.format(OutputFormat::Unix),
//!     "127.0.0.1 localhost\n10.0.0.1 app\n"
//! );
//! ```

#![doc(html_root_url = "https://docs.rs/etchosts-core/0.3.0")]

pub mod address;
mod document;
mod entry;
mod error;
mod format;
mod list;
mod parser;
pub mod templates;

pub use address::{classify, loopback_surrogate, AddressKind, Family};
pub use document::{HostsDocument, LineDiagnostic};
pub use entry::HostEntry;
pub use error::{HostsError, Result};
pub use format::OutputFormat;
pub use list::{canonical_order, HostList};
pub use parser::parse_line;
