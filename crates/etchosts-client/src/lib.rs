//! Storage seam for shared hosts files.
//!
//! The hosts model in `etchosts-core` is text in, text out. This crate puts
//! it on top of a revision-aware key/value store:
//!
//! - [`HostsStore`]: the trait a consensus-store backend implements
//! - [`MemoryStore`]: an in-process store with full revision history
//! - [`HostsClient`]: fetch, edit and publish hosts through any store
//! - [`StoreConfig`] and [`TlsMaterial`]: TOML config and credential loading
//!
//! # Example
//!
//! ```rust,ignore
//! use etchosts_client::{HostsClient, MemoryStore};
//! use etchosts_core::HostEntry;
//!
//! let client = HostsClient::new(MemoryStore::new("/etchosts"));
//! client
//!     .update(|hosts| {
//!         let _ = hosts.add(HostEntry::new("db", "10.0.0.7", true)?);
//!         Ok(())
//!     })
//!     .await?;
//! ```

#![doc(html_root_url = "https://docs.rs/etchosts-client/0.3.0")]

mod client;
mod config;
mod error;
mod memory;
mod store;
mod tls;

pub use client::HostsClient;
pub use config::StoreConfig;
pub use error::{ClientError, ClientResult};
pub use memory::MemoryStore;
pub use store::{HostsRevision, HostsStore};
pub use tls::{expand_home, TlsMaterial};
