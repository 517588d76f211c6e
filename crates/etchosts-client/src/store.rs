//! The storage seam behind [`crate::HostsClient`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

/// One historical value of the hosts key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostsRevision {
    /// Store-wide revision at which this value was written
    pub revision: i64,
    /// Per-key write counter, starting at 1
    pub version: i64,
    /// Serialized hosts text
    pub hosts: String,
}

/// A store holding serialized hosts text under one fixed key.
///
/// Implementations own timeouts, retries and transport security. The hosts
/// model never sees revisions, only the text going in and out.
#[async_trait]
pub trait HostsStore: Send + Sync {
    /// Latest hosts text.
    async fn fetch_current(&self) -> ClientResult<String>;

    /// Hosts text as of `revision`.
    async fn fetch_at_revision(&self, revision: i64) -> ClientResult<String>;

    /// Every stored value, newest version first.
    async fn fetch_history(&self) -> ClientResult<Vec<HostsRevision>>;

    /// Store `hosts` as the new current value.
    async fn publish(&self, hosts: &str) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn test_history_exports_as_json() {
        let store = MemoryStore::new("/etchosts");
        store.publish("10.0.0.1 a\n").await.unwrap();
        store.publish("10.0.0.2 a\n").await.unwrap();

        let history = store.fetch_history().await.unwrap();
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "revision": 2, "version": 2, "hosts": "10.0.0.2 a\n" },
                { "revision": 1, "version": 1, "hosts": "10.0.0.1 a\n" },
            ])
        );

        let back: Vec<HostsRevision> = serde_json::from_value(json).unwrap();
        assert_eq!(back, history);
    }
}
