//! In-process [`HostsStore`] with revision tracking.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::store::{HostsRevision, HostsStore};

/// Keeps every published value of one key.
///
/// Revisions are store-wide and increase on every publish; versions count
/// writes to the key. Useful for tests and for single-node setups.
#[derive(Debug)]
pub struct MemoryStore {
    key: String,
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    revision: i64,
    history: Vec<HostsRevision>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: RwLock::new(State::default()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current store-wide revision (0 before the first publish)
    pub async fn revision(&self) -> i64 {
        self.state.read().await.revision
    }

    fn key_not_found(&self) -> ClientError {
        ClientError::KeyNotFound {
            key: self.key.clone(),
        }
    }
}

#[async_trait]
impl HostsStore for MemoryStore {
    async fn fetch_current(&self) -> ClientResult<String> {
        let state = self.state.read().await;
        state
            .history
            .last()
            .map(|r| r.hosts.clone())
            .ok_or_else(|| self.key_not_found())
    }

    async fn fetch_at_revision(&self, revision: i64) -> ClientResult<String> {
        let state = self.state.read().await;
        if revision < 1 || revision > state.revision {
            return Err(ClientError::RevisionNotFound { revision });
        }
        state
            .history
            .iter()
            .rev()
            .find(|r| r.revision <= revision)
            .map(|r| r.hosts.clone())
            .ok_or_else(|| self.key_not_found())
    }

    async fn fetch_history(&self) -> ClientResult<Vec<HostsRevision>> {
        let state = self.state.read().await;
        if state.history.is_empty() {
            return Err(self.key_not_found());
        }
        let mut history = state.history.clone();
        history.sort_by(|a, b| b.version.cmp(&a.version));
        Ok(history)
    }

    async fn publish(&self, hosts: &str) -> ClientResult<()> {
        let mut state = self.state.write().await;
        state.revision += 1;
        let version = state.history.last().map_or(1, |r| r.version + 1);
        let revision = state.revision;
        state.history.push(HostsRevision {
            revision,
            version,
            hosts: hosts.to_string(),
        });
        debug!(key = %self.key, revision, version, bytes = hosts.len(), "stored hosts");
        Ok(())
    }
}
