//! Hosts client: the hosts model on top of a [`HostsStore`].

use etchosts_core::{HostList, HostsDocument, OutputFormat};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::ClientResult;
use crate::store::{HostsRevision, HostsStore};

/// Reads, edits and publishes a shared hosts file.
#[derive(Debug)]
pub struct HostsClient<S> {
    store: S,
    format: OutputFormat,
}

impl<S: HostsStore> HostsClient<S> {
    /// Create a client publishing in the default (Unix) layout
    pub fn new(store: S) -> Self {
        Self {
            store,
            format: OutputFormat::default(),
        }
    }

    /// Create a client using the layout from `config`
    pub fn from_config(store: S, config: &StoreConfig) -> Self {
        Self::new(store).with_format(config.format)
    }

    /// Set the layout used by [`HostsClient::put_hosts`]
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Fetch and parse the current hosts text.
    pub async fn get_hosts(&self) -> ClientResult<HostsDocument> {
        let text = self.store.fetch_current().await?;
        Ok(parse_logged(text))
    }

    /// Fetch and parse the hosts text as of `revision`.
    pub async fn get_hosts_with_revision(&self, revision: i64) -> ClientResult<HostsDocument> {
        let text = self.store.fetch_at_revision(revision).await?;
        debug!(revision, "fetched hosts at revision");
        Ok(parse_logged(text))
    }

    /// All stored values, newest version first.
    pub async fn get_hosts_history(&self) -> ClientResult<Vec<HostsRevision>> {
        self.store.fetch_history().await
    }

    /// Sort, serialize and publish `hosts`. Returns the published text.
    pub async fn put_hosts(&self, hosts: &mut HostList) -> ClientResult<String> {
        let text = hosts.format(self.format);
        self.store.publish(&text).await?;
        info!(
            entries = hosts.len(),
            format = %self.format,
            "published hosts"
        );
        Ok(text)
    }

    /// Fetch the current list, apply `edit`, and publish the result.
    ///
    /// A key that has never been written starts as an empty list. Nothing is
    /// published if `edit` fails.
    pub async fn update<F>(&self, edit: F) -> ClientResult<HostList>
    where
        F: FnOnce(&mut HostList) -> etchosts_core::Result<()>,
    {
        let mut hosts = match self.get_hosts().await {
            Ok(doc) => doc.into_hosts(),
            Err(err) if err.is_not_found() => {
                debug!("hosts key not written yet, starting empty");
                HostList::new()
            }
            Err(err) => return Err(err),
        };

        edit(&mut hosts)?;
        self.put_hosts(&mut hosts).await?;
        Ok(hosts)
    }
}

fn parse_logged(text: String) -> HostsDocument {
    let doc = HostsDocument::parse(text);
    if doc.has_merge_warnings() {
        warn!(
            diagnostics = doc.diagnostics().len(),
            "stored hosts contain duplicate or conflicting entries"
        );
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use etchosts_core::{Family, HostEntry};

    fn client() -> HostsClient<MemoryStore> {
        HostsClient::new(MemoryStore::new("/etchosts"))
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let client = client();
        let mut hosts = HostsDocument::parse("10.0.0.2 b\n10.0.0.1 a\n").into_hosts();
        let text = client.put_hosts(&mut hosts).await.unwrap();
        assert_eq!(text, "10.0.0.1 a\n10.0.0.2 b\n");

        let doc = client.get_hosts().await.unwrap();
        assert_eq!(doc.data(), text.as_bytes());
        assert_eq!(doc.hosts().len(), 2);
    }

    #[tokio::test]
    async fn test_windows_format_from_config() {
        let config = StoreConfig {
            format: OutputFormat::Windows,
            ..StoreConfig::default()
        };
        let client = HostsClient::from_config(MemoryStore::new("/etchosts"), &config);
        let mut hosts = HostsDocument::parse("10.0.0.1 a b\n").into_hosts();
        let text = client.put_hosts(&mut hosts).await.unwrap();
        assert_eq!(text, "10.0.0.1 a\n10.0.0.1 b\n");
    }

    #[tokio::test]
    async fn test_update_starts_empty() {
        let client = client();
        let hosts = client
            .update(|hosts| {
                let _ = hosts.add(HostEntry::new("localhost", "127.0.0.1", true)?);
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(
            client.store().fetch_current().await.unwrap(),
            "127.0.0.1 localhost\n"
        );
    }

    #[tokio::test]
    async fn test_update_edits_current() {
        let client = client();
        client.store().publish("10.0.0.1 a\n::1 a\n").await.unwrap();

        client
            .update(|hosts| hosts.disable_family("a", Family::Ipv6))
            .await
            .unwrap();
        assert_eq!(
            client.store().fetch_current().await.unwrap(),
            "10.0.0.1 a\n# ::1 a\n"
        );
    }

    #[tokio::test]
    async fn test_failed_edit_publishes_nothing() {
        let client = client();
        client.store().publish("10.0.0.1 a\n").await.unwrap();

        let err = client
            .update(|hosts| hosts.enable("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Hosts(ref e) if e.is_not_found()));
        assert_eq!(client.store().revision().await, 1);
    }

    #[tokio::test]
    async fn test_revisions_and_history() {
        let client = client();
        let mut hosts = HostsDocument::parse("10.0.0.1 a\n").into_hosts();
        client.put_hosts(&mut hosts).await.unwrap();
        let _ = hosts.add(HostEntry::new("a", "10.0.0.9", true).unwrap());
        client.put_hosts(&mut hosts).await.unwrap();

        let old = client.get_hosts_with_revision(1).await.unwrap();
        let a = old.hosts().find_by_domain_family("a", Family::Ipv4).unwrap();
        assert_eq!(a.address().to_string(), "10.0.0.1");

        let history = client.get_hosts_history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].hosts, "10.0.0.9 a\n");
    }

    struct BrokenStore;

    #[async_trait]
    impl HostsStore for BrokenStore {
        async fn fetch_current(&self) -> ClientResult<String> {
            Err(ClientError::Store("connection refused".into()))
        }

        async fn fetch_at_revision(&self, _revision: i64) -> ClientResult<String> {
            Err(ClientError::Store("connection refused".into()))
        }

        async fn fetch_history(&self) -> ClientResult<Vec<HostsRevision>> {
            Err(ClientError::Store("connection refused".into()))
        }

        async fn publish(&self, _hosts: &str) -> ClientResult<()> {
            Err(ClientError::Store("connection refused".into()))
        }
    }

    #[test]
    fn test_store_errors_propagate() {
        let client = HostsClient::new(BrokenStore);
        let err = tokio_test::block_on(client.update(|_| Ok(()))).unwrap_err();
        assert!(matches!(err, ClientError::Store(_)));

        let mut hosts = HostList::new();
        let err = tokio_test::block_on(client.put_hosts(&mut hosts)).unwrap_err();
        assert!(matches!(err, ClientError::Store(_)));
    }
}
