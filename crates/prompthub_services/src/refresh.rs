use std::sync::Arc;

use anyhow::Context as _;
use futures::future::join_all;
use prompthub_domain::{Error, PromptBody, PromptName, PromptSource};
use tracing::{debug, warn};

use crate::PromptCache;

/// What a background refresh did to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched body differed (or nothing was cached) and was stored under
    /// the given version.
    Replaced(u64),
    /// The fetched body was structurally equal to the cached one.
    Unchanged,
    /// The fetch failed; the cached body stays authoritative.
    Failed,
}

/// Moves prompt bodies from the source into the cache.
pub struct RefreshCoordinator<S> {
    source: Arc<S>,
    cache: Arc<PromptCache>,
}

impl<S> Clone for RefreshCoordinator<S> {
    fn clone(&self) -> Self {
        Self { source: self.source.clone(), cache: self.cache.clone() }
    }
}

impl<S: PromptSource> RefreshCoordinator<S> {
    pub fn new(source: Arc<S>, cache: Arc<PromptCache>) -> Self {
        Self { source, cache }
    }

    /// Fetches `name` and stores it unconditionally. Nothing is written when
    /// the fetch fails.
    pub async fn fetch_and_store(&self, name: &PromptName) -> anyhow::Result<Arc<PromptBody>> {
        let body = self.fetch(name).await?;
        let entry = self.cache.store(name.clone(), body).await;
        debug!(prompt = %name, version = entry.version, "Stored prompt");
        Ok(entry.body)
    }

    /// Re-fetches `name` and replaces the cached body only when it changed.
    /// Failures are logged and otherwise ignored.
    pub async fn refresh(&self, name: &PromptName) -> RefreshOutcome {
        let body = match self.fetch(name).await {
            Ok(body) => body,
            Err(error) => {
                warn!(prompt = %name, error = ?error, "Prompt refresh failed, keeping cached copy");
                return RefreshOutcome::Failed;
            }
        };

        match self.cache.store_if_changed(name.clone(), body).await {
            Some(entry) => {
                debug!(prompt = %name, version = entry.version, "Refreshed prompt");
                RefreshOutcome::Replaced(entry.version)
            }
            None => {
                debug!(prompt = %name, "Prompt unchanged");
                RefreshOutcome::Unchanged
            }
        }
    }

    /// Runs [`Self::refresh`] as a detached task. The handle is dropped, so
    /// the refresh outlives the caller and cannot be cancelled by it.
    pub fn spawn_refresh(&self, name: PromptName) {
        let this = self.clone();
        tokio::spawn(async move {
            this.refresh(&name).await;
        });
    }

    /// Fetches and stores every name concurrently and waits for all of them.
    /// Names that succeed stay stored even when others fail.
    pub async fn invalidate_all(&self, names: &[PromptName]) -> prompthub_domain::Result<()> {
        let results = join_all(
            names
                .iter()
                .map(|name| async move { (name, self.fetch_and_store(name).await) }),
        )
        .await;

        let mut failed = Vec::new();
        let mut first_error = None;
        for (name, result) in results {
            if let Err(error) = result {
                warn!(prompt = %name, error = ?error, "Failed to prefill prompt");
                failed.push(name.clone());
                first_error.get_or_insert(error);
            }
        }

        match first_error {
            Some(source) => Err(Error::Invalidate { names: failed, source }),
            None => Ok(()),
        }
    }

    async fn fetch(&self, name: &PromptName) -> anyhow::Result<PromptBody> {
        self.source
            .fetch(name)
            .await
            .with_context(|| format!("Failed to fetch prompt: {name}"))
    }
}
