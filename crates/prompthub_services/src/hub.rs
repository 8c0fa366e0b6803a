use std::sync::Arc;

use anyhow::Context as _;
use prompthub_domain::{PromptCompiler, PromptName, PromptRecord, PromptSource, PromptSpec};
use tracing::{debug, warn};

use crate::{PromptCache, RefreshCoordinator};

/// Entry point for reading prompts: serves cached bodies immediately and
/// keeps them fresh in the background (stale-while-revalidate).
pub struct PromptHub<S> {
    source: Arc<S>,
    cache: Arc<PromptCache>,
    coordinator: RefreshCoordinator<S>,
}

impl<S> Clone for PromptHub<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cache: self.cache.clone(),
            coordinator: self.coordinator.clone(),
        }
    }
}

impl<S: PromptSource> PromptHub<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_cache(source, Arc::new(PromptCache::new()))
    }

    pub fn with_cache(source: Arc<S>, cache: Arc<PromptCache>) -> Self {
        let coordinator = RefreshCoordinator::new(source.clone(), cache.clone());
        Self { source, cache, coordinator }
    }

    pub fn cache(&self) -> &Arc<PromptCache> {
        &self.cache
    }

    /// Returns a compiler for `name`. Never fails.
    ///
    /// A cached prompt is returned as is while a detached refresh brings the
    /// cache up to date for later calls. An uncached prompt is fetched first;
    /// if that fails the returned compiler is empty and the failure shows up
    /// as [`prompthub_domain::Error::EmptyPrompt`] when compiling.
    pub async fn get(&self, name: impl Into<PromptName>) -> PromptCompiler {
        let name = name.into();

        if let Some(body) = self.cache.lookup(&name).await {
            debug!(prompt = %name, "Serving cached prompt");
            self.coordinator.spawn_refresh(name);
            return PromptCompiler::new(body);
        }

        match self.coordinator.fetch_and_store(&name).await {
            Ok(body) => PromptCompiler::new(body),
            Err(error) => {
                warn!(prompt = %name, error = ?error, "Prompt unavailable, serving empty prompt");
                PromptCompiler::empty()
            }
        }
    }

    /// Re-fetches every name concurrently, see
    /// [`RefreshCoordinator::invalidate_all`].
    pub async fn invalidate_all(&self, names: &[PromptName]) -> prompthub_domain::Result<()> {
        self.coordinator.invalidate_all(names).await
    }

    /// Creates a prompt in the remote store. The cache is not touched; the
    /// new version is picked up by the next refresh of that name.
    pub async fn create_prompt(&self, spec: PromptSpec) -> anyhow::Result<PromptRecord> {
        let name = spec.name.clone();
        self.source
            .create(spec)
            .await
            .with_context(|| format!("Failed to create prompt: {name}"))
    }
}
