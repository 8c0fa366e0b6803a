use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use prompthub_domain::{PromptBody, PromptName};
use tokio::sync::RwLock;

/// Last known good body for a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub name: PromptName,
    pub body: Arc<PromptBody>,
    /// Assigned on every store and strictly increasing across the cache, so an
    /// unchanged version means the entry was not replaced.
    pub version: u64,
}

/// Process-lifetime map of prompt name to body.
///
/// Entries are replaced wholesale and never removed. Bodies are shared behind
/// `Arc`, so a reader holding a body keeps a consistent snapshot no matter
/// what is stored afterwards.
#[derive(Debug, Default)]
pub struct PromptCache {
    entries: RwLock<HashMap<PromptName, CacheEntry>>,
    last_version: AtomicU64,
}

impl PromptCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lookup(&self, name: &PromptName) -> Option<Arc<PromptBody>> {
        self.entries
            .read()
            .await
            .get(name)
            .map(|entry| entry.body.clone())
    }

    pub async fn entry(&self, name: &PromptName) -> Option<CacheEntry> {
        self.entries.read().await.get(name).cloned()
    }

    /// Stores `body` under `name`, replacing whatever was there.
    pub async fn store(&self, name: PromptName, body: PromptBody) -> CacheEntry {
        let mut entries = self.entries.write().await;
        self.insert(&mut entries, name, body)
    }

    /// Stores `body` only when it differs structurally from the cached body.
    /// Returns the new entry, or `None` when the cache was left as is.
    pub async fn store_if_changed(&self, name: PromptName, body: PromptBody) -> Option<CacheEntry> {
        let mut entries = self.entries.write().await;
        if entries
            .get(&name)
            .is_some_and(|entry| *entry.body == body)
        {
            return None;
        }
        Some(self.insert(&mut entries, name, body))
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Names of all cached prompts, sorted.
    pub async fn names(&self) -> Vec<PromptName> {
        let mut names: Vec<_> = self.entries.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    fn insert(
        &self,
        entries: &mut HashMap<PromptName, CacheEntry>,
        name: PromptName,
        body: PromptBody,
    ) -> CacheEntry {
        // Versions are taken while the write lock is held, so they also
        // increase per key in store order.
        let version = self.last_version.fetch_add(1, Ordering::Relaxed) + 1;
        let entry = CacheEntry { name: name.clone(), body: Arc::new(body), version };
        entries.insert(name, entry.clone());
        entry
    }
}
