//! Session cache mapping distribution names to their resolved subtrees.

use std::sync::Arc;

use dashmap::DashMap;

use pantree_core::distribution::Distribution;

/// Shared map from distribution name to its fully resolved node.
///
/// Cloning is cheap and every clone addresses the same underlying map, so
/// resolution workers on separate threads share one cache. Publication is
/// atomic and first-writer-wins: two workers racing on the same name may
/// both build a subtree, but [`insert`](ResolutionCache::insert) keeps
/// whichever landed first and hands the canonical node back to both, so a
/// name maps to exactly one node for the cache's lifetime. Entries are
/// never evicted.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    inner: Arc<DashMap<String, Arc<Distribution>>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved node for `name`, if one has been published.
    pub fn get(&self, name: &str) -> Option<Arc<Distribution>> {
        self.inner.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Publish a resolved node, returning the canonical entry for its name.
    ///
    /// If another worker published the name first, `node` is dropped and
    /// the existing entry is returned instead.
    pub fn insert(&self, node: Distribution) -> Arc<Distribution> {
        let key = node.name().to_string();
        let entry = self.inner.entry(key).or_insert_with(|| Arc::new(node));
        Arc::clone(entry.value())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
