//! Recursive dependency tree resolution over a metadata repository.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;

use pantree_core::distribution::{Distribution, Forest};
use pantree_cpan::repository::{CpanRepository, MetadataRepository};
use pantree_util::errors::{PantreeError, PantreeResult};

use crate::cache::ResolutionCache;
use crate::filter::filter_core_modules;

/// Resolves transitive runtime dependency trees against one repository.
///
/// Each distribution name is expanded at most once per resolver instance:
/// repeated requests, and repeated appearances deeper in a tree, reuse the
/// cached subtree. Parents holding the same dependency alias one shared
/// node rather than copies.
pub struct Resolver<R> {
    repository: Arc<R>,
    cache: ResolutionCache,
}

impl Resolver<CpanRepository> {
    /// Open the metadata directory at `root` and wrap it in a fresh
    /// resolver. Fails if the module map or core list cannot be loaded.
    pub fn open(root: impl Into<PathBuf>) -> PantreeResult<Self> {
        Ok(Self::new(CpanRepository::open(root)?))
    }
}

impl<R> Resolver<R>
where
    R: MetadataRepository + Send + Sync + 'static,
{
    /// Create a resolver over an already opened repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            cache: ResolutionCache::new(),
        }
    }

    /// Resolve the full runtime dependency tree of every named distribution.
    ///
    /// Roots come back in request order, one per name; requesting a name
    /// twice yields two roots referencing the same node. Each top-level
    /// name expands on its own blocking worker and all workers share the
    /// session cache. On failure, the first error in request order is
    /// returned and no partial forest is exposed.
    pub async fn resolve(&self, names: &[String]) -> PantreeResult<Forest> {
        let mut workers = JoinSet::new();
        for (slot, name) in names.iter().enumerate() {
            let repository = Arc::clone(&self.repository);
            let cache = self.cache.clone();
            let name = name.clone();
            workers.spawn_blocking(move || {
                let mut in_progress = Vec::new();
                let result = resolve_one(repository.as_ref(), &cache, &name, &mut in_progress);
                (slot, result)
            });
        }

        // Pre-sized slots keep the forest in request order no matter how
        // worker completion interleaves.
        let mut slots: Vec<Option<PantreeResult<Arc<Distribution>>>> = Vec::new();
        slots.resize_with(names.len(), || None);

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((slot, result)) => slots[slot] = Some(result),
                Err(err) => {
                    return Err(PantreeError::Worker {
                        message: err.to_string(),
                    })
                }
            }
        }

        let mut roots = Vec::with_capacity(names.len());
        for slot in slots {
            match slot {
                Some(Ok(node)) => roots.push(node),
                Some(Err(err)) => return Err(err),
                None => {
                    return Err(PantreeError::Worker {
                        message: "a resolution worker returned no result".to_string(),
                    })
                }
            }
        }

        Ok(Forest::from_roots(roots))
    }
}

/// Expand one distribution, depth first.
///
/// `in_progress` is the chain of names currently being expanded on this
/// worker; re-entering one of them means the metadata is cyclic, which
/// fails the resolution rather than recursing forever. A distribution
/// naming itself directly is skipped instead, as some metadata does this
/// by accident and the tree stays well formed without the edge.
fn resolve_one<R: MetadataRepository>(
    repository: &R,
    cache: &ResolutionCache,
    name: &str,
    in_progress: &mut Vec<String>,
) -> PantreeResult<Arc<Distribution>> {
    if let Some(node) = cache.get(name) {
        return Ok(node);
    }

    if in_progress.iter().any(|n| n == name) {
        let chain = format!("{} -> {name}", in_progress.join(" -> "));
        return Err(PantreeError::CircularDependency { chain });
    }
    in_progress.push(name.to_string());

    let requires = repository.required_modules(name)?;
    let modules = filter_core_modules(&requires, repository.core_modules());

    let mut node = Distribution::new(name);
    for module in &modules {
        let dependency = repository.lookup_distribution(module)?;
        if dependency == name {
            tracing::warn!("{name} lists itself as a dependency (via {module}), skipping");
            continue;
        }
        let subtree = resolve_one(repository, cache, &dependency, in_progress)?;
        node.add_dependencies([subtree]);
    }

    in_progress.pop();
    Ok(cache.insert(node))
}
