//! Distribution nodes and the forest of resolved trees.

use std::sync::Arc;

/// One resolved distribution: its name and the distributions it depends on.
///
/// The dependency list is kept in ascending name order and unique by name.
/// Subtrees are shared rather than copied: the same node may be referenced
/// from several parents and from several forest roots, so nodes are built
/// once, wrapped in an [`Arc`], and never mutated afterwards.
#[derive(Debug)]
pub struct Distribution {
    name: String,
    dependencies: Vec<Arc<Distribution>>,
}

impl Distribution {
    /// Create a distribution with no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct dependencies, in ascending name order.
    pub fn dependencies(&self) -> &[Arc<Distribution>] {
        &self.dependencies
    }

    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Insert dependencies, keeping the list sorted by name.
    ///
    /// Inserting a node whose name is already present is a no-op; the
    /// first-inserted instance stays.
    pub fn add_dependencies(&mut self, distributions: impl IntoIterator<Item = Arc<Distribution>>) {
        for dist in distributions {
            match self
                .dependencies
                .binary_search_by(|probe| probe.name.as_str().cmp(&dist.name))
            {
                Ok(_) => {}
                Err(pos) => self.dependencies.insert(pos, dist),
            }
        }
    }
}

/// An ordered sequence of resolved trees, one per requested name.
///
/// Order matches the request that produced it. Requesting the same name
/// twice yields two roots referencing the same node.
#[derive(Debug, Default)]
pub struct Forest {
    roots: Vec<Arc<Distribution>>,
}

impl Forest {
    pub fn from_roots(roots: Vec<Arc<Distribution>>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Arc<Distribution>] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
