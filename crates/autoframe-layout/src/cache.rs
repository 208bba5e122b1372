//! Caller-owned memoization of container layouts.

use autoframe_core::{LayoutResult, NodeId};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
struct CacheEntry {
    version: u64,
    results: Vec<LayoutResult>,
}

/// Layout results keyed by container id and a caller-supplied version.
///
/// The solver never consults a cache on its own; callers that want reuse pass
/// one to [`AutoLayoutSolver::compute_layout_cached`](crate::AutoLayoutSolver::compute_layout_cached)
/// and bump the version whenever the container's subtree changes.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    entries: FxHashMap<NodeId, CacheEntry>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results stored for `id`, if they were recorded under `version`.
    pub fn get(&self, id: &NodeId, version: u64) -> Option<&[LayoutResult]> {
        self.entries
            .get(id)
            .filter(|entry| entry.version == version)
            .map(|entry| entry.results.as_slice())
    }

    /// Store results for `id`, replacing any older version.
    pub fn insert(&mut self, id: NodeId, version: u64, results: Vec<LayoutResult>) {
        self.entries.insert(id, CacheEntry { version, results });
    }

    /// Drop the entry for `id`. Returns whether one existed.
    pub fn invalidate(&mut self, id: &NodeId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
