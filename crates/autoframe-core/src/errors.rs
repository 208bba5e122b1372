//! Error types for the autoframe solver.

use thiserror::Error;

use crate::types::NodeId;

/// Errors from whole-tree layout passes.
///
/// Solving a single container never fails; these come from the structural
/// checks run before a subtree is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Node {id} is nested deeper than the maximum layout depth of {max_depth}")]
    DepthExceeded { id: NodeId, max_depth: usize },

    #[error("Duplicate child id {id} under container {parent}")]
    DuplicateId { id: NodeId, parent: NodeId },
}
