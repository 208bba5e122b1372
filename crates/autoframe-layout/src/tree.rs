//! Whole-tree layout passes.
//!
//! [`compute_layout`](crate::AutoLayoutSolver::compute_layout) solves a single
//! container. The pass here walks a subtree top-down, solving each auto-layout
//! container after its parent has settled its size and position, so results
//! cascade into nested frames.

use autoframe_core::{LayoutError, LayoutNode, SizingMode};
use glam::DVec2;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::compute::{apply_results, AutoLayoutSolver};

/// Check that `root` can be laid out: nesting no deeper than `max_depth` and
/// unique ids among siblings.
pub fn validate_tree(root: &LayoutNode, max_depth: usize) -> Result<(), LayoutError> {
    validate_recursive(root, 0, max_depth)
}

fn validate_recursive(
    node: &LayoutNode,
    depth: usize,
    max_depth: usize,
) -> Result<(), LayoutError> {
    if depth > max_depth {
        return Err(LayoutError::DepthExceeded {
            id: node.id.clone(),
            max_depth,
        });
    }

    let mut seen = FxHashSet::default();
    for child in node.children() {
        if !seen.insert(&child.id) {
            return Err(LayoutError::DuplicateId {
                id: child.id.clone(),
                parent: node.id.clone(),
            });
        }
        validate_recursive(child, depth + 1, max_depth)?;
    }

    Ok(())
}

/// Lay out `root` and all of its descendants, returning the updated tree.
///
/// Containers that hug their content are resized to their intrinsic size
/// unless an auto-layout parent has already sized them.
pub(crate) fn layout_tree(
    solver: &AutoLayoutSolver,
    root: &LayoutNode,
) -> Result<LayoutNode, LayoutError> {
    validate_tree(root, solver.options().max_depth)?;

    let mut root = root.clone();
    debug!(id = %root.id, "laying out tree");
    layout_recursive(solver, &mut root, false);
    Ok(root)
}

/// Resize `node` to its intrinsic size on its fit-content axes.
fn fit_to_content(solver: &AutoLayoutSolver, node: &mut LayoutNode) {
    let fit_width = node.sizing.horizontal == SizingMode::FitContent;
    let fit_height = node.sizing.vertical == SizingMode::FitContent;
    if node.auto_layout().is_none() || !(fit_width || fit_height) {
        return;
    }

    let size = solver.compute_intrinsic_size(node, fit_width, fit_height);
    debug!(id = %node.id, width = size.width, height = size.height, "fit to content");
    node.width = size.width;
    node.height = size.height;
}

fn layout_recursive(solver: &AutoLayoutSolver, node: &mut LayoutNode, sized_by_parent: bool) {
    if !sized_by_parent {
        fit_to_content(solver, node);
    }

    let results = solver.compute_layout(node);
    let solves_children = node.auto_layout().is_some();

    let Some(container) = node.as_container_mut() else {
        return;
    };

    if !results.is_empty() {
        let applied = apply_results(&container.children, &results);
        for (old, mut new) in container.children.iter_mut().zip(applied) {
            // Descendants are in canvas coordinates and follow their parent.
            let delta = new.position() - old.position();
            if delta != DVec2::ZERO {
                if let Some(moved) = new.as_container_mut() {
                    for grandchild in &mut moved.children {
                        grandchild.translate(delta);
                    }
                }
            }
            *old = new;
        }
    }

    for child in &mut container.children {
        let sized = solves_children && child.visible;
        layout_recursive(solver, child, sized);
    }
}
