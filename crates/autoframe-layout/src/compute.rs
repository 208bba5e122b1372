//! Solver entry points.

use autoframe_core::{LayoutError, LayoutNode, LayoutResult, NodeId, Size};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cache::LayoutCache;
use crate::flex::{build_items, FlexContainer};
use crate::intrinsic::intrinsic_size;
use crate::position::{position_cross, position_main};
use crate::resolve::{resolve_cross_sizes, resolve_main_sizes};
use crate::tree;

/// Options for layout computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutOptions {
    /// Deepest nesting accepted by whole-tree passes
    pub max_depth: usize,
    /// Whether fixed-size items give up main-axis space when the container overflows
    pub shrink_fixed_items: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            shrink_fixed_items: true,
        }
    }
}

/// The auto-layout solver.
///
/// Holds only its options; every call recomputes from the input, so one solver
/// can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct AutoLayoutSolver {
    options: LayoutOptions,
}

impl AutoLayoutSolver {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Compute a rectangle for every visible child of `container`.
    ///
    /// Returns nothing when auto-layout is off or no child is visible. Results
    /// are in canvas coordinates and follow the children's order.
    pub fn compute_layout(&self, container: &LayoutNode) -> Vec<LayoutResult> {
        let Some(layout) = container.auto_layout() else {
            return Vec::new();
        };

        let flex = FlexContainer::new(container, layout, false, false);
        let mut items = build_items(container, &flex, &self.options);
        if items.is_empty() {
            return Vec::new();
        }

        debug!(
            id = %container.id,
            items = items.len(),
            direction = ?flex.direction,
            "computing auto-layout"
        );

        resolve_main_sizes(&mut items, &flex);
        resolve_cross_sizes(&mut items, &flex);
        position_main(&mut items, &flex);
        position_cross(&mut items, &flex);

        items
            .iter()
            .map(|item| {
                let size = flex.to_size(item.computed_main.max(0.0), item.computed_cross.max(0.0));
                let offset = flex.to_size(item.main_pos, item.cross_pos);
                LayoutResult::new(
                    item.id.clone(),
                    container.x + offset.width,
                    container.y + offset.height,
                    size.width,
                    size.height,
                )
            })
            .collect()
    }

    /// Natural size of `container` on the requested axes.
    pub fn compute_intrinsic_size(
        &self,
        container: &LayoutNode,
        fit_width: bool,
        fit_height: bool,
    ) -> Size {
        intrinsic_size(container, fit_width, fit_height, &self.options)
    }

    /// [`compute_layout`](Self::compute_layout) memoized in a caller-owned cache.
    ///
    /// `version` must change whenever anything in the container's subtree
    /// changes; entries recorded under a different version are recomputed.
    pub fn compute_layout_cached(
        &self,
        cache: &mut LayoutCache,
        container: &LayoutNode,
        version: u64,
    ) -> Vec<LayoutResult> {
        if let Some(results) = cache.get(&container.id, version) {
            return results.to_vec();
        }
        let results = self.compute_layout(container);
        cache.insert(container.id.clone(), version, results.clone());
        results
    }

    /// Lay out `root` and every auto-layout container below it.
    pub fn layout_tree(&self, root: &LayoutNode) -> Result<LayoutNode, LayoutError> {
        tree::layout_tree(self, root)
    }
}

/// Merge computed rectangles into `children`.
///
/// Positions are always taken from the results. Sizes are only taken on axes
/// the child does not size as `fixed`. Children without a result are returned
/// unchanged.
pub fn apply_results(children: &[LayoutNode], results: &[LayoutResult]) -> Vec<LayoutNode> {
    let by_id: FxHashMap<&NodeId, &LayoutResult> =
        results.iter().map(|result| (&result.id, result)).collect();

    children
        .iter()
        .map(|child| {
            let mut child = child.clone();
            if let Some(result) = by_id.get(&child.id) {
                child.x = result.x;
                child.y = result.y;
                if !child.sizing.horizontal.is_fixed() {
                    child.width = result.width.max(0.0);
                }
                if !child.sizing.vertical.is_fixed() {
                    child.height = result.height.max(0.0);
                }
            }
            child
        })
        .collect()
}

/// Compute child rectangles with the default solver.
pub fn compute_layout(container: &LayoutNode) -> Vec<LayoutResult> {
    AutoLayoutSolver::default().compute_layout(container)
}

/// Measure a container with the default solver.
pub fn compute_intrinsic_size(container: &LayoutNode, fit_width: bool, fit_height: bool) -> Size {
    AutoLayoutSolver::default().compute_intrinsic_size(container, fit_width, fit_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoframe_core::{AlignItems, AutoLayout, Padding, Sizing, SizingMode};

    fn result<'a>(results: &'a [LayoutResult], id: &str) -> &'a LayoutResult {
        results.iter().find(|r| r.id.as_str() == id).unwrap()
    }

    #[test]
    fn test_results_in_canvas_coordinates() {
        let node = LayoutNode::container(
            "frame",
            200.0,
            100.0,
            AutoLayout::row().with_gap(10.0).with_padding(Padding::uniform(5.0)),
            vec![
                LayoutNode::leaf("a", 50.0, 20.0),
                LayoutNode::leaf("b", 30.0, 40.0),
            ],
        )
        .with_position(100.0, 200.0);

        let results = compute_layout(&node);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], LayoutResult::new("a".into(), 105.0, 205.0, 50.0, 20.0));
        assert_eq!(results[1], LayoutResult::new("b".into(), 165.0, 205.0, 30.0, 40.0));
    }

    #[test]
    fn test_column_maps_axes_back() {
        let node = LayoutNode::container(
            "col",
            100.0,
            300.0,
            AutoLayout::column().with_align_items(AlignItems::Center),
            vec![
                LayoutNode::leaf("a", 40.0, 50.0),
                LayoutNode::leaf("b", 60.0, 10.0)
                    .with_sizing(Sizing::new(SizingMode::Fixed, SizingMode::FillContainer)),
            ],
        );

        let results = compute_layout(&node);
        let a = result(&results, "a");
        assert!((a.x - 30.0).abs() < 0.001);
        assert!((a.y - 0.0).abs() < 0.001);
        let b = result(&results, "b");
        assert!((b.x - 20.0).abs() < 0.001);
        assert!((b.y - 50.0).abs() < 0.001);
        assert!((b.height - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_disabled_and_empty_containers() {
        let disabled = LayoutNode::container(
            "frame",
            100.0,
            100.0,
            AutoLayout::disabled(),
            vec![LayoutNode::leaf("a", 10.0, 10.0)],
        );
        assert!(compute_layout(&disabled).is_empty());

        let hidden = LayoutNode::container(
            "frame",
            100.0,
            100.0,
            AutoLayout::row(),
            vec![LayoutNode::leaf("a", 10.0, 10.0).with_visible(false)],
        );
        assert!(compute_layout(&hidden).is_empty());

        assert!(compute_layout(&LayoutNode::leaf("leaf", 1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_apply_results_respects_fixed_axes() {
        let children = vec![
            LayoutNode::leaf("fixed", 80.0, 20.0),
            LayoutNode::leaf("fill", 10.0, 20.0)
                .with_sizing(Sizing::new(SizingMode::FillContainer, SizingMode::Fixed)),
            LayoutNode::leaf("untouched", 5.0, 5.0).with_position(7.0, 8.0),
        ];
        let results = vec![
            LayoutResult::new("fixed".into(), 1.0, 2.0, 50.0, 99.0),
            LayoutResult::new("fill".into(), 3.0, 4.0, 120.0, 99.0),
        ];

        let applied = apply_results(&children, &results);
        assert_eq!(applied[0].x, 1.0);
        assert_eq!(applied[0].y, 2.0);
        assert_eq!(applied[0].width, 80.0);
        assert_eq!(applied[0].height, 20.0);
        assert_eq!(applied[1].width, 120.0);
        assert_eq!(applied[1].height, 20.0);
        assert_eq!(applied[2], children[2]);
    }

    #[test]
    fn test_cached_layout_reuses_matching_version() {
        let solver = AutoLayoutSolver::default();
        let mut cache = LayoutCache::new();
        let mut node = LayoutNode::container(
            "frame",
            100.0,
            100.0,
            AutoLayout::row(),
            vec![LayoutNode::leaf("a", 10.0, 10.0)],
        );

        let first = solver.compute_layout_cached(&mut cache, &node, 1);
        node.x = 50.0;
        // Same version: the caller promised nothing changed.
        let stale = solver.compute_layout_cached(&mut cache, &node, 1);
        assert_eq!(first, stale);

        let fresh = solver.compute_layout_cached(&mut cache, &node, 2);
        assert!((fresh[0].x - 50.0).abs() < 0.001);
        assert_eq!(cache.len(), 1);
    }
}
