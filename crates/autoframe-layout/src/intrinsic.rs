//! Intrinsic (shrink-to-fit) sizing of auto-layout containers.

use autoframe_core::{LayoutNode, Size};
use tracing::debug;

use crate::compute::LayoutOptions;
use crate::flex::{build_items, FlexContainer};
use crate::resolve::{resolve_cross_sizes, resolve_main_sizes};

/// Natural size of `node` on the requested axes.
///
/// Axes not asked to fit return the stored size unchanged, as do nodes that
/// are not auto-layout containers. Nested fit-content children are measured
/// through [`build_items`], which calls back into this function; the scene
/// graph is a tree, so the recursion ends at the leaves.
pub(crate) fn intrinsic_size(
    node: &LayoutNode,
    fit_width: bool,
    fit_height: bool,
    options: &LayoutOptions,
) -> Size {
    let stored = node.size();
    let Some(layout) = node.auto_layout() else {
        return stored;
    };
    if !fit_width && !fit_height {
        return stored;
    }

    let container = FlexContainer::new(node, layout, fit_width, fit_height);
    let mut items = build_items(node, &container, options);
    resolve_main_sizes(&mut items, &container);
    resolve_cross_sizes(&mut items, &container);

    let total_main: f64 = items.iter().map(|item| item.computed_main).sum();
    let max_cross = items
        .iter()
        .map(|item| item.computed_cross)
        .fold(0.0_f64, f64::max);

    let main = total_main + container.total_gap(items.len()) + container.padding_main();
    let cross = max_cross + container.padding_cross();
    let measured = container.to_size(main, cross);

    debug!(
        id = %node.id,
        items = items.len(),
        width = measured.width,
        height = measured.height,
        fit_width,
        fit_height,
        "measured intrinsic size"
    );

    Size::new(
        if fit_width { measured.width } else { stored.width },
        if fit_height { measured.height } else { stored.height },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoframe_core::{AutoLayout, Padding, Sizing, SizingMode};

    fn measure(node: &LayoutNode, fit_width: bool, fit_height: bool) -> Size {
        intrinsic_size(node, fit_width, fit_height, &LayoutOptions::default())
    }

    fn hugging_row() -> LayoutNode {
        LayoutNode::container(
            "row",
            500.0,
            500.0,
            AutoLayout::row().with_gap(10.0).with_padding(Padding::uniform(5.0)),
            vec![
                LayoutNode::leaf("a", 40.0, 30.0),
                LayoutNode::leaf("b", 60.0, 20.0),
            ],
        )
    }

    #[test]
    fn test_row_intrinsic_size() {
        let size = measure(&hugging_row(), true, true);
        assert!((size.width - 120.0).abs() < 0.001);
        assert!((size.height - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_unrequested_axis_keeps_stored_size() {
        let size = measure(&hugging_row(), true, false);
        assert!((size.width - 120.0).abs() < 0.001);
        assert!((size.height - 500.0).abs() < 0.001);

        let size = measure(&hugging_row(), false, false);
        assert_eq!(size, Size::new(500.0, 500.0));
    }

    #[test]
    fn test_column_intrinsic_size() {
        let node = LayoutNode::container(
            "col",
            0.0,
            0.0,
            AutoLayout::column().with_gap(4.0),
            vec![
                LayoutNode::leaf("a", 40.0, 30.0),
                LayoutNode::leaf("b", 60.0, 20.0),
                LayoutNode::leaf("hidden", 500.0, 500.0).with_visible(false),
            ],
        );
        let size = measure(&node, true, true);
        assert!((size.width - 60.0).abs() < 0.001);
        assert!((size.height - 54.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_container_is_padding_only() {
        let node = LayoutNode::container(
            "empty",
            100.0,
            100.0,
            AutoLayout::row().with_padding(Padding::new(1.0, 2.0, 3.0, 4.0)),
            vec![LayoutNode::leaf("hidden", 10.0, 10.0).with_visible(false)],
        );
        let size = measure(&node, true, true);
        assert!((size.width - 6.0).abs() < 0.001);
        assert!((size.height - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_nested_containers_hug_recursively() {
        let inner = hugging_row().with_sizing(Sizing::both(SizingMode::FitContent));
        let outer = LayoutNode::container(
            "outer",
            0.0,
            0.0,
            AutoLayout::column().with_padding(Padding::uniform(10.0)),
            vec![inner, LayoutNode::leaf("c", 30.0, 15.0)],
        );
        let size = measure(&outer, true, true);
        // Width: max(120, 30) + 20, height: 40 + 15 + 20
        assert!((size.width - 140.0).abs() < 0.001);
        assert!((size.height - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_non_auto_layout_node_returns_stored_size() {
        let leaf = LayoutNode::leaf("leaf", 12.0, 34.0);
        assert_eq!(measure(&leaf, true, true), Size::new(12.0, 34.0));

        let frame = LayoutNode::container(
            "frame",
            80.0,
            90.0,
            AutoLayout::disabled(),
            vec![LayoutNode::leaf("a", 10.0, 10.0)],
        );
        assert_eq!(measure(&frame, true, true), Size::new(80.0, 90.0));
    }
}
