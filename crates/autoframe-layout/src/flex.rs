//! Flex descriptors derived from scene nodes.
//!
//! A container's auto-layout properties are normalized into a [`FlexContainer`]
//! expressed in main/cross terms, and every visible child becomes a
//! [`FlexItem`] carrying its base sizes and grow/shrink factors. Nested
//! fit-content containers are measured here, which is where the solver recurses.

use autoframe_core::{
    non_negative, AlignItems, AutoLayout, JustifyContent, LayoutDirection, LayoutNode, NodeId,
    Size, SizingMode,
};
use smallvec::SmallVec;

use crate::compute::LayoutOptions;
use crate::intrinsic::intrinsic_size;

/// Items of one container. Most frames hold only a handful of children.
pub(crate) type FlexItems<'a> = SmallVec<[FlexItem<'a>; 8]>;

/// A container's layout properties resolved to main/cross axes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlexContainer {
    pub direction: LayoutDirection,
    /// `None` when the main axis hugs its content
    pub main_size: Option<f64>,
    /// `None` when the cross axis hugs its content
    pub cross_size: Option<f64>,
    pub gap: f64,
    pub padding_main_start: f64,
    pub padding_main_end: f64,
    pub padding_cross_start: f64,
    pub padding_cross_end: f64,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
}

impl FlexContainer {
    /// Build the descriptor for `node` laid out with `layout`.
    ///
    /// `fit_width` / `fit_height` leave that axis unresolved instead of using
    /// the node's stored size.
    pub fn new(node: &LayoutNode, layout: &AutoLayout, fit_width: bool, fit_height: bool) -> Self {
        let padding = layout.padding.normalized();
        let width = (!fit_width).then(|| non_negative(node.width));
        let height = (!fit_height).then(|| non_negative(node.height));

        match layout.direction {
            LayoutDirection::Row => Self {
                direction: LayoutDirection::Row,
                main_size: width,
                cross_size: height,
                gap: layout.effective_gap(),
                padding_main_start: padding.left,
                padding_main_end: padding.right,
                padding_cross_start: padding.top,
                padding_cross_end: padding.bottom,
                align_items: layout.align_items,
                justify_content: layout.justify_content,
            },
            LayoutDirection::Column => Self {
                direction: LayoutDirection::Column,
                main_size: height,
                cross_size: width,
                gap: layout.effective_gap(),
                padding_main_start: padding.top,
                padding_main_end: padding.bottom,
                padding_cross_start: padding.left,
                padding_cross_end: padding.right,
                align_items: layout.align_items,
                justify_content: layout.justify_content,
            },
        }
    }

    pub fn padding_main(&self) -> f64 {
        self.padding_main_start + self.padding_main_end
    }

    pub fn padding_cross(&self) -> f64 {
        self.padding_cross_start + self.padding_cross_end
    }

    /// Main-axis space inside the padding, if the main axis is resolved.
    pub fn content_main(&self) -> Option<f64> {
        self.main_size.map(|size| size - self.padding_main())
    }

    /// Cross-axis space inside the padding, if the cross axis is resolved.
    pub fn content_cross(&self) -> Option<f64> {
        self.cross_size
            .map(|size| (size - self.padding_cross()).max(0.0))
    }

    /// Sum of the gaps between `count` items.
    pub fn total_gap(&self, count: usize) -> f64 {
        self.gap * count.saturating_sub(1) as f64
    }

    /// Split a width/height pair into (main, cross).
    pub fn to_main_cross(&self, size: Size) -> (f64, f64) {
        match self.direction {
            LayoutDirection::Row => (size.width, size.height),
            LayoutDirection::Column => (size.height, size.width),
        }
    }

    /// Join a (main, cross) pair back into width/height.
    pub fn to_size(&self, main: f64, cross: f64) -> Size {
        match self.direction {
            LayoutDirection::Row => Size::new(main, cross),
            LayoutDirection::Column => Size::new(cross, main),
        }
    }
}

/// One visible child prepared for flex resolution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlexItem<'a> {
    pub id: &'a NodeId,
    pub main_mode: SizingMode,
    pub cross_mode: SizingMode,
    pub base_main: f64,
    pub base_cross: f64,
    pub flex_grow: f64,
    pub flex_shrink: f64,
    pub flex_basis: f64,
    /// Overrides the container's `align_items` for this item only
    pub align_self: Option<AlignItems>,
    pub computed_main: f64,
    pub computed_cross: f64,
    pub main_pos: f64,
    pub cross_pos: f64,
}

impl<'a> FlexItem<'a> {
    /// Build the item for `child` inside `container`.
    pub fn new(child: &'a LayoutNode, container: &FlexContainer, options: &LayoutOptions) -> Self {
        let (main_mode, cross_mode) = child.sizing.along(container.direction);
        let (base_main, base_cross) = container.to_main_cross(natural_size(child, options));

        let (flex_grow, flex_shrink, flex_basis) = match main_mode {
            SizingMode::Fixed => {
                let shrink = if options.shrink_fixed_items { 1.0 } else { 0.0 };
                (0.0, shrink, base_main)
            }
            // Fill grows from zero, not from its stored size.
            SizingMode::FillContainer => (1.0, 1.0, 0.0),
            SizingMode::FitContent => (0.0, 0.0, base_main),
        };

        let align_self = match cross_mode {
            SizingMode::FillContainer => Some(AlignItems::Stretch),
            SizingMode::Fixed | SizingMode::FitContent => None,
        };

        Self {
            id: &child.id,
            main_mode,
            cross_mode,
            base_main,
            base_cross,
            flex_grow,
            flex_shrink,
            flex_basis,
            align_self,
            computed_main: 0.0,
            computed_cross: 0.0,
            main_pos: 0.0,
            cross_pos: 0.0,
        }
    }

    /// Alignment used for this item on the cross axis.
    pub fn effective_align(&self, container: &FlexContainer) -> AlignItems {
        self.align_self.unwrap_or(container.align_items)
    }
}

/// Build the items for every visible child of `node`, in order.
pub(crate) fn build_items<'a>(
    node: &'a LayoutNode,
    container: &FlexContainer,
    options: &LayoutOptions,
) -> FlexItems<'a> {
    node.visible_children()
        .map(|child| FlexItem::new(child, container, options))
        .collect()
}

/// The size a child brings into its parent's flex pass.
///
/// Auto-layout containers that hug their content on some axis are measured
/// recursively; everything else contributes its stored size.
fn natural_size(child: &LayoutNode, options: &LayoutOptions) -> Size {
    let fit_width = child.sizing.horizontal == SizingMode::FitContent;
    let fit_height = child.sizing.vertical == SizingMode::FitContent;
    let hugs_children =
        child.auto_layout().is_some() && !child.children().is_empty() && (fit_width || fit_height);

    if hugs_children {
        intrinsic_size(child, fit_width, fit_height, options)
    } else {
        Size::new(non_negative(child.width), non_negative(child.height))
    }
}
