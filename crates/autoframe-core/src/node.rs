//! Scene nodes as seen by the layout solver.
//!
//! A node is either a leaf (shape, text, image, ...) or a container that owns
//! an ordered list of children and its auto-layout properties. The solver only
//! ever reads these; results come back as [`LayoutResult`] values that the
//! caller merges into its own records.

use glam::DVec2;

use crate::types::{AutoLayout, NodeId, Size, Sizing};

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutNode {
    pub id: NodeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sizing: Sizing,
    /// Invisible nodes take no part in layout
    #[cfg_attr(feature = "serde", serde(default = "default_visible"))]
    pub visible: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: NodeKind,
}

#[cfg(feature = "serde")]
fn default_visible() -> bool {
    true
}

/// Leaf or container.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum NodeKind {
    #[default]
    Leaf,
    Container(Container),
}

/// A node that owns children.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Container {
    pub layout: AutoLayout,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Create a fixed-size leaf.
    pub fn leaf(id: impl Into<NodeId>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width,
            height,
            sizing: Sizing::FIXED,
            visible: true,
            kind: NodeKind::Leaf,
        }
    }

    /// Create a fixed-size container.
    pub fn container(
        id: impl Into<NodeId>,
        width: f64,
        height: f64,
        layout: AutoLayout,
        children: Vec<LayoutNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Container(Container { layout, children }),
            ..Self::leaf(id, width, height)
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Leaf => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Leaf => None,
        }
    }

    /// Auto-layout properties, if this is a container with auto-layout switched on.
    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        self.as_container()
            .map(|c| &c.layout)
            .filter(|layout| layout.enabled)
    }

    /// All children, visible or not. Empty for leaves.
    pub fn children(&self) -> &[LayoutNode] {
        self.as_container()
            .map(|c| c.children.as_slice())
            .unwrap_or(&[])
    }

    /// Children that take part in layout, in order.
    pub fn visible_children(&self) -> impl Iterator<Item = &LayoutNode> {
        self.children().iter().filter(|child| child.visible)
    }

    /// Move this node and its whole subtree by `delta`.
    pub fn translate(&mut self, delta: DVec2) {
        self.x += delta.x;
        self.y += delta.y;
        if let Some(container) = self.as_container_mut() {
            for child in &mut container.children {
                child.translate(delta);
            }
        }
    }
}

/// Computed rectangle for one child, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutResult {
    pub fn new(id: NodeId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { id, x, y, width, height }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
