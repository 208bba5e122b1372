//! Value types for auto-layout properties.

use glam::DVec2;

/// Identifier of a scene node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// How a node is sized along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizingMode {
    /// Authored size, never touched by the solver
    #[default]
    Fixed,
    /// Expand to consume the space the container offers
    FillContainer,
    /// Hug the node's own content
    FitContent,
}

impl SizingMode {
    pub fn is_fixed(self) -> bool {
        self == SizingMode::Fixed
    }
}

/// Sizing mode per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sizing {
    pub horizontal: SizingMode,
    pub vertical: SizingMode,
}

impl Sizing {
    pub const FIXED: Self = Self::new(SizingMode::Fixed, SizingMode::Fixed);

    pub const fn new(horizontal: SizingMode, vertical: SizingMode) -> Self {
        Self { horizontal, vertical }
    }

    /// The same mode on both axes.
    pub const fn both(mode: SizingMode) -> Self {
        Self::new(mode, mode)
    }

    /// Split into (main, cross) modes for a container direction.
    pub fn along(self, direction: LayoutDirection) -> (SizingMode, SizingMode) {
        match direction {
            LayoutDirection::Row => (self.horizontal, self.vertical),
            LayoutDirection::Column => (self.vertical, self.horizontal),
        }
    }
}

/// Direction in which a container arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutDirection {
    /// Left to right; the main axis is horizontal
    #[default]
    Row,
    /// Top to bottom; the main axis is vertical
    Column,
}

/// Alignment of items on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignItems {
    /// Align to cross start (top for rows, left for columns)
    #[default]
    FlexStart,
    /// Center on the cross axis
    Center,
    /// Align to cross end
    FlexEnd,
    /// Stretch to the container's cross content size
    Stretch,
}

/// Distribution of items on the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum JustifyContent {
    /// Pack items at main start
    #[default]
    FlexStart,
    /// Center items
    Center,
    /// Pack items at main end
    FlexEnd,
    /// Equal space between items, none at the edges
    SpaceBetween,
    /// Equal space around each item
    SpaceAround,
    /// Equal space between items and at both edges
    SpaceEvenly,
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Create uniform padding.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric padding.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Copy with negative or non-finite sides replaced by zero.
    pub fn normalized(&self) -> Self {
        Self {
            top: non_negative(self.top),
            right: non_negative(self.right),
            bottom: non_negative(self.bottom),
            left: non_negative(self.left),
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Auto-layout properties of a container node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AutoLayout {
    /// When false the container positions nothing
    pub enabled: bool,
    pub direction: LayoutDirection,
    /// Gap between adjacent items
    pub gap: f64,
    pub padding: Padding,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
}

impl Default for AutoLayout {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: LayoutDirection::Row,
            gap: 0.0,
            padding: Padding::default(),
            align_items: AlignItems::FlexStart,
            justify_content: JustifyContent::FlexStart,
        }
    }
}

impl AutoLayout {
    /// Create a row layout.
    pub fn row() -> Self {
        Self::default()
    }

    /// Create a column layout.
    pub fn column() -> Self {
        Self {
            direction: LayoutDirection::Column,
            ..Default::default()
        }
    }

    /// Auto-layout switched off; the container keeps its children where they are.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    pub fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    /// Gap with negative or non-finite values treated as zero.
    pub fn effective_gap(&self) -> f64 {
        non_negative(self.gap)
    }
}

/// Clamp to a finite non-negative value; NaN and infinities become zero.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
