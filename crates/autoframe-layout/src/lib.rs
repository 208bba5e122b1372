//! Flex-style auto-layout for frames in a visual scene graph.
//!
//! Given a container with auto-layout switched on, this crate computes the
//! position and size of each visible child from the container's direction,
//! gap, padding, alignment and justification, and from each child's per-axis
//! sizing mode (fixed, fill container, fit content).
//!
//! # Architecture
//!
//! 1. **Descriptors**: the container and its visible children are normalized
//!    into main/cross-axis flex descriptors. Nested fit-content containers are
//!    measured recursively at this stage.
//! 2. **Resolution**: main-axis space is distributed by grow/shrink factors,
//!    then every item is sized on the cross axis.
//! 3. **Positioning**: items are placed along the main axis according to the
//!    justification mode, then aligned on the cross axis.
//!
//! The solver is pure: it reads the node tree and returns [`LayoutResult`]s,
//! which [`apply_results`] merges back into child records.
//!
//! # Example
//!
//! ```
//! use autoframe_core::{AutoLayout, LayoutNode, Sizing, SizingMode};
//! use autoframe_layout::{apply_results, compute_layout};
//!
//! let fill = Sizing::new(SizingMode::FillContainer, SizingMode::Fixed);
//! let frame = LayoutNode::container(
//!     "toolbar",
//!     300.0,
//!     40.0,
//!     AutoLayout::row(),
//!     vec![
//!         LayoutNode::leaf("left", 10.0, 40.0).with_sizing(fill),
//!         LayoutNode::leaf("right", 10.0, 40.0).with_sizing(fill),
//!     ],
//! );
//!
//! let results = compute_layout(&frame);
//! let children = apply_results(frame.children(), &results);
//! assert_eq!(children[1].x, 150.0);
//! assert_eq!(children[1].width, 150.0);
//! ```

mod cache;
mod compute;
mod flex;
mod intrinsic;
mod position;
mod resolve;
mod tree;

pub use autoframe_core::{LayoutError, LayoutNode, LayoutResult, Size};
pub use cache::LayoutCache;
pub use compute::{
    apply_results, compute_intrinsic_size, compute_layout, AutoLayoutSolver, LayoutOptions,
};
pub use tree::validate_tree;
