//! Core types for the autoframe auto-layout solver.
//!
//! This crate provides the scene-node model the solver reads:
//! - Sizing modes, directions, alignment and padding value types
//! - The leaf/container node tree and the per-child layout result
//! - Error types

pub mod errors;
pub mod node;
pub mod types;

pub use errors::*;
pub use node::*;
pub use types::*;
