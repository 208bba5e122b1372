//! WebAssembly bindings for the autoframe auto-layout solver.
//!
//! Every call is self-contained: nodes go in as plain JavaScript objects and
//! results come back the same way. There is no load step and no global
//! engine state.
//!
//! ## Example
//!
//! ```js
//! import { AutoLayoutEngine } from 'autoframe';
//!
//! const engine = new AutoLayoutEngine();
//!
//! const toolbar = {
//!   id: 'toolbar',
//!   width: 300,
//!   height: 40,
//!   kind: {
//!     type: 'container',
//!     layout: { direction: 'row', gap: 8 },
//!     children: [
//!       { id: 'a', width: 10, height: 40, sizing: { horizontal: 'fill_container' } },
//!       { id: 'b', width: 10, height: 40, sizing: { horizontal: 'fill_container' } },
//!     ],
//!   },
//! };
//!
//! const results = engine.computeLayout(toolbar);
//! const children = engine.applyResults(toolbar.kind.children, results);
//! ```

use autoframe_core::{LayoutNode, LayoutResult};
use autoframe_layout::{apply_results, AutoLayoutSolver, LayoutOptions};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The auto-layout solver for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct AutoLayoutEngine {
    solver: AutoLayoutSolver,
}

#[wasm_bindgen]
impl AutoLayoutEngine {
    /// Create an engine, optionally with layout options
    /// (`{ maxDepth, shrinkFixedItems }`).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<AutoLayoutEngine, JsError> {
        let options: LayoutOptions = if options.is_undefined() || options.is_null() {
            LayoutOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsError::new(&format!("Invalid layout options: {}", e)))?
        };
        Ok(Self {
            solver: AutoLayoutSolver::new(options),
        })
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Compute rectangles for the visible children of a container.
    #[wasm_bindgen(js_name = computeLayout)]
    pub fn compute_layout(&self, container: JsValue) -> Result<JsValue, JsError> {
        let container: LayoutNode = from_js(container, "container")?;
        to_js(&self.solver.compute_layout(&container))
    }

    /// Measure a container's natural size on the requested axes.
    #[wasm_bindgen(js_name = computeIntrinsicSize)]
    pub fn compute_intrinsic_size(
        &self,
        container: JsValue,
        fit_width: bool,
        fit_height: bool,
    ) -> Result<JsValue, JsError> {
        let container: LayoutNode = from_js(container, "container")?;
        let size = self
            .solver
            .compute_intrinsic_size(&container, fit_width, fit_height);
        to_js(&size)
    }

    /// Merge computed results into a list of children.
    #[wasm_bindgen(js_name = applyResults)]
    pub fn apply_results(&self, children: JsValue, results: JsValue) -> Result<JsValue, JsError> {
        let children: Vec<LayoutNode> = from_js(children, "children")?;
        let results: Vec<LayoutResult> = from_js(results, "results")?;
        to_js(&apply_results(&children, &results))
    }

    /// Lay out a whole subtree and return the updated tree.
    #[wasm_bindgen(js_name = layoutTree)]
    pub fn layout_tree(&self, root: JsValue) -> Result<JsValue, JsError> {
        let root: LayoutNode = from_js(root, "tree")?;
        let solved = self
            .solver
            .layout_tree(&root)
            .map_err(|e| JsError::new(&format!("Layout error: {}", e)))?;
        to_js(&solved)
    }
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid {}: {}", what, e)))
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
