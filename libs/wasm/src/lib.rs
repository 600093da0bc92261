//! WASM-facing entry points for the spring mesh generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust types instead of `JsValue`.
//!
//! ```
//! let mesh = spring_wasm::render_preset_internal("axis_indicators").unwrap();
//! assert_eq!(mesh.vertex_count(), 24);
//! ```

use config::constants::DEFAULT_SPLITS;
use serde::Deserialize;
use spring_mesh::{build_all, presets, Mesh, ShapeSpec};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod mesh_handle;

pub use diagnostics::{Diagnostic, Severity};
pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "spring-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the split count used when a host does not pick one.
///
/// # Examples
/// ```
/// assert!(spring_wasm::default_splits() >= 3);
/// ```
#[wasm_bindgen]
pub fn default_splits() -> u32 {
    DEFAULT_SPLITS
}

/// Names accepted by [`render_preset`].
#[wasm_bindgen]
pub fn preset_names() -> Vec<String> {
    presets::PRESET_NAMES.iter().map(|name| name.to_string()).collect()
}

/// One shape or a list of shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ShapeInput {
    One(ShapeSpec),
    Many(Vec<ShapeSpec>),
}

/// Renders a JSON shape description (or an array of them) to a mesh.
///
/// # Errors
/// Returns a JavaScript error string when the JSON is malformed or the
/// generator rejects the parameters.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = render_shape(JSON.stringify({ shape: "donut", rings: 64, splits: 32 }));
/// // console.log(mesh.vertex_count);
/// ```
#[wasm_bindgen]
pub fn render_shape(json: &str) -> Result<MeshHandle, JsValue> {
    render_shape_internal(json).map_err(|diagnostic| JsValue::from_str(&diagnostic.to_string()))
}

/// Host-side implementation of [`render_shape`].
///
/// # Examples
/// ```
/// let mesh = spring_wasm::render_shape_internal(
///     r#"{"shape": "sphere", "radius": 1.0, "splits": 8}"#,
/// ).unwrap();
/// assert_eq!(mesh.vertex_count(), 26);
/// ```
pub fn render_shape_internal(json: &str) -> Result<MeshHandle, Diagnostic> {
    let shapes = match serde_json::from_str(json)? {
        ShapeInput::One(shape) => vec![shape],
        ShapeInput::Many(shapes) => shapes,
    };
    finish(build_all(&shapes)?)
}

/// Renders one of the named preset scenes.
///
/// # Errors
/// Returns a JavaScript error string for an unknown name.
#[wasm_bindgen]
pub fn render_preset(name: &str) -> Result<MeshHandle, JsValue> {
    render_preset_internal(name).map_err(|diagnostic| JsValue::from_str(&diagnostic.to_string()))
}

/// Host-side implementation of [`render_preset`].
pub fn render_preset_internal(name: &str) -> Result<MeshHandle, Diagnostic> {
    let mesh = spring_mesh::render_preset(name).map_err(|err| {
        let diagnostic = Diagnostic::from(err);
        if presets::PRESET_NAMES.contains(&name) {
            diagnostic
        } else {
            diagnostic.with_hint(format!(
                "available presets: {}",
                presets::PRESET_NAMES.join(", ")
            ))
        }
    })?;
    finish(mesh)
}

fn finish(mut mesh: Mesh) -> Result<MeshHandle, Diagnostic> {
    mesh.compute_normals();
    Ok(MeshHandle::from_mesh(&mesh))
}
