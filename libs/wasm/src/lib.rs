//! WASM-facing entry points for the procedural ring and its demo scenes.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let mesh = ring_wasm::create_ring_internal(4, 1.0, 0.5, 0.25).unwrap();
//! assert_eq!(mesh.vertex_count(), 64);
//! assert_eq!(mesh.triangle_count(), 32);
//! ```

use config::constants::DEFAULT_RING_SEGMENTS;
use ring_mesh::{MeshError, RingParams};
use ring_scenes::{SceneError, SceneSet};
use wasm_bindgen::prelude::*;

mod controller;
mod mesh_handle;

pub use controller::SceneController;
pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "ring_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the segment count used when the host does not pick one.
///
/// # Examples
/// ```
/// let segments = ring_wasm::default_segments();
/// assert!(segments >= 3);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_RING_SEGMENTS
}

/// Builds a ring mesh and returns its GPU buffers.
///
/// This function is the primary entry point used from JavaScript. For Rust
/// tests, prefer `create_ring_internal`, which exposes Rust error types
/// directly.
///
/// # Errors
/// Returns a JavaScript error value naming the offending parameter.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = create_ring(32, 1.0, 0.25, 0.25);
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn create_ring(
    segments: u32,
    radius: f64,
    width: f64,
    thickness: f64,
) -> Result<MeshHandle, JsValue> {
    create_ring_internal(segments, radius, width, thickness).map_err(to_js_error)
}

/// Host-only helper behind [`create_ring`].
pub fn create_ring_internal(
    segments: u32,
    radius: f64,
    width: f64,
    thickness: f64,
) -> Result<MeshHandle, MeshError> {
    let mesh = RingParams::new(segments, radius, width, thickness).build()?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Returns the built-in demo scenes as a JSON array.
///
/// # Errors
/// Returns a JavaScript error if serialization fails.
#[wasm_bindgen]
pub fn scene_presets_json() -> Result<String, JsValue> {
    scene_presets_json_internal().map_err(to_js_error)
}

/// Host-only helper behind [`scene_presets_json`].
///
/// # Examples
/// ```
/// let json = ring_wasm::scene_presets_json_internal().unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn scene_presets_json_internal() -> Result<String, SceneError> {
    SceneSet::demo().to_json()
}

pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
