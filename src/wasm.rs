//! WASM bindings for circle-graph.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::RenderSettings;

/// Render graph DSL to SVG on a 300x300 surface with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_svg(src, &RenderSettings::default(), 300.0, 300.0)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render graph DSL to SVG with control over the surface and ring geometry.
///
/// - `width`, `height`: surface size in pixels
/// - `big_radius`: radius of the vertex ring
/// - `bendiness`: curvature per parallel-edge step
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    width: f64,
    height: f64,
    big_radius: f64,
    bendiness: f64,
) -> Result<String, JsError> {
    let settings = RenderSettings {
        big_radius,
        bendiness,
        ..RenderSettings::default()
    };
    crate::render_svg(src, &settings, width, height).map_err(|e| JsError::new(&e.to_string()))
}
