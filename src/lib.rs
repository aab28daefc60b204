//! circle-graph: compact graph DSL to circular-layout drawings.
//!
//! Public API: [`parse`], [`render`], and the one-shot helpers
//! [`render_source`] and [`render_svg`].
//!
//! ```
//! let svg = circle_graph::render_svg("a,b,c\na-b-c-a", &Default::default(), 300.0, 300.0).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::RenderSettings;
pub use error::{Error, ErrorClass, ParseError, RenderError, Stage, SurfaceError};
pub use parsers::parse;
pub use renderers::{Canvas, DrawCommand, Surface, SvgSurface, draw_commands, render};
pub use syntax::types::{Edge, Flags, GraphModel};

/// Parse `src` and draw it onto `surface`.
pub fn render_source<S: Surface>(
    src: &str,
    settings: &RenderSettings,
    surface: &mut S,
) -> Result<(), Error> {
    let model = parse(src)?;
    render(&model, settings, surface)?;
    Ok(())
}

/// Parse `src` and render it to an SVG document of the given size.
pub fn render_svg(
    src: &str,
    settings: &RenderSettings,
    width: f64,
    height: f64,
) -> Result<String, Error> {
    let mut surface = SvgSurface::new(width, height);
    render_source(src, settings, &mut surface)?;
    Ok(surface.finish())
}
