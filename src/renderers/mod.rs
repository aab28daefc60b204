//! Drawing commands, the Surface trait, and the render pipeline.
//!
//! Rendering is split in two: [`draw_commands`] is a pure function from model
//! and settings to a display list, and [`render`] replays that list onto a
//! [`Surface`]. The whole list is built before the first command is replayed,
//! so a failing render never leaves a half-drawn surface behind.

pub mod canvas;
pub mod svg;

pub use canvas::Canvas;
pub use svg::SvgSurface;

use std::f64::consts::TAU;

use tracing::debug;

use crate::config::RenderSettings;
use crate::error::{RenderError, SurfaceError};
use crate::layout::{EdgeShape, GraphIR, LayoutResult, Point, RoutedEdge, compute_layout};
use crate::syntax::types::GraphModel;

// ─── DrawCommand ─────────────────────────────────────────────────────────────

/// One primitive drawing operation. Angles are radians, clockwise on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Background { paint: String },
    /// A filled disc.
    Circle {
        center: Point,
        radius: f64,
        paint: String,
    },
    Line {
        from: Point,
        to: Point,
        paint: String,
        thickness: f64,
    },
    /// A stroked arc from `start_angle` clockwise to `end_angle`.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        paint: String,
        thickness: f64,
    },
    /// A stroked full circle.
    Ring {
        center: Point,
        radius: f64,
        paint: String,
        thickness: f64,
    },
    /// A filled polygon.
    Polygon { points: Vec<Point>, paint: String },
}

impl DrawCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::Background { .. } => "background",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Arc { .. } => "arc",
            DrawCommand::Ring { .. } => "ring",
            DrawCommand::Polygon { .. } => "polygon",
        }
    }

    /// Reject commands carrying NaN or infinite geometry.
    pub fn check_finite(&self) -> Result<(), SurfaceError> {
        let finite = match self {
            DrawCommand::Background { .. } => true,
            DrawCommand::Circle { center, radius, .. } | DrawCommand::Ring { center, radius, .. } => {
                center.is_finite() && radius.is_finite()
            }
            DrawCommand::Line { from, to, thickness, .. } => {
                from.is_finite() && to.is_finite() && thickness.is_finite()
            }
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                thickness,
                ..
            } => {
                center.is_finite()
                    && radius.is_finite()
                    && start_angle.is_finite()
                    && end_angle.is_finite()
                    && thickness.is_finite()
            }
            DrawCommand::Polygon { points, .. } => points.iter().all(|p| p.is_finite()),
        };
        if finite { Ok(()) } else { Err(SurfaceError::NonFinite(self.name())) }
    }
}

// ─── Surface ─────────────────────────────────────────────────────────────────

/// A drawing target of known pixel size.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn draw(&mut self, command: &DrawCommand) -> Result<(), SurfaceError>;
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

/// Build the display list for `model` on a `width` x `height` surface.
pub fn draw_commands(
    model: &GraphModel,
    settings: &RenderSettings,
    width: f64,
    height: f64,
) -> Result<Vec<DrawCommand>, RenderError> {
    let gir = GraphIR::from_model(model)?;
    let layout = compute_layout(&gir, settings, width, height)?;
    let commands = paint(&layout, settings);
    for command in &commands {
        command.check_finite()?;
    }
    Ok(commands)
}

/// Lay out `model` and draw it onto `surface`.
pub fn render<S: Surface>(
    model: &GraphModel,
    settings: &RenderSettings,
    surface: &mut S,
) -> Result<(), RenderError> {
    let (width, height) = surface.size();
    let commands = draw_commands(model, settings, width, height)?;
    debug!(commands = commands.len(), width, height, "replaying onto surface");
    for command in &commands {
        surface.draw(command)?;
    }
    Ok(())
}

/// Turn a finished layout into drawing commands: background, then edges with
/// their arrowheads, then visible vertex markers on top.
pub fn paint(layout: &LayoutResult, settings: &RenderSettings) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Background {
        paint: settings.background.clone(),
    }];

    for edge in &layout.edges {
        commands.push(edge_stroke(edge, settings));
        if layout.directed {
            commands.push(DrawCommand::Polygon {
                points: arrowhead(edge.anchor, edge.heading, settings.arrow_size),
                paint: settings.edge_color.clone(),
            });
        }
    }

    commands.extend(layout.vertices.iter().filter(|v| v.visible).map(|v| {
        DrawCommand::Circle {
            center: v.position,
            radius: settings.vertex_radius,
            paint: settings.vertex_color.clone(),
        }
    }));
    commands
}

fn edge_stroke(edge: &RoutedEdge, settings: &RenderSettings) -> DrawCommand {
    let paint = settings.edge_color.clone();
    let thickness = settings.edge_thickness;
    match edge.shape {
        EdgeShape::Straight { from, to } => DrawCommand::Line { from, to, paint, thickness },
        EdgeShape::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            paint,
            thickness,
        },
        EdgeShape::Loop { center, radius } => DrawCommand::Ring {
            center,
            radius,
            paint,
            thickness,
        },
    }
}

/// Triangle of circumradius `size` centred on `at`, tip along `heading`.
pub fn arrowhead(at: Point, heading: Point, size: f64) -> Vec<Point> {
    [0.0, TAU / 3.0, 2.0 * TAU / 3.0]
        .iter()
        .map(|&turn| at + heading.rotated(turn) * size)
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
