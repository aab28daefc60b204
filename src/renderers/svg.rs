//! SVG surface: writes drawing commands out as a standalone SVG document.
//!
//! Arcs become `A` path segments with the sweep flag set, which matches the
//! clockwise-on-screen convention of [`DrawCommand::Arc`].

use std::f64::consts::{PI, TAU};

use super::{DrawCommand, Surface};
use crate::error::SurfaceError;
use crate::layout::Point;

/// Arcs sweeping less than this are not emitted.
const MIN_SWEEP: f64 = 1e-9;

pub struct SvgSurface {
    width: f64,
    height: f64,
    parts: Vec<String>,
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn stroke(paint: &str, thickness: f64) -> String {
    format!(r#"fill="none" stroke="{}" stroke-width="{thickness:.2}""#, escape(paint))
}

fn on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Point::new(angle.cos(), angle.sin()) * radius
}

// ── SvgSurface ───────────────────────────────────────────────────────────────

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            parts: Vec::new(),
        }
    }

    /// Close the document and return the SVG text.
    pub fn finish(self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )];
        out.extend(self.parts);
        out.push("</svg>".to_string());
        out.join("\n") + "\n"
    }

    fn element(&self, command: &DrawCommand) -> Option<String> {
        let svg = match command {
            DrawCommand::Background { paint } => format!(
                r#"<rect width="{}" height="{}" fill="{}"/>"#,
                self.width,
                self.height,
                escape(paint)
            ),
            DrawCommand::Circle { center, radius, paint } => format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" fill="{}"/>"#,
                center.x,
                center.y,
                escape(paint)
            ),
            DrawCommand::Line { from, to, paint, thickness } => format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke(paint, *thickness)
            ),
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                paint,
                thickness,
            } => {
                let sweep = (end_angle - start_angle).rem_euclid(TAU);
                if sweep < MIN_SWEEP {
                    return None;
                }
                let start = on_circle(*center, *radius, *start_angle);
                let end = on_circle(*center, *radius, *end_angle);
                let large = u8::from(sweep > PI);
                format!(
                    r#"<path d="M {:.2} {:.2} A {radius:.2} {radius:.2} 0 {large} 1 {:.2} {:.2}" {}/>"#,
                    start.x,
                    start.y,
                    end.x,
                    end.y,
                    stroke(paint, *thickness)
                )
            }
            DrawCommand::Ring { center, radius, paint, thickness } => format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" {}/>"#,
                center.x,
                center.y,
                stroke(paint, *thickness)
            ),
            DrawCommand::Polygon { points, paint } => {
                let pts: String = points
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(r#"<polygon points="{pts}" fill="{}"/>"#, escape(paint))
            }
        };
        Some(svg)
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), SurfaceError> {
        command.check_finite()?;
        if let Some(svg) = self.element(command) {
            self.parts.push(svg);
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
