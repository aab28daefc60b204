//! Circular layout: vertex placement on a ring and curved edge routing.

pub mod bends;
pub mod geometry;
pub mod graph;
pub mod types;

pub use graph::GraphIR;
pub use types::{EdgeShape, LayoutResult, LayoutVertex, Point, RoutedEdge};

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::{debug, trace};

use crate::config::RenderSettings;
use crate::error::RenderError;
use crate::syntax::types::Edge;
use bends::{Bend, BendTracker, displacement};
use geometry::{circle_on_diameter, circle_through, normal};

/// Direction a loop grows in when its vertex sits on the ring centre.
const UP: Point = Point { x: 0.0, y: -1.0 };

/// Lay out `gir` on a surface of the given size.
///
/// Every vertex slot, visible or not, takes one angle on the ring. Edges are
/// routed in model order; under the `simple` flag only the first edge of each
/// vertex pair is kept, though later ones still advance the bend counters.
pub fn compute_layout(
    gir: &GraphIR,
    settings: &RenderSettings,
    width: f64,
    height: f64,
) -> Result<LayoutResult, RenderError> {
    let mut result = LayoutResult::new(width, height);
    result.directed = gir.flags.directed;

    let slots = gir.vertex_count();
    result.center = ring_center(slots, settings.big_radius, result.center);
    let positions = ring_positions(slots, settings.big_radius, result.center);
    result.vertices = gir
        .vertices()
        .zip(positions)
        .enumerate()
        .map(|(index, (data, position))| LayoutVertex {
            index,
            name: data.name.clone(),
            position,
            visible: data.visible,
        })
        .collect();
    debug!(slots, center_y = result.center.y, "placed vertices on ring");

    let mut tracker = BendTracker::new();
    for edge in gir.edges() {
        let bend = tracker.assign(edge);
        if gir.flags.simple && bend.index > 0 {
            trace!(from = edge.from, to = edge.to, bend = bend.index, "skipped parallel edge");
            continue;
        }
        let routed = route_edge(edge, bend, &result, settings.bendiness)?;
        trace!(
            from = edge.from,
            to = edge.to,
            bend = bend.index,
            reversed = bend.reversed,
            displacement = routed.displacement,
            "routed edge"
        );
        result.edges.push(routed);
    }
    Ok(result)
}

/// Positions of `slots` vertices on a ring of `radius` around `center`.
///
/// Slot `i` sits at angle `2πi/v − π(2−v)/(2v)`, which puts a vertex rather
/// than a flat side at the top of the polygon.
pub fn ring_positions(slots: usize, radius: f64, center: Point) -> Vec<Point> {
    if slots == 0 {
        return Vec::new();
    }
    let v = slots as f64;
    let corner = PI * (2.0 - v) / (2.0 * v);
    (0..slots)
        .map(|i| {
            let angle = TAU * i as f64 / v - corner;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Ring centre for `slots` vertices, balanced vertically for odd polygons.
///
/// An odd polygon reaches further above its centre (a vertex) than below it
/// (a flat side); the centre moves down by half that difference.
fn ring_center(slots: usize, radius: f64, nominal: Point) -> Point {
    if slots % 2 == 0 {
        return nominal;
    }
    let ys: Vec<f64> = ring_positions(slots, radius, nominal)
        .iter()
        .map(|p| p.y)
        .collect();
    let top = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let bottom = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let shift = ((nominal.y - top) - (bottom - nominal.y)) / 2.0;
    Point::new(nominal.x, nominal.y + shift)
}

fn position(layout: &LayoutResult, index: usize) -> Result<Point, RenderError> {
    layout
        .vertices
        .get(index)
        .map(|v| v.position)
        .ok_or(RenderError::VertexOutOfRange {
            index,
            count: layout.vertices.len(),
        })
}

fn route_edge(
    edge: Edge,
    bend: Bend,
    layout: &LayoutResult,
    bendiness: f64,
) -> Result<RoutedEdge, RenderError> {
    let from = position(layout, bend.from)?;
    let to = position(layout, bend.to)?;
    let degenerate = RenderError::DegenerateArc { from: edge.from, to: edge.to };

    if edge.is_loop() {
        let d = displacement(bend.index, bendiness, true);
        let outward = (from - layout.center).normalized().unwrap_or(UP);
        let anchor = from + outward * d;
        let circle = circle_on_diameter(from, anchor);
        return Ok(RoutedEdge {
            edge,
            bend: bend.index,
            reversed: bend.reversed,
            displacement: d,
            anchor,
            heading: outward.rotated(FRAC_PI_2),
            shape: EdgeShape::Loop {
                center: circle.center,
                radius: circle.radius,
            },
        });
    }

    let d = displacement(bend.index, bendiness, false);
    let mid = from.midpoint(to);
    let forward = (to - from).normalized().unwrap_or(Point::new(1.0, 0.0));
    let heading = if bend.reversed { forward * -1.0 } else { forward };

    let (anchor, shape) = if d == 0.0 {
        (mid, EdgeShape::Straight { from, to })
    } else {
        let anchor = mid + normal(from, to).ok_or(degenerate.clone())? * d;
        let circle = circle_through(from, to, anchor).ok_or(degenerate)?;
        let from_angle = from.angle_from(circle.center);
        let to_angle = to.angle_from(circle.center);
        let (start_angle, end_angle) = if d > 0.0 {
            (to_angle, from_angle)
        } else {
            (from_angle, to_angle)
        };
        let shape = EdgeShape::Arc {
            center: circle.center,
            radius: circle.radius,
            start_angle,
            end_angle,
        };
        (anchor, shape)
    };

    Ok(RoutedEdge {
        edge,
        bend: bend.index,
        reversed: bend.reversed,
        displacement: d,
        anchor,
        heading,
        shape,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::types::{Flags, GraphModel};

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    fn layout(src_vertices: &[&str], edges: &[(usize, usize)], flags: Flags) -> LayoutResult {
        let model = GraphModel {
            flags,
            vertices: src_vertices.iter().map(|s| s.to_string()).collect(),
            edges: edges.iter().map(|&(f, t)| Edge::new(f, t)).collect(),
        };
        let gir = GraphIR::from_model(&model).unwrap();
        compute_layout(&gir, &RenderSettings::default(), 300.0, 300.0).unwrap()
    }

    #[test]
    fn test_ring_positions_square() {
        let c = Point::new(0.0, 0.0);
        let p = ring_positions(4, 10.0, c);
        let s = 10.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!(close(p[0], Point::new(s, s)));
        assert!(close(p[1], Point::new(-s, s)));
        assert!(close(p[2], Point::new(-s, -s)));
        assert!(close(p[3], Point::new(s, -s)));
    }

    #[test]
    fn test_ring_positions_triangle_has_top_vertex() {
        let p = ring_positions(3, 10.0, Point::default());
        assert!(close(p[2], Point::new(0.0, -10.0)));
    }

    #[test]
    fn test_ring_center_even_unchanged() {
        let nominal = Point::new(150.0, 150.0);
        assert_eq!(ring_center(4, 100.0, nominal), nominal);
        assert_eq!(ring_center(0, 100.0, nominal), nominal);
    }

    #[test]
    fn test_ring_center_odd_balanced() {
        // Triangle: top vertex 100 above, flat side 50 below.
        let c = ring_center(3, 100.0, Point::new(150.0, 150.0));
        assert!(close(c, Point::new(150.0, 175.0)));
        // A lone vertex ends up on the nominal centre.
        let c = ring_center(1, 100.0, Point::new(150.0, 150.0));
        let p = ring_positions(1, 100.0, c);
        assert!(close(p[0], Point::new(150.0, 150.0)));
    }

    #[test]
    fn test_invisible_vertices_keep_their_slot() {
        let with_gap = layout(&["a", "_gap", "b", "c"], &[], Flags::default());
        let plain = layout(&["a", "x", "b", "c"], &[], Flags::default());
        for (a, b) in with_gap.vertices.iter().zip(&plain.vertices) {
            assert!(close(a.position, b.position));
        }
        assert!(!with_gap.vertices[1].visible);
    }

    #[test]
    fn test_parallel_edge_displacements() {
        let l = layout(&["a", "b"], &[(0, 1), (0, 1), (0, 1), (0, 1)], Flags::default());
        let d: Vec<f64> = l.edges.iter().map(|e| e.displacement).collect();
        assert_eq!(d, vec![0.0, -20.0, 20.0, -40.0]);
        assert!(matches!(l.edges[0].shape, EdgeShape::Straight { .. }));
        assert!(matches!(l.edges[1].shape, EdgeShape::Arc { .. }));
    }

    #[test]
    fn test_arc_passes_through_anchor() {
        let l = layout(&["a", "b", "c"], &[(0, 1), (0, 1), (1, 0)], Flags::default());
        for e in &l.edges[1..] {
            let EdgeShape::Arc { center, radius, .. } = e.shape else {
                panic!("expected an arc");
            };
            assert!((center.distance(e.anchor) - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn test_arc_sweep_contains_anchor() {
        let l = layout(&["a", "b", "c", "d"], &[(0, 2), (0, 2), (0, 2)], Flags::default());
        for e in &l.edges[1..] {
            let EdgeShape::Arc { center, start_angle, end_angle, .. } = e.shape else {
                panic!("expected an arc");
            };
            let sweep = (end_angle - start_angle).rem_euclid(TAU);
            let to_anchor = (e.anchor.angle_from(center) - start_angle).rem_euclid(TAU);
            assert!(to_anchor < sweep, "anchor outside the drawn arc");
        }
    }

    #[test]
    fn test_reciprocal_edge_reversed_heading() {
        let l = layout(&["a", "b"], &[(0, 1), (1, 0)], Flags { directed: true, ..Flags::default() });
        let forward = l.edges[0].heading;
        let back = &l.edges[1];
        assert!(back.reversed);
        assert!(close(back.heading, forward * -1.0));
        assert_eq!(back.displacement, -20.0);
    }

    #[test]
    fn test_loops_stack_outward() {
        let l = layout(&["a", "b"], &[(0, 0), (0, 0)], Flags::default());
        let vertex = l.vertices[0].position;
        let outward = (vertex - l.center).normalized().unwrap();
        let radii: Vec<f64> = l
            .edges
            .iter()
            .map(|e| match e.shape {
                EdgeShape::Loop { radius, .. } => radius,
                _ => panic!("expected a loop"),
            })
            .collect();
        assert_eq!(radii, vec![10.0, 20.0]);
        assert!(close(l.edges[1].anchor, vertex + outward * 40.0));
    }

    #[test]
    fn test_simple_drops_repeats() {
        let flags = Flags { simple: true, ..Flags::default() };
        let l = layout(&["a", "b", "c"], &[(0, 1), (1, 0), (1, 2), (0, 1), (2, 1)], flags);
        let kept: Vec<Edge> = l.edges.iter().map(|e| e.edge).collect();
        assert_eq!(kept, vec![Edge::new(0, 1), Edge::new(1, 2)]);
    }

    #[test]
    fn test_empty_graph() {
        let l = layout(&[], &[], Flags::default());
        assert!(l.vertices.is_empty());
        assert!(l.edges.is_empty());
    }
}
