//! Circle fitting helpers for curved edges.

use super::types::Point;

/// Determinants smaller than this are treated as collinear input.
const COLLINEAR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// The unique circle through three points.
///
/// Solves the perpendicular-bisector system with Cramer's rule. Returns `None`
/// when the points are collinear (or coincide) and no such circle exists.
pub fn circle_through(a: Point, b: Point, c: Point) -> Option<Circle> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < COLLINEAR_EPSILON {
        return None;
    }
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let center = Point::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );
    Some(Circle {
        center,
        radius: center.distance(a),
    })
}

/// The circle whose diameter spans `a` and `b`.
pub fn circle_on_diameter(a: Point, b: Point) -> Circle {
    Circle {
        center: a.midpoint(b),
        radius: a.distance(b) / 2.0,
    }
}

/// Unit normal to the segment `from -> to`: `(-dy, dx) / len`.
pub fn normal(from: Point, to: Point) -> Option<Point> {
    let d = to - from;
    Point::new(-d.y, d.x).normalized()
}
