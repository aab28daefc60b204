//! Layout types: Point, LayoutVertex, EdgeShape, RoutedEdge, LayoutResult.

use std::ops::{Add, Mul, Sub};

use crate::syntax::types::Edge;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A position or direction in surface pixels; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        (len > f64::EPSILON).then(|| Point::new(self.x / len, self.y / len))
    }

    /// Rotate by `angle` radians (clockwise on screen).
    pub fn rotated(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Angle of this point as seen from `center`.
    pub fn angle_from(self, center: Point) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

// ─── LayoutVertex ────────────────────────────────────────────────────────────

/// A vertex slot placed on the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutVertex {
    pub index: usize,
    pub name: String,
    pub position: Point,
    pub visible: bool,
}

// ─── EdgeShape ───────────────────────────────────────────────────────────────

/// The stroke used to draw one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeShape {
    Straight { from: Point, to: Point },
    /// Clockwise (screen space) from `start_angle` to `end_angle`.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// A self-loop: a full circle touching its vertex.
    Loop { center: Point, radius: f64 },
}

// ─── RoutedEdge ──────────────────────────────────────────────────────────────

/// An edge with its bend assignment and computed geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    /// The edge as it appears in the model.
    pub edge: Edge,
    /// Position among all edges between the same pair of vertices.
    pub bend: usize,
    /// True when the edge was drawn in the pair's first-seen orientation
    /// opposite to its own.
    pub reversed: bool,
    /// Signed offset of `anchor` from the straight-line midpoint.
    pub displacement: f64,
    /// The displaced point the stroke passes through; arrowheads sit here.
    pub anchor: Point,
    /// Unit vector the arrowhead points along.
    pub heading: Point,
    pub shape: EdgeShape,
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// The full output of the layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub width: f64,
    pub height: f64,
    /// Centre of the vertex ring after odd-polygon balancing.
    pub center: Point,
    pub vertices: Vec<LayoutVertex>,
    /// Edges that are drawn, in model order.
    pub edges: Vec<RoutedEdge>,
    pub directed: bool,
}

impl LayoutResult {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point::new(width / 2.0, height / 2.0),
            vertices: Vec::new(),
            edges: Vec::new(),
            directed: false,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
