//! Plain 2-D value types and the connection curve used by the canvas.

use crate::graph::Position;

/// A point in either canvas or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Approximate rendered footprint of an element, used for edge anchoring and
/// fit-to-content framing.
pub const ELEMENT_WIDTH: f64 = 240.0;
pub const ELEMENT_HEIGHT: f64 = 100.0;

/// Horizontal control-point offset is capped so short connections do not
/// balloon into wide loops.
const MAX_CONTROL_OFFSET: f64 = 100.0;

/// A cubic connection curve from one element to another.
///
/// Runs from the source's right-edge midpoint to the target's left-edge
/// midpoint with symmetric horizontal control points, which keeps
/// orthogonal-looking flows readable when the nodes are vertically offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPath {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl ConnectionPath {
    /// Samples the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point {
            x: b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            y: b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        }
    }

    /// SVG path data for the curve.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// Computes the connection curve between two elements given their top-left
/// canvas positions.
pub fn connection_path(source: Position, target: Position) -> ConnectionPath {
    let start = Point::new(source.x + ELEMENT_WIDTH, source.y + ELEMENT_HEIGHT / 2.0);
    let end = Point::new(target.x, target.y + ELEMENT_HEIGHT / 2.0);

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let offset = (distance * 0.4).min(MAX_CONTROL_OFFSET);

    ConnectionPath {
        start,
        control1: Point::new(start.x + offset, start.y),
        control2: Point::new(end.x - offset, end.y),
        end,
    }
}
