pub mod aabb;
pub mod circle;
pub mod line_segment;
pub mod point;
pub mod polygon;

use std::fmt;

// Re-export the specific shape types
pub use aabb::Aabb;
pub use circle::Circle;
pub use line_segment::LineSegment;
pub use point::Point;
pub use polygon::Polygon;

use crate::math::vec2::Vec2;

/// Enum representing any shape the collision tests accept.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(LineSegment),
    Circle(Circle),
    Aabb(Aabb),
    Polygon(Polygon),
}

/// Tag identifying a `Shape` variant without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Aabb,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Polygon,
        ShapeKind::Aabb,
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Point,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Aabb => "aabb",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// True if tests involving this kind and `other` produce a translation vector
    /// rather than a plain hit flag.
    pub fn yields_mtv_with(self, other: ShapeKind) -> bool {
        match (self, other) {
            (ShapeKind::Line, _) | (_, ShapeKind::Line) => false,
            (ShapeKind::Point, ShapeKind::Polygon)
            | (ShapeKind::Polygon, ShapeKind::Point)
            | (ShapeKind::Point, ShapeKind::Point) => false,
            _ => true,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Aabb(_) => ShapeKind::Aabb,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Point(p) => p.center(),
            Shape::Line(l) => l.center(),
            Shape::Circle(c) => c.center(),
            Shape::Aabb(b) => b.center(),
            Shape::Polygon(p) => p.center(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Point(p) => p.translate(delta),
            Shape::Line(l) => l.translate(delta),
            Shape::Circle(c) => c.translate(delta),
            Shape::Aabb(b) => b.translate(delta),
            Shape::Polygon(p) => p.translate(delta),
        }
    }

    /// Moves the shape so that its center lands on `position`.
    pub fn move_to(&mut self, position: Vec2) {
        match self {
            Shape::Point(p) => p.move_to(position),
            Shape::Line(l) => l.move_to(position),
            Shape::Circle(c) => c.move_to(position),
            Shape::Aabb(b) => b.move_to(position),
            Shape::Polygon(p) => p.move_to(position),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<LineSegment> for Shape {
    fn from(l: LineSegment) -> Self {
        Shape::Line(l)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Aabb> for Shape {
    fn from(b: Aabb) -> Self {
        Shape::Aabb(b)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
