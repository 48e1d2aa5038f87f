//! Narrow-phase collision tests for 2D shapes.
//!
//! Five shape kinds (points, line segments, circles, axis-aligned boxes and convex
//! polygons) can be tested against each other pairwise, either through the typed
//! functions in [`collision`] or through [`intersect`] on the [`Shape`] sum type.

pub mod collision;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{intersect, intersect_with_epsilon, Intersection, DEFAULT_EPSILON};
pub use error::{GeometryError, Result};
pub use math::{Mat3, Transform, Vec2};
pub use shapes::{Aabb, Circle, LineSegment, Point, Polygon, Shape, ShapeKind};
