use thiserror::Error;

use crate::math::vec2::Vec2;

/// Rejected shape construction or mutation.
///
/// Every variant is an invalid-geometry condition: the input would break an
/// invariant the collision tests rely on, so it is reported instead of corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid geometry: circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("invalid geometry: half extents must be non-negative, got ({}, {})", .0.x, .0.y)]
    NegativeHalfExtent(Vec2),

    #[error("invalid geometry: need at least {required} vertices, got {actual}")]
    TooFewVertices { required: usize, actual: usize },

    #[error("invalid geometry: polygon is not convex")]
    NotConvex,

    #[error("vertex index {index} out of bounds for polygon with {len} vertices")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid geometry: transform scale ({}, {}) is not invertible", .0.x, .0.y)]
    SingularTransform(Vec2),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
