pub mod geometry;
pub mod matrix;
pub mod transform;
pub mod vec2;

// Re-export the math types
pub use geometry::{clamp, compute_centroid, compute_midpoint, compute_normals, is_convex, lerp};
pub use matrix::Mat3;
pub use transform::Transform;
pub use vec2::Vec2;
