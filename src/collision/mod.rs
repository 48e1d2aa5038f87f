pub mod detection;
pub mod dispatch;
pub mod intersection;
pub mod sat;

// Re-export key types
pub use detection::*;
pub use dispatch::{intersect, intersect_with_epsilon, DEFAULT_EPSILON};
pub use intersection::Intersection;
