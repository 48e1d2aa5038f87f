use super::matrix::Mat3;
use super::vec2::Vec2;

/// Affine placement of a shape: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Angle in radians
    pub scale: Vec2,
}

impl Transform {
    /// Creates a new transform with unit scale.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation, scale: Vec2::new(1.0, 1.0) }
    }

    /// Creates a transform with an explicit per-axis scale.
    pub fn with_scale(position: Vec2, rotation: f64, scale: Vec2) -> Self {
        Self { position, rotation, scale }
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// The matrix `T * R * S` for this transform.
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_translation(self.position)
            * Mat3::from_rotation(self.rotation)
            * Mat3::from_scale(self.scale)
    }

    /// Maps a world point back into the placement's local frame: inverse
    /// translation, inverse rotation, then inverse scale. A zero scale component
    /// yields non-finite coordinates.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        let translated_point = point - self.position;
        let cos_a = self.rotation.cos();
        let sin_a = self.rotation.sin();
        // Rotation by -a: cos(-a) = cos(a), sin(-a) = -sin(a)
        let rotated_x = translated_point.x * cos_a + translated_point.y * sin_a;
        let rotated_y = -translated_point.x * sin_a + translated_point.y * cos_a;
        Vec2::new(rotated_x / self.scale.x, rotated_y / self.scale.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
