use crate::math::geometry::compute_midpoint;
use crate::math::matrix::Mat3;
use crate::math::vec2::Vec2;

/// A finite segment between `p0` and `p1`.
///
/// The midpoint and length are cached and refreshed by every mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    p0: Vec2,
    p1: Vec2,
    center: Vec2,
    length: f64,
}

impl LineSegment {
    pub fn new(p0: Vec2, p1: Vec2) -> Self {
        let mut line = Self { p0, p1, center: Vec2::ZERO, length: 0.0 };
        line.recompute();
        line
    }

    pub fn p0(&self) -> Vec2 {
        self.p0
    }

    pub fn p1(&self) -> Vec2 {
        self.p1
    }

    /// Midpoint of the segment.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Calculates the squared length of the line segment.
    pub fn length_squared(&self) -> f64 {
        self.p0.distance_squared(self.p1)
    }

    /// Returns the direction vector of the line segment (from p0 to p1).
    pub fn direction(&self) -> Vec2 {
        self.p1 - self.p0
    }

    pub fn set_endpoints(&mut self, p0: Vec2, p1: Vec2) {
        self.p0 = p0;
        self.p1 = p1;
        self.recompute();
    }

    /// Moves the segment so that its midpoint lands on `position`.
    pub fn move_to(&mut self, position: Vec2) {
        let delta = position - self.center;
        self.translate(delta);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.p0 += delta;
        self.p1 += delta;
        self.recompute();
    }

    /// Rotates both endpoints by `angle` radians around `pivot`.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        self.apply(&Mat3::from_rotation_about(angle, pivot));
    }

    /// Scales both endpoints relative to the origin.
    pub fn scale(&mut self, factor: Vec2) {
        self.apply(&Mat3::from_scale(factor));
    }

    fn apply(&mut self, matrix: &Mat3) {
        self.p0 = self.p0.transform(matrix);
        self.p1 = self.p1.transform(matrix);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.center = compute_midpoint(self.p0, self.p1);
        self.length = self.p0.distance(self.p1);
    }
}
