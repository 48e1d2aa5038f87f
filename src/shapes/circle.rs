use crate::error::{GeometryError, Result};
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Vec2,
    radius: f64,
}

impl Circle {
    /// Creates a circle. Fails unless `radius` is finite and strictly positive.
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.center = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if radius <= 0.0 || !radius.is_finite() {
        log::debug!("rejecting circle radius {radius}");
        return Err(GeometryError::NonPositiveRadius(radius));
    }
    Ok(())
}
