use std::ops::Deref;

use crate::math::vec2::Vec2;

/// A single location. Its center is itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub Vec2);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn center(&self) -> Vec2 {
        self.0
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.0 = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.0 += delta;
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl Deref for Point {
    type Target = Vec2;

    fn deref(&self) -> &Vec2 {
        &self.0
    }
}
