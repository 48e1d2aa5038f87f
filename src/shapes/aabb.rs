// Defines an Axis-Aligned Bounding Box

use crate::error::{GeometryError, Result};
use crate::math::matrix::Mat3;
use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its center and half extents.
///
/// The four corners are cached in counter-clockwise order starting at the
/// minimum corner and refreshed by every mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    center: Vec2,
    half_extent: Vec2,
    points: [Vec2; 4],
}

impl Aabb {
    /// Creates a new AABB. Fails if either half extent is negative or not finite.
    pub fn new(center: Vec2, half_extent: Vec2) -> Result<Self> {
        validate_half_extent(half_extent)?;
        let mut aabb = Self { center, half_extent, points: [Vec2::ZERO; 4] };
        aabb.recompute();
        Ok(aabb)
    }

    /// Creates an AABB from two opposite corners in any order.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        let lo = min.component_min(max);
        let hi = min.component_max(max);
        let mut aabb = Self {
            center: (lo + hi) * 0.5,
            half_extent: (hi - lo) * 0.5,
            points: [Vec2::ZERO; 4],
        };
        aabb.recompute();
        aabb
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min_pt, max_pt) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.component_min(*p), hi.component_max(*p)));
        Some(Self::from_min_max(min_pt, max_pt))
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    /// Corners in counter-clockwise order: min, (max.x, min.y), max, (min.x, max.y).
    pub fn points(&self) -> &[Vec2; 4] {
        &self.points
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    /// Smallest y, the top edge in a y-down editor viewport.
    pub fn top(&self) -> f64 {
        self.center.y - self.half_extent.y
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.half_extent.y
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.half_extent.x
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.half_extent.x
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.center = position;
        self.recompute();
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
        self.recompute();
    }

    /// Rotates the corners around `pivot`, then refits an axis-aligned box around them.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        let matrix = Mat3::from_rotation_about(angle, pivot);
        let rotated = self.points.map(|p| p.transform(&matrix));
        let (lo, hi) = rotated
            .iter()
            .skip(1)
            .fold((rotated[0], rotated[0]), |(lo, hi), p| (lo.component_min(*p), hi.component_max(*p)));
        self.center = (lo + hi) * 0.5;
        self.half_extent = (hi - lo) * 0.5;
        self.recompute();
    }

    /// Multiplies the half extents by `|factor|`, keeping the center fixed.
    pub fn scale(&mut self, factor: Vec2) {
        let factor = factor.abs();
        self.half_extent = Vec2::new(self.half_extent.x * factor.x, self.half_extent.y * factor.y);
        self.recompute();
    }

    /// Adds `delta` to the half extents. Fails, leaving the box untouched, if an
    /// extent would become negative.
    pub fn grow(&mut self, delta: Vec2) -> Result<()> {
        let half_extent = self.half_extent + delta;
        validate_half_extent(half_extent)?;
        self.half_extent = half_extent;
        self.recompute();
        Ok(())
    }

    /// Checks if the point lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extent.x && d.y <= self.half_extent.y
    }

    /// Checks if this AABB overlaps with another AABB (touching edges do not count).
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let x_overlap = self.right() > other.left() && self.left() < other.right();
        let y_overlap = self.bottom() > other.top() && self.top() < other.bottom();
        x_overlap && y_overlap
    }

    fn recompute(&mut self) {
        let min = self.min();
        let max = self.max();
        self.points = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
    }
}

fn validate_half_extent(half_extent: Vec2) -> Result<()> {
    if half_extent.x < 0.0 || half_extent.y < 0.0 || !half_extent.is_finite() {
        log::debug!("rejecting AABB half extent {:?}", half_extent);
        return Err(GeometryError::NegativeHalfExtent(half_extent));
    }
    Ok(())
}
