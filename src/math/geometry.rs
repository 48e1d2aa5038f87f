//! Pure functions over point lists shared by the shapes and the collision tests.

use std::f64::consts::{PI, TAU};

use super::vec2::Vec2;
use crate::error::{GeometryError, Result};

/// Clamps `value` into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value <= min {
        min
    } else if value >= max {
        max
    } else {
        value
    }
}

/// Linear interpolation between `start` and `end`.
pub fn lerp(start: f64, end: f64, weight: f64) -> f64 {
    start * (1.0 - weight) + end * weight
}

/// Midpoint of the segment `a`-`b`.
pub fn compute_midpoint(a: Vec2, b: Vec2) -> Vec2 {
    a + (b - a) * 0.5
}

/// Returns one unit normal per edge `(points[i], points[i + 1 mod n])`.
///
/// The normal is the edge direction rotated clockwise, which points outward for
/// counter-clockwise winding. Coincident consecutive points give a zero normal.
pub fn compute_normals(points: &[Vec2]) -> Result<Vec<Vec2>> {
    if points.len() < 2 {
        return Err(GeometryError::TooFewVertices { required: 2, actual: points.len() });
    }

    let n = points.len();
    let normals = (0..n)
        .map(|i| {
            let edge = points[(i + 1) % n] - points[i];
            -edge.normalize().perpendicular()
        })
        .collect();
    Ok(normals)
}

/// Area-weighted centroid of a simple polygon.
///
/// Sums the triangle fan rooted at `points[0]`. A zero-area point set (collinear,
/// or fewer than three points) divides by zero and returns NaN components.
pub fn compute_centroid(points: &[Vec2]) -> Vec2 {
    let Some(&origin) = points.first() else {
        return Vec2::new(f64::NAN, f64::NAN);
    };

    let mut weighted = Vec2::ZERO;
    let mut area_sum_2 = 0.0;
    for pair in points.windows(2).skip(1) {
        let (p2, p3) = (pair[0], pair[1]);
        // Twice the signed triangle area.
        let area_2 = (p2 - origin).cross(p3 - origin);
        weighted += (origin + p2 + p3) * area_2;
        area_sum_2 += area_2;
    }

    weighted / (3.0 * area_sum_2)
}

/// Signed area (positive for counter-clockwise winding).
pub fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum::<f64>() / 2.0
}

/// Tests for a strictly convex, non-self-intersecting polygon in either winding.
///
/// Walks the edge directions and accumulates the signed turn between consecutive
/// edges. Rejects coincident consecutive points, a straight continuation at the
/// first vertex, and any turn whose sign differs from the first. Accepts when the
/// total turning is one full revolution.
pub fn is_convex(points: &[Vec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut old = points[n - 2];
    let mut new = points[n - 1];
    let mut new_direction = (new.y - old.y).atan2(new.x - old.x);
    let mut angle_sum = 0.0;
    let mut orientation = 0.0;

    for (index, &point) in points.iter().enumerate() {
        let old_direction = new_direction;
        old = new;
        new = point;
        if old == new {
            return false;
        }
        new_direction = (new.y - old.y).atan2(new.x - old.x);

        let mut angle = new_direction - old_direction;
        if angle <= -PI {
            angle += TAU;
        } else if angle > PI {
            angle -= TAU;
        }

        if index == 0 {
            if angle == 0.0 {
                return false;
            }
            orientation = if angle > 0.0 { 1.0 } else { -1.0 };
        } else if orientation * angle <= 0.0 {
            return false;
        }
        angle_sum += angle;
    }

    (angle_sum / TAU).round().abs() == 1.0
}
