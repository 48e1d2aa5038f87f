//! Separating axis theorem.

use std::f64::consts::PI;

use crate::math::vec2::Vec2;

/// Axes of any axis-aligned box. Opposite normals give the same intervals, so two suffice.
pub const AABB_AXES: [Vec2; 2] = [Vec2 { x: 1.0, y: 0.0 }, Vec2 { x: 0.0, y: 1.0 }];

/// Axes shorter than this come from degenerate edges and are skipped.
const MIN_AXIS_LENGTH_SQUARED: f64 = 1e-10;

/// Pushes whose lengths differ by less than this are equally short.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Where [`axis_key`] folds the half-turn. Kept off the axis-aligned and regular
/// polygon directions so rounding noise cannot carry a normal across the fold.
const AXIS_KEY_REFERENCE: f64 = 1.0;

/// A simple projection on an axis that can be used to check for overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Minimum projected value.
    pub min: f64,
    /// Maximum projected value.
    pub max: f64,
}

impl Projection {
    /// Project a point set on an axis.
    pub fn of_points(points: &[Vec2], axis: Vec2) -> Self {
        points.iter().fold(
            Self { min: f64::INFINITY, max: f64::NEG_INFINITY },
            |acc, p| {
                let proj = axis.dot(*p);
                Self { min: acc.min.min(proj), max: acc.max.max(proj) }
            },
        )
    }

    /// Project a circle on a unit axis: the center's projection plus and minus the radius.
    pub fn of_circle(center: Vec2, radius: f64, axis: Vec2) -> Self {
        let proj = axis.dot(center);
        Self { min: proj - radius, max: proj + radius }
    }

    /// Strict overlap: intervals that only touch are separated.
    pub fn overlaps(&self, other: Self) -> bool {
        self.min < other.max && self.max > other.min
    }

    /// Length of the shared part of both intervals.
    pub fn overlap(&self, other: Self) -> f64 {
        (self.max.min(other.max) - self.min.max(other.min)).max(0.0)
    }
}

/// Runs the separating axis test over `axes`.
///
/// Returns `None` as soon as an axis separates the projections. Otherwise returns
/// `axis * overlap` for the axis with the smallest push, with an arbitrary sign.
/// Pushes within [`TIE_TOLERANCE`] of the smallest are ties, settled by
/// [`axis_key`], so the result does not depend on the order of `axes`.
pub fn min_translation<A, B>(axes: impl IntoIterator<Item = Vec2>, project_a: A, project_b: B) -> Option<Vec2>
where
    A: Fn(Vec2) -> Projection,
    B: Fn(Vec2) -> Projection,
{
    let mut pushes = Vec::new();

    for axis in axes {
        if axis.magnitude_squared() < MIN_AXIS_LENGTH_SQUARED {
            continue;
        }

        let a = project_a(axis);
        let b = project_b(axis);
        if !a.overlaps(b) {
            // Separating axis found, no collision
            return None;
        }
        pushes.push(axis * a.overlap(b));
    }

    let shortest = pushes.iter().map(|p| p.magnitude()).fold(f64::INFINITY, f64::min);
    pushes
        .into_iter()
        .filter(|p| p.magnitude() <= shortest + TIE_TOLERANCE)
        .min_by(|p, q| axis_key(*p).total_cmp(&axis_key(*q)))
}

/// Direction of `axis` as an angle in `[0, π)` from [`AXIS_KEY_REFERENCE`].
/// `axis` and `-axis` share a key.
pub fn axis_key(axis: Vec2) -> f64 {
    (axis.y.atan2(axis.x) - AXIS_KEY_REFERENCE).rem_euclid(PI)
}

/// Flips `mtv` if needed so that it points along `direction` (from the second
/// shape's center toward the first's).
pub fn orient(mtv: Vec2, direction: Vec2) -> Vec2 {
    if mtv.dot(direction) < 0.0 {
        -mtv
    } else {
        mtv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn unit_square(offset: Vec2) -> Vec<Vec2> {
        vec![
            offset + Vec2::new(0.0, 0.0),
            offset + Vec2::new(1.0, 0.0),
            offset + Vec2::new(1.0, 1.0),
            offset + Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_projection_of_points() {
        let p = Projection::of_points(&unit_square(Vec2::new(2.0, 0.0)), Vec2::new(1.0, 0.0));
        assert_eq!(p, Projection { min: 2.0, max: 3.0 });
    }

    #[test]
    fn test_projection_of_circle() {
        let p = Projection::of_circle(Vec2::new(0.0, 5.0), 2.0, Vec2::new(0.0, 1.0));
        assert_eq!(p, Projection { min: 3.0, max: 7.0 });
    }

    #[test]
    fn test_projection_overlap_is_strict() {
        let a = Projection { min: 0.0, max: 1.0 };
        let touching = Projection { min: 1.0, max: 2.0 };
        let inside = Projection { min: 0.25, max: 0.5 };
        assert!(!a.overlaps(touching));
        assert!(a.overlaps(inside));
        assert_eq!(a.overlap(touching), 0.0);
        assert_eq!(a.overlap(inside), 0.25);
    }

    #[test]
    fn test_min_translation_picks_smallest_axis() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(0.75, 0.5));
        let mtv = min_translation(AABB_AXES, |axis| Projection::of_points(&a, axis), |axis| {
            Projection::of_points(&b, axis)
        })
        .expect("squares overlap");
        assert!((mtv.x - 0.25).abs() < EPSILON);
        assert!(mtv.y.abs() < EPSILON);
    }

    #[test]
    fn test_min_translation_separated() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(0.5, 3.0));
        let mtv = min_translation(AABB_AXES, |axis| Projection::of_points(&a, axis), |axis| {
            Projection::of_points(&b, axis)
        });
        assert!(mtv.is_none());
    }

    #[test]
    fn test_min_translation_skips_zero_axes() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(0.5, 0.5));
        let axes = [Vec2::ZERO, Vec2::new(1.0, 0.0)];
        let mtv = min_translation(axes, |axis| Projection::of_points(&a, axis), |axis| {
            Projection::of_points(&b, axis)
        });
        assert_eq!(mtv, Some(Vec2::new(0.5, 0.0)));
    }

    #[test]
    fn test_min_translation_tie_ignores_axis_order() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(0.5, 0.5));
        let project_a = |axis| Projection::of_points(&a, axis);
        let project_b = |axis| Projection::of_points(&b, axis);

        // Both axes overlap by 0.5.
        let forward = min_translation([Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)], project_a, project_b);
        let backward = min_translation([Vec2::new(0.0, -1.0), Vec2::new(-1.0, 0.0)], project_a, project_b);
        let (forward, backward) = (forward.expect("overlap"), backward.expect("overlap"));
        assert!((forward - orient(backward, forward)).magnitude() < EPSILON);
    }

    #[test]
    fn test_min_translation_near_tie_uses_axis_key() {
        let a = unit_square(Vec2::ZERO);
        let b = unit_square(Vec2::new(0.5, 0.5 + 1e-12));
        let axes = [Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)];
        let mtv = min_translation(axes, |axis| Projection::of_points(&a, axis), |axis| {
            Projection::of_points(&b, axis)
        })
        .expect("squares overlap");
        let winner = if axis_key(Vec2::new(1.0, 0.0)) < axis_key(Vec2::new(0.0, 1.0)) {
            Vec2::new(1.0, 0.0)
        } else {
            Vec2::new(0.0, 1.0)
        };
        assert!(mtv.normalize().dot(winner).abs() > 1.0 - EPSILON);
    }

    #[test]
    fn test_axis_key_ignores_sign() {
        for axis in [Vec2::new(1.0, 0.0), Vec2::new(0.3, -0.8), Vec2::new(-0.6, 0.6)] {
            assert!((axis_key(axis) - axis_key(-axis)).abs() < EPSILON);
            assert!((0.0..PI).contains(&axis_key(axis)));
        }
    }

    #[test]
    fn test_orient() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(orient(v, Vec2::new(-2.0, 1.0)), Vec2::new(-1.0, 0.0));
        assert_eq!(orient(v, Vec2::new(2.0, 1.0)), v);
    }
}
