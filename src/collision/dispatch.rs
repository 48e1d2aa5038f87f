use crate::shapes::Shape;

use super::detection::*;
use super::intersection::Intersection;

/// Tolerance used by [`intersect`] for the point and line tests.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Tests any two shapes against each other with [`DEFAULT_EPSILON`].
pub fn intersect(a: &Shape, b: &Shape) -> Intersection {
    intersect_with_epsilon(a, b, DEFAULT_EPSILON)
}

/// Tests any two shapes against each other.
///
/// Any translation vector in the result moves `a` out of `b`.
pub fn intersect_with_epsilon(a: &Shape, b: &Shape, epsilon: f64) -> Intersection {
    log::trace!("intersect {} / {} (epsilon {})", a.kind(), b.kind(), epsilon);

    match (a, b) {
        (Shape::Polygon(a), Shape::Polygon(b)) => polygon_polygon(a, b).into(),
        (Shape::Polygon(a), Shape::Aabb(b)) => polygon_aabb(a, b).into(),
        (Shape::Polygon(a), Shape::Line(b)) => polygon_line(a, b, epsilon).into(),
        (Shape::Polygon(a), Shape::Circle(b)) => polygon_circle(a, b).into(),
        (Shape::Polygon(a), Shape::Point(b)) => polygon_point(a, b).into(),

        (Shape::Aabb(a), Shape::Polygon(b)) => aabb_polygon(a, b).into(),
        (Shape::Aabb(a), Shape::Aabb(b)) => aabb_aabb(a, b).into(),
        (Shape::Aabb(a), Shape::Line(b)) => aabb_line(a, b, epsilon).into(),
        (Shape::Aabb(a), Shape::Circle(b)) => aabb_circle(a, b).into(),
        (Shape::Aabb(a), Shape::Point(b)) => aabb_point(a, b, epsilon).into(),

        (Shape::Line(a), Shape::Polygon(b)) => line_polygon(a, b, epsilon).into(),
        (Shape::Line(a), Shape::Aabb(b)) => line_aabb(a, b, epsilon).into(),
        (Shape::Line(a), Shape::Line(b)) => line_line(a, b, epsilon).into(),
        (Shape::Line(a), Shape::Circle(b)) => line_circle(a, b, epsilon).into(),
        (Shape::Line(a), Shape::Point(b)) => line_point(a, b, epsilon).into(),

        (Shape::Circle(a), Shape::Polygon(b)) => circle_polygon(a, b).into(),
        (Shape::Circle(a), Shape::Aabb(b)) => circle_aabb(a, b).into(),
        (Shape::Circle(a), Shape::Line(b)) => circle_line(a, b, epsilon).into(),
        (Shape::Circle(a), Shape::Circle(b)) => circle_circle(a, b).into(),
        (Shape::Circle(a), Shape::Point(b)) => circle_point(a, b, epsilon).into(),

        (Shape::Point(a), Shape::Polygon(b)) => point_polygon(a, b).into(),
        (Shape::Point(a), Shape::Aabb(b)) => point_aabb(a, b, epsilon).into(),
        (Shape::Point(a), Shape::Line(b)) => point_line(a, b, epsilon).into(),
        (Shape::Point(a), Shape::Circle(b)) => point_circle(a, b, epsilon).into(),
        (Shape::Point(a), Shape::Point(b)) => point_point(a, b, epsilon).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::{Aabb, Circle, LineSegment, Point, Polygon, ShapeKind};

    fn shape_of(kind: ShapeKind) -> Shape {
        match kind {
            ShapeKind::Point => Point::new(0.0, 0.0).into(),
            ShapeKind::Line => LineSegment::new(Vec2::new(-1.0, -0.5), Vec2::new(1.0, 0.5)).into(),
            ShapeKind::Circle => Circle::new(Vec2::new(0.0, 0.0), 1.0).expect("valid circle").into(),
            ShapeKind::Aabb => Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)).expect("valid box").into(),
            ShapeKind::Polygon => {
                Polygon::new(vec![Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0)])
                    .expect("triangle is convex")
                    .into()
            }
        }
    }

    #[test]
    fn test_every_pair_dispatches() {
        for a in ShapeKind::ALL {
            for b in ShapeKind::ALL {
                let result = intersect(&shape_of(a), &shape_of(b));
                assert!(result.is_hit(), "{a} / {b} should overlap");
                match result {
                    Intersection::Mtv(_) => assert!(a.yields_mtv_with(b), "{a} / {b}"),
                    Intersection::Touch(_) => assert!(!a.yields_mtv_with(b), "{a} / {b}"),
                }
            }
        }
    }

    #[test]
    fn test_reversed_pair_negates_mtv() {
        let circle: Shape = Circle::new(Vec2::new(0.0, 0.0), 5.0).expect("valid circle").into();
        let other: Shape = Circle::new(Vec2::new(8.0, 0.0), 4.0).expect("valid circle").into();
        let forward = intersect(&circle, &other);
        let backward = intersect(&other, &circle);
        assert_eq!(forward.mtv(), Some(Vec2::new(-1.0, 0.0)));
        assert_eq!(backward, -forward);
    }

    #[test]
    fn test_epsilon_is_threaded_through() {
        let a: Shape = Point::new(0.0, 0.0).into();
        let b: Shape = Point::new(0.01, 0.0).into();
        assert!(!intersect(&a, &b).is_hit());
        assert!(intersect_with_epsilon(&a, &b, 0.1).is_hit());
    }
}
