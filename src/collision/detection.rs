//! Pairwise intersection tests.
//!
//! Functions returning `Option<Vec2>` give the minimum translation vector that
//! moves the *first* argument out of the second, or `None` when the shapes do not
//! overlap. Functions returning `bool` only report contact. The mirrored functions
//! (e.g. `circle_polygon`) swap their arguments and negate the vector.

use crate::math::vec2::Vec2;
use crate::shapes::{Aabb, Circle, LineSegment, Point, Polygon};

use super::sat::{self, Projection, AABB_AXES};

/// Fallback push direction when two centers coincide and no direction is defined.
const FALLBACK_AXIS: Vec2 = Vec2::UP;

// --- Polygon ---

/// Checks for collision between two convex polygons using SAT.
pub fn polygon_polygon(first: &Polygon, second: &Polygon) -> Option<Vec2> {
    let axes = first.normals().iter().chain(second.normals()).copied();
    let mtv = sat::min_translation(
        axes,
        |axis| Projection::of_points(first.points(), axis),
        |axis| Projection::of_points(second.points(), axis),
    )?;
    Some(sat::orient(mtv, first.center() - second.center()))
}

/// Checks for collision between a polygon and an AABB, treating the box as a
/// four-cornered polygon.
pub fn polygon_aabb(first: &Polygon, second: &Aabb) -> Option<Vec2> {
    let axes = first.normals().iter().copied().chain(AABB_AXES);
    let mtv = sat::min_translation(
        axes,
        |axis| Projection::of_points(first.points(), axis),
        |axis| Projection::of_points(second.points(), axis),
    )?;
    Some(sat::orient(mtv, first.center() - second.center()))
}

pub fn aabb_polygon(first: &Aabb, second: &Polygon) -> Option<Vec2> {
    polygon_aabb(second, first).map(|mtv| -mtv)
}

/// True if the segment has an endpoint inside the polygon or crosses one of its edges.
pub fn polygon_line(first: &Polygon, second: &LineSegment, epsilon: f64) -> bool {
    if contains_point(first.points(), second.p0()) || contains_point(first.points(), second.p1()) {
        return true;
    }
    crosses_any_edge(first.points(), second, epsilon)
}

pub fn line_polygon(first: &LineSegment, second: &Polygon, epsilon: f64) -> bool {
    polygon_line(second, first, epsilon)
}

/// Checks for collision between a polygon and a circle using SAT over the
/// polygon's edge normals.
pub fn polygon_circle(first: &Polygon, second: &Circle) -> Option<Vec2> {
    let mtv = sat::min_translation(
        first.normals().iter().copied(),
        |axis| Projection::of_points(first.points(), axis),
        |axis| Projection::of_circle(second.center(), second.radius(), axis),
    )?;
    Some(sat::orient(mtv, first.center() - second.center()))
}

pub fn circle_polygon(first: &Circle, second: &Polygon) -> Option<Vec2> {
    polygon_circle(second, first).map(|mtv| -mtv)
}

/// Even-odd point in polygon test.
pub fn polygon_point(first: &Polygon, second: &Point) -> bool {
    contains_point(first.points(), second.center())
}

pub fn point_polygon(first: &Point, second: &Polygon) -> bool {
    polygon_point(second, first)
}

// --- AABB ---

/// Checks for collision between two AABBs, pushing along the axis of least overlap.
pub fn aabb_aabb(first: &Aabb, second: &Aabb) -> Option<Vec2> {
    let delta = second.center() - first.center();
    let reach = second.half_extent() + first.half_extent();
    let px = reach.x - delta.x.abs();
    let py = reach.y - delta.y.abs();
    if px <= 0.0 || py <= 0.0 {
        return None;
    }

    if px < py {
        Some(Vec2::new(-px * direction_sign(delta.x), 0.0))
    } else {
        Some(Vec2::new(0.0, -py * direction_sign(delta.y)))
    }
}

/// True if the segment has an endpoint within `epsilon` of the box or crosses one of its edges.
pub fn aabb_line(first: &Aabb, second: &LineSegment, epsilon: f64) -> bool {
    if aabb_circle_mtv(first, second.p0(), epsilon).is_some()
        || aabb_circle_mtv(first, second.p1(), epsilon).is_some()
    {
        return true;
    }
    crosses_any_edge(first.points(), second, epsilon)
}

pub fn line_aabb(first: &LineSegment, second: &Aabb, epsilon: f64) -> bool {
    aabb_line(second, first, epsilon)
}

/// Checks for collision between an AABB and a circle via the box point closest to
/// the circle's center.
pub fn aabb_circle(first: &Aabb, second: &Circle) -> Option<Vec2> {
    aabb_circle_mtv(first, second.center(), second.radius())
}

pub fn circle_aabb(first: &Circle, second: &Aabb) -> Option<Vec2> {
    aabb_circle(second, first).map(|mtv| -mtv)
}

/// Treats the point as a circle of radius `epsilon`.
pub fn aabb_point(first: &Aabb, second: &Point, epsilon: f64) -> Option<Vec2> {
    aabb_circle_mtv(first, second.center(), epsilon)
}

pub fn point_aabb(first: &Point, second: &Aabb, epsilon: f64) -> Option<Vec2> {
    aabb_point(second, first, epsilon).map(|mtv| -mtv)
}

fn aabb_circle_mtv(aabb: &Aabb, center: Vec2, radius: f64) -> Option<Vec2> {
    let half = aabb.half_extent();
    let delta = center - aabb.center();
    let closest = delta.clamp(-half, half) + aabb.center();

    let difference = closest - center;
    let distance = difference.magnitude();
    let overlap = radius - distance;
    if overlap <= 0.0 {
        return None;
    }

    if distance > 0.0 {
        return Some(difference * (overlap / distance));
    }

    // The center is inside the box: leave through the nearest face.
    let px = half.x - delta.x.abs() + radius;
    let py = half.y - delta.y.abs() + radius;
    if px < py {
        Some(Vec2::new(-px * direction_sign(delta.x), 0.0))
    } else {
        Some(Vec2::new(0.0, -py * direction_sign(delta.y)))
    }
}

// --- Line ---

/// Checks whether two segments share a point (Paul Bourke's parametric solution).
///
/// Collinear segments count as intersecting only if they overlap with positive
/// length; parallel, non-collinear segments never intersect.
pub fn line_line(first: &LineSegment, second: &LineSegment, epsilon: f64) -> bool {
    segments_intersect(first.p0(), first.p1(), second.p0(), second.p1(), epsilon)
}

/// True if an endpoint lies in the circle, or the closest point of the segment to
/// the circle's center is within the radius.
pub fn line_circle(first: &LineSegment, second: &Circle, epsilon: f64) -> bool {
    let center = second.center();
    let radius = second.radius();
    if circle_point_mtv(center, radius, first.p0(), epsilon).is_some()
        || circle_point_mtv(center, radius, first.p1(), epsilon).is_some()
    {
        return true;
    }

    // A zero-length segment is fully covered by the endpoint test.
    let length_squared = first.length_squared();
    if length_squared == 0.0 {
        return false;
    }

    let direction = first.direction();
    let t = (center - first.p0()).dot(direction) / length_squared;
    let closest = first.p0() + direction * t;

    if !on_segment(first.p0(), first.p1(), closest, epsilon) {
        return false;
    }

    closest.distance_squared(center) < radius * radius
}

pub fn circle_line(first: &Circle, second: &LineSegment, epsilon: f64) -> bool {
    line_circle(second, first, epsilon)
}

/// True if the point lies on the segment, within `epsilon` of the path length.
pub fn line_point(first: &LineSegment, second: &Point, epsilon: f64) -> bool {
    on_segment(first.p0(), first.p1(), second.center(), epsilon)
}

pub fn point_line(first: &Point, second: &LineSegment, epsilon: f64) -> bool {
    line_point(second, first, epsilon)
}

fn on_segment(p0: Vec2, p1: Vec2, point: Vec2, epsilon: f64) -> bool {
    let d = point.distance(p0) + point.distance(p1);
    let length = p0.distance(p1);
    d >= length - epsilon && d <= length + epsilon
}

fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2, epsilon: f64) -> bool {
    let ab = b - a;
    let cd = d - c;
    let ca = a - c;

    // A zero-length segment is a point.
    match (ab == Vec2::ZERO, cd == Vec2::ZERO) {
        (true, true) => return coincide(a, c, epsilon),
        (true, false) => return on_segment(c, d, a, epsilon),
        (false, true) => return on_segment(a, b, c, epsilon),
        (false, false) => {}
    }

    let denom = cd.y * ab.x - cd.x * ab.y;
    let numer_a = cd.x * ca.y - cd.y * ca.x;
    let numer_b = ab.x * ca.y - ab.y * ca.x;

    // Coincident: compare the 1D intervals along the shared direction.
    if numer_a.abs() < epsilon && numer_b.abs() < epsilon && denom.abs() < epsilon {
        let axis = ab.normalize();
        let first = Projection::of_points(&[a, b], axis);
        let second = Projection::of_points(&[c, d], axis);
        return first.overlap(second) > 0.0;
    }

    // Parallel
    if denom.abs() < epsilon {
        return false;
    }

    let ua = numer_a / denom;
    let ub = numer_b / denom;
    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

fn crosses_any_edge(points: &[Vec2], line: &LineSegment, epsilon: f64) -> bool {
    let n = points.len();
    (0..n).any(|i| segments_intersect(points[i], points[(i + 1) % n], line.p0(), line.p1(), epsilon))
}

// --- Circle ---

/// Checks for collision between two circles.
///
/// The vector has length `r0 + r1 - distance` for both partial overlap and full
/// containment; circles that exactly touch yield a zero-length vector.
pub fn circle_circle(first: &Circle, second: &Circle) -> Option<Vec2> {
    let delta = second.center() - first.center();
    let distance_squared = delta.magnitude_squared();
    let total_radius = first.radius() + second.radius();
    if distance_squared > total_radius * total_radius {
        return None;
    }

    let distance = distance_squared.sqrt();
    let overlap = total_radius - distance;
    let direction = if distance > 0.0 { delta / distance } else { FALLBACK_AXIS };
    Some(-direction * overlap)
}

/// Returns the two points where the circles' outlines cross.
///
/// `None` if the circles are apart, one lies entirely inside the other, or they
/// are concentric. Tangent circles return the touching point twice.
pub fn circle_circle_crossings(first: &Circle, second: &Circle) -> Option<[Vec2; 2]> {
    let (r0, r1) = (first.radius(), second.radius());
    let delta = second.center() - first.center();
    let distance = delta.magnitude();
    if distance > r0 + r1 || distance < (r0 - r1).abs() || distance == 0.0 {
        return None;
    }

    // Distance from the first center to the chord's midpoint, then half the chord.
    let a = (r0 * r0 - r1 * r1 + distance * distance) / (2.0 * distance);
    let h = (r0 * r0 - a * a).max(0.0).sqrt();
    let mid = first.center() + delta * (a / distance);
    let offset = delta.perpendicular() * (h / distance);
    Some([mid + offset, mid - offset])
}

/// Checks whether the point lies within `radius + epsilon` of the center.
pub fn circle_point(first: &Circle, second: &Point, epsilon: f64) -> Option<Vec2> {
    circle_point_mtv(first.center(), first.radius(), second.center(), epsilon)
}

pub fn point_circle(first: &Point, second: &Circle, epsilon: f64) -> Option<Vec2> {
    circle_point(second, first, epsilon).map(|mtv| -mtv)
}

fn circle_point_mtv(center: Vec2, radius: f64, point: Vec2, epsilon: f64) -> Option<Vec2> {
    let delta = point - center;
    let distance_squared = delta.magnitude_squared();
    let total_radius = radius + epsilon;
    if distance_squared >= total_radius * total_radius {
        return None;
    }

    let distance = distance_squared.sqrt();
    let overlap = total_radius - distance;
    let direction = if distance > 0.0 { delta / distance } else { FALLBACK_AXIS };
    Some(-direction * overlap)
}

// --- Point ---

pub fn point_point(first: &Point, second: &Point, epsilon: f64) -> bool {
    coincide(first.center(), second.center(), epsilon)
}

fn coincide(a: Vec2, b: Vec2, epsilon: f64) -> bool {
    let d = (a - b).abs();
    d.x < epsilon && d.y < epsilon
}

// --- Helpers ---

/// Even-odd rule with a horizontal ray cast toward +x.
fn contains_point(points: &[Vec2], p: Vec2) -> bool {
    let n = points.len();
    let mut inside = false;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let straddles = (a.y >= p.y && b.y < p.y) || (a.y < p.y && b.y >= p.y);
        if straddles && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
    }
    inside
}

/// Sign of a center delta, treating zero as positive so a push is always produced.
fn direction_sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
