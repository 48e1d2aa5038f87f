use crate::error::{GeometryError, Result};
use crate::math::geometry::{compute_centroid, compute_normals, is_convex, signed_area};
use crate::math::matrix::Mat3;
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::aabb::Aabb;

/// Represents a convex polygon by its vertices in world space.
///
/// Besides the vertices the polygon carries an affine placement (position,
/// rotation, scale). Changing the placement re-projects every vertex through
/// `new_matrix * old_matrix^-1`, which is how the whole body is dragged, rotated
/// or stretched. Editing single vertices leaves the placement's position and
/// rotation alone and refits its scale to the new extents.
///
/// Normals and centroid are recomputed eagerly after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
    normals: Vec<Vec2>,
    center: Vec2,
    transform: Transform,
    matrix: Mat3,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Fails if fewer than 3 vertices are provided or the vertices do not form a
    /// convex polygon with consistent winding.
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        validate(&points)?;

        let scale = farthest_extent(points.iter().copied());
        let transform = Transform::with_scale(Vec2::ZERO, 0.0, scale);
        let mut polygon = Polygon {
            points,
            normals: Vec::new(),
            center: Vec2::ZERO,
            transform,
            matrix: transform.matrix(),
        };
        polygon.recompute();
        Ok(polygon)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A polygon always has at least three vertices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Outward unit normal of each edge `(points[i], points[i + 1])`, for
    /// counter-clockwise winding. Clockwise polygons get inward normals, which is
    /// equivalent for separating-axis tests.
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Area-weighted centroid.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    pub fn scale(&self) -> Vec2 {
        self.transform.scale
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The placement matrix `T * R * S`.
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.points).abs()
    }

    pub fn to_aabb(&self) -> Aabb {
        // Three or more points, so the bounding box always exists.
        Aabb::from_points(&self.points).unwrap_or_else(|| Aabb::from_min_max(self.center, self.center))
    }

    pub fn set_position(&mut self, position: Vec2) {
        let mut transform = self.transform;
        transform.position = position;
        self.reproject(transform);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        let mut transform = self.transform;
        transform.rotation = rotation;
        self.reproject(transform);
    }

    /// Sets the placement scale. Zero or non-finite components would make the
    /// placement non-invertible and are rejected.
    pub fn set_scale(&mut self, scale: Vec2) -> Result<()> {
        if scale.x == 0.0 || scale.y == 0.0 || !scale.is_finite() {
            log::debug!("rejecting polygon scale {:?}", scale);
            return Err(GeometryError::SingularTransform(scale));
        }
        let mut transform = self.transform;
        transform.scale = scale;
        self.reproject(transform);
        Ok(())
    }

    /// Shifts the placement, and with it every vertex, by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.transform.position + delta);
    }

    /// Moves the polygon so its centroid lands on `position`.
    pub fn move_to(&mut self, position: Vec2) {
        self.translate(position - self.center);
    }

    /// Overwrites vertex `index`. The edit is rejected if the result is not convex.
    pub fn move_point(&mut self, index: usize, value: Vec2) -> Result<()> {
        self.edit_points(|points| {
            let len = points.len();
            let slot = points.get_mut(index).ok_or(GeometryError::IndexOutOfBounds { index, len })?;
            *slot = value;
            Ok(())
        })
    }

    /// Inserts `point` before `index` (`index == len` appends), like `Vec::insert`.
    /// The edit is rejected if the result is not convex.
    pub fn add_point(&mut self, index: usize, point: Vec2) -> Result<()> {
        self.edit_points(|points| {
            if index > points.len() {
                return Err(GeometryError::IndexOutOfBounds { index, len: points.len() });
            }
            points.insert(index, point);
            Ok(())
        })
    }

    /// Removes vertex `index`, like `Vec::remove`. The edit is rejected if fewer
    /// than 3 vertices would remain or the result is not convex.
    pub fn remove_point(&mut self, index: usize) -> Result<()> {
        self.edit_points(|points| {
            if index >= points.len() {
                return Err(GeometryError::IndexOutOfBounds { index, len: points.len() });
            }
            points.remove(index);
            Ok(())
        })
    }

    /// Applies `edit` to a copy of the vertices and commits only a valid result.
    fn edit_points<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Vec2>) -> Result<()>,
    {
        let mut points = self.points.clone();
        edit(&mut points)?;
        validate(&points)?;

        self.points = points;
        self.refit_scale();
        self.recompute();
        Ok(())
    }

    /// Moves every vertex from the current placement into `transform`, through
    /// `new_matrix * old_matrix^-1`.
    fn reproject(&mut self, transform: Transform) {
        log::trace!("re-projecting {} polygon points into {:?}", self.points.len(), transform);
        let Some(inverse) = self.matrix.inverse() else {
            // Scales are validated non-zero, so the current placement always inverts.
            log::debug!("polygon placement {:?} is singular, keeping points", self.transform);
            return;
        };
        let matrix = transform.matrix();
        let combined = matrix * inverse;
        for point in &mut self.points {
            *point = point.transform(&combined);
        }
        self.transform = transform;
        self.matrix = matrix;
        self.recompute();
    }

    /// Recomputes the scale as the farthest vertex extent in the placement's
    /// unscaled local frame, keeping position and rotation.
    fn refit_scale(&mut self) {
        let unscaled = Transform::new(self.transform.position, self.transform.rotation);
        let scale = farthest_extent(self.points.iter().map(|p| unscaled.apply_inverse(*p)));
        self.transform.scale = scale;
        self.matrix = self.transform.matrix();
    }

    /// Refreshes normals and centroid from the current vertices.
    fn recompute(&mut self) {
        // Every polygon keeps at least three vertices, so the normals always exist.
        self.normals = compute_normals(&self.points).unwrap_or_default();
        self.center = compute_centroid(&self.points);
    }
}

fn validate(points: &[Vec2]) -> Result<()> {
    if points.len() < 3 {
        log::debug!("rejecting polygon with {} vertices", points.len());
        return Err(GeometryError::TooFewVertices { required: 3, actual: points.len() });
    }
    if !is_convex(points) {
        log::debug!("rejecting non-convex polygon {:?}", points);
        return Err(GeometryError::NotConvex);
    }
    Ok(())
}

fn farthest_extent(points: impl Iterator<Item = Vec2>) -> Vec2 {
    points.fold(Vec2::ZERO, |far, p| far.component_max(p.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    // Helper to create a standard square polygon centered at `offset`
    fn square(half: f64, offset: Vec2) -> Polygon {
        Polygon::new(vec![
            offset + Vec2::new(-half, -half),
            offset + Vec2::new(half, -half),
            offset + Vec2::new(half, half),
            offset + Vec2::new(-half, half),
        ])
        .expect("square is convex")
    }

    fn assert_points_eq(a: &[Vec2], b: &[Vec2]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b.iter()) {
            assert!((p.x - q.x).abs() < EPSILON, "{:?} != {:?}", a, b);
            assert!((p.y - q.y).abs() < EPSILON, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_polygon_new() {
        let vertices = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let polygon = Polygon::new(vertices).expect("triangle is convex");
        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.normals().len(), 3);
    }

    #[test]
    fn test_polygon_new_too_few_vertices() {
        let vertices = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
        assert_eq!(
            Polygon::new(vertices),
            Err(GeometryError::TooFewVertices { required: 3, actual: 2 })
        );
    }

    #[test]
    fn test_polygon_new_rejects_concave() {
        let vertices = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert_eq!(Polygon::new(vertices), Err(GeometryError::NotConvex));
    }

    #[test]
    fn test_polygon_initial_placement() {
        let polygon = Polygon::new(vec![
            Vec2::new(-3.0, -1.0),
            Vec2::new(2.0, -1.0),
            Vec2::new(2.0, 1.5),
        ])
        .expect("triangle is convex");
        assert_eq!(polygon.position(), Vec2::ZERO);
        assert_eq!(polygon.rotation(), 0.0);
        assert_eq!(polygon.scale(), Vec2::new(3.0, 1.5));
        assert_eq!(*polygon.matrix(), Mat3::from_scale(Vec2::new(3.0, 1.5)));
    }

    #[test]
    fn test_polygon_area_and_center() {
        let polygon = square(0.5, Vec2::new(10.0, -5.0));
        assert!((polygon.area() - 1.0).abs() < EPSILON);
        assert!((polygon.center().x - 10.0).abs() < EPSILON);
        assert!((polygon.center().y - -5.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_set_position_same_value_is_noop() {
        let mut polygon = square(2.0, Vec2::new(1.0, 1.0));
        polygon.set_rotation(0.4);
        let before = polygon.points().to_vec();
        polygon.set_position(polygon.position());
        assert_points_eq(polygon.points(), &before);
    }

    #[test]
    fn test_polygon_set_position_translates_points() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.set_position(Vec2::new(5.0, -2.0));
        assert_points_eq(
            polygon.points(),
            &[
                Vec2::new(4.0, -3.0),
                Vec2::new(6.0, -3.0),
                Vec2::new(6.0, -1.0),
                Vec2::new(4.0, -1.0),
            ],
        );
        assert!((polygon.center().x - 5.0).abs() < EPSILON);
        assert!((polygon.center().y - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_set_rotation_rotates_about_position() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.set_rotation(PI / 2.0);
        // A quarter turn maps the square onto itself with the vertices shifted by one.
        assert_points_eq(
            polygon.points(),
            &[
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(-1.0, -1.0),
            ],
        );
        let n = polygon.normals()[0];
        assert!((n.x - 1.0).abs() < EPSILON);
        assert!(n.y.abs() < EPSILON);
    }

    #[test]
    fn test_polygon_set_scale_stretches_points() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.set_scale(Vec2::new(2.0, 1.0)).expect("invertible scale");
        assert_points_eq(
            polygon.points(),
            &[
                Vec2::new(-2.0, -1.0),
                Vec2::new(2.0, -1.0),
                Vec2::new(2.0, 1.0),
                Vec2::new(-2.0, 1.0),
            ],
        );
        assert!((polygon.area() - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_set_scale_rejects_zero() {
        let mut polygon = square(1.0, Vec2::ZERO);
        let result = polygon.set_scale(Vec2::new(0.0, 1.0));
        assert_eq!(result, Err(GeometryError::SingularTransform(Vec2::new(0.0, 1.0))));
        assert_eq!(polygon.scale(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_polygon_translate_and_move_to() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.translate(Vec2::new(1.0, 2.0));
        assert!((polygon.center().x - 1.0).abs() < EPSILON);
        assert!((polygon.center().y - 2.0).abs() < EPSILON);

        polygon.move_to(Vec2::new(-4.0, 4.0));
        assert!((polygon.center().x - -4.0).abs() < EPSILON);
        assert!((polygon.center().y - 4.0).abs() < EPSILON);
        assert!((polygon.area() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_move_point_recomputes() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.move_point(2, Vec2::new(3.0, 1.0)).expect("still convex");
        assert_eq!(polygon.points()[2], Vec2::new(3.0, 1.0));
        // Edge 1 now runs from (1, -1) to (3, 1).
        let n = polygon.normals()[1];
        let expected = Vec2::new(1.0, -1.0).normalize();
        assert!((n.x - expected.x).abs() < EPSILON);
        assert!((n.y - expected.y).abs() < EPSILON);
        assert!(polygon.center().x > 0.0);
        // The scale is refitted to the new extents.
        assert!((polygon.scale().x - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_move_point_rejects_concave_result() {
        let mut polygon = square(1.0, Vec2::ZERO);
        let before = polygon.clone();
        let result = polygon.move_point(2, Vec2::new(0.0, 0.0));
        assert_eq!(result, Err(GeometryError::NotConvex));
        assert_eq!(polygon, before);
    }

    #[test]
    fn test_polygon_move_point_out_of_bounds() {
        let mut polygon = square(1.0, Vec2::ZERO);
        assert_eq!(
            polygon.move_point(4, Vec2::ZERO),
            Err(GeometryError::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_polygon_add_point_splices() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.add_point(2, Vec2::new(2.0, 0.0)).expect("still convex");
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.points()[2], Vec2::new(2.0, 0.0));
        assert_eq!(polygon.points()[3], Vec2::new(1.0, 1.0));
        assert_eq!(polygon.normals().len(), 5);

        polygon.add_point(5, Vec2::new(-1.5, 0.0)).expect("append keeps convexity");
        assert_eq!(polygon.points()[5], Vec2::new(-1.5, 0.0));
    }

    #[test]
    fn test_polygon_remove_point() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.remove_point(3).expect("triangle remains");
        assert_eq!(polygon.len(), 3);
        assert!((polygon.area() - 2.0).abs() < EPSILON);

        assert_eq!(
            polygon.remove_point(0),
            Err(GeometryError::TooFewVertices { required: 3, actual: 2 })
        );
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn test_polygon_vertex_edit_keeps_placement() {
        let mut polygon = square(1.0, Vec2::ZERO);
        polygon.set_position(Vec2::new(3.0, 0.0));
        polygon.set_rotation(PI / 4.0);
        let first = polygon.points()[0];
        polygon.move_point(0, first).expect("unchanged vertex");
        assert_eq!(polygon.position(), Vec2::new(3.0, 0.0));
        assert!((polygon.rotation() - PI / 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_to_aabb() {
        let aabb = square(2.0, Vec2::new(1.0, 0.0)).to_aabb();
        assert_eq!(aabb.min(), Vec2::new(-1.0, -2.0));
        assert_eq!(aabb.max(), Vec2::new(3.0, 2.0));
    }
}
