use std::ops::Mul;

use super::vec2::Vec2;

/// A 3x3 matrix for 2D affine transforms, stored column-major.
///
/// Element `[c * 3 + r]` is row `r` of column `c`, so the translation lives in
/// elements 6 and 7. The layout can be handed to a renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [f64; 9]);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    pub fn from_translation(offset: Vec2) -> Self {
        Mat3([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            offset.x, offset.y, 1.0,
        ])
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Mat3([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    pub fn from_scale(scale: Vec2) -> Self {
        Mat3([
            scale.x, 0.0, 0.0, //
            0.0, scale.y, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Rotation by `angle` around `pivot`.
    pub fn from_rotation_about(angle: f64, pivot: Vec2) -> Self {
        Self::from_translation(pivot) * Self::from_rotation(angle) * Self::from_translation(-pivot)
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.0[col * 3 + row]
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0] * (m[8] * m[4] - m[5] * m[7])
            + m[1] * (-m[8] * m[3] + m[5] * m[6])
            + m[2] * (m[7] * m[3] - m[4] * m[6])
    }

    /// Returns the inverse, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.0;

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;

        Some(Mat3([
            b01 * inv,
            (-a22 * a01 + a02 * a21) * inv,
            (a12 * a01 - a02 * a11) * inv,
            b11 * inv,
            (a22 * a00 - a02 * a20) * inv,
            (-a12 * a00 + a02 * a10) * inv,
            b21 * inv,
            (-a21 * a00 + a01 * a20) * inv,
            (a11 * a00 - a01 * a10) * inv,
        ]))
    }

    /// Transforms a point (implicit w = 1).
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let m = &self.0;
        Vec2::new(
            m[0] * point.x + m[3] * point.y + m[6],
            m[1] * point.x + m[4] * point.y + m[7],
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = (0..3).map(|k| self.at(row, k) * rhs.at(k, col)).sum();
            }
        }
        Mat3(out)
    }
}
