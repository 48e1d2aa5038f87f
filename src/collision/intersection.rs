use std::ops::Neg;

use crate::math::vec2::Vec2;

/// Outcome of testing two shapes against each other.
///
/// Pairs involving a line, and point-polygon / point-point, can only report
/// whether they touch. All other pairs report a minimum translation vector: the
/// shortest vector that, added to the first shape's position, ends the overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    Touch(bool),
    Mtv(Option<Vec2>),
}

impl Intersection {
    /// True if the shapes overlap.
    pub fn is_hit(&self) -> bool {
        match *self {
            Intersection::Touch(hit) => hit,
            Intersection::Mtv(mtv) => mtv.is_some(),
        }
    }

    /// The translation vector, for pairs that produce one and overlap.
    pub fn mtv(&self) -> Option<Vec2> {
        match *self {
            Intersection::Touch(_) => None,
            Intersection::Mtv(mtv) => mtv,
        }
    }
}

/// Swaps the roles of the two shapes.
impl Neg for Intersection {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Intersection::Touch(hit) => Intersection::Touch(hit),
            Intersection::Mtv(mtv) => Intersection::Mtv(mtv.map(Neg::neg)),
        }
    }
}

impl From<bool> for Intersection {
    fn from(hit: bool) -> Self {
        Intersection::Touch(hit)
    }
}

impl From<Option<Vec2>> for Intersection {
    fn from(mtv: Option<Vec2>) -> Self {
        Intersection::Mtv(mtv)
    }
}
