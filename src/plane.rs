//! Infinite planes given by `normal · p + offset = 0`.

use crate::vector::{PlaneEquation, Vector, VectorExt};

/// Plane with a (not necessarily unit) normal and an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector; its length is whatever the construction produced.
    pub normal: Vector,
    /// Constant term of the plane equation.
    pub offset: f64,
}

impl Plane {
    /// Plane through three points.
    ///
    /// The normal is `(b - a) × (c - a)`, so collinear points give a zero
    /// normal and a plane no ray can intersect.
    pub fn from_points(a: Vector, b: Vector, c: Vector) -> Self {
        let normal = Vector::ONE.masked_cross(b - a, c - a);
        Self {
            normal,
            offset: -a.dot(normal),
        }
    }

    /// Coefficients `[nx, ny, nz, d]`.
    pub fn equation(&self) -> PlaneEquation {
        self.normal.extend(self.offset)
    }

    /// Left-hand side of the plane equation at `point`; zero on the plane.
    pub fn evaluate(&self, point: Vector) -> f64 {
        self.normal.dot(point) + self.offset
    }
}

impl From<PlaneEquation> for Plane {
    fn from(equation: PlaneEquation) -> Self {
        Self {
            normal: equation.truncate(),
            offset: equation.w,
        }
    }
}
