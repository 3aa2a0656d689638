//! Ray representation for the bounce simulation.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line
//! used for plane intersection tests.

use crate::plane::Plane;
use crate::vector::{Vector, VectorExt};

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Vector,

    /// Direction vector of the ray.
    ///
    /// Not normalized: reflections preserve its length, and distances along
    /// the ray are always measured between points rather than in `t`.
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f64) -> Vector {
        self.origin + t * self.direction
    }

    /// Point where the ray's supporting line crosses `plane`.
    ///
    /// Returns `None` if the ray is parallel to the plane (including lying in
    /// it), if the inputs are undefined, or if the crossing is too far away to
    /// represent. The point may lie behind the origin.
    pub fn intersect(&self, plane: &Plane) -> Option<Vector> {
        let approach = plane.normal.dot(self.direction);
        if approach == 0.0 {
            return None;
        }
        (self.origin - self.direction * (plane.evaluate(self.origin) / approach))
            .defined()
            .filter(|point| point.is_finite())
    }

    /// Parameter `t` such that `self.at(t)` is the projection of `point` onto the ray.
    ///
    /// Positive means ahead of the origin.
    pub fn parameter_of(&self, point: Vector) -> f64 {
        self.direction.dot(point - self.origin) / self.direction.length_squared()
    }
}
