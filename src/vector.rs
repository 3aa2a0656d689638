//! Vector algebra for points, directions and plane equations.
//!
//! Points and directions are `glam::DVec3`; a plane equation
//! `nx·x + ny·y + nz·z + d = 0` is a `glam::DVec4`. glam already provides the
//! componentwise arithmetic, scaling and dot product; [`VectorExt`] adds the
//! metric operations the bounce simulation needs.

use std::f64::consts::FRAC_PI_2;

use glam::{DVec3, DVec4};

use crate::interval::{COSINE, Interval};
use crate::plane::Plane;

/// A point or direction in 3D space.
pub type Vector = DVec3;

/// Plane equation coefficients `[nx, ny, nz, d]`.
pub type PlaneEquation = DVec4;

/// The "no geometric result" sentinel: every component is NaN.
///
/// Core code passes `Option<Vector>` instead; this only exists at the edges
/// where raw floating point results come in (see [`VectorExt::defined`]).
pub const UNDEFINED: Vector = DVec3::NAN;

/// Geometric operations on [`Vector`] beyond what glam provides.
pub trait VectorExt: Copy {
    /// True when no component is NaN.
    fn is_defined(self) -> bool;

    /// `Some(self)` when defined, `None` for anything carrying a NaN.
    fn defined(self) -> Option<Vector>;

    /// Cross product of `a` and `b` with each axis scaled by the matching
    /// component of `self`.
    ///
    /// With `self == Vector::ONE` this is the ordinary cross product.
    fn masked_cross(self, a: Vector, b: Vector) -> Vector;

    /// Sum of the elementwise quotients `self[i] / divisor[i]`.
    fn quotient_sum(self, divisor: Vector) -> f64;

    /// Angle between two vectors in radians.
    ///
    /// Orthogonal vectors, including the zero vector, yield π/2.
    fn angle_with(self, other: Vector) -> f64;

    /// Vector projection of `self` onto `onto`.
    fn projection(self, onto: Vector) -> Vector;

    /// Signed distance from `self` to `plane`.
    fn distance_to_plane(self, plane: &Plane) -> f64;

    /// Distance from `self` to the infinite line through `point` along `direction`.
    fn distance_to_line(self, point: Vector, direction: Vector) -> f64;

    /// Whether `self` lies within the parallelogram whose consecutive corners
    /// are `p0`, `p1`, `p2`.
    ///
    /// `self` is expected to lie in the parallelogram's plane. Degenerate
    /// corners produce NaN distances and therefore `false`.
    fn is_in_rectangle(self, p0: Vector, p1: Vector, p2: Vector) -> bool;

    /// Mirror image of this direction across `plane`.
    fn reflect_across(self, plane: &Plane) -> Vector;
}

impl VectorExt for Vector {
    fn is_defined(self) -> bool {
        !self.is_nan()
    }

    fn defined(self) -> Option<Vector> {
        self.is_defined().then_some(self)
    }

    fn masked_cross(self, a: Vector, b: Vector) -> Vector {
        Vector::new(
            self.x * (a.y * b.z - a.z * b.y),
            -self.y * (a.x * b.z - a.z * b.x),
            self.z * (a.x * b.y - a.y * b.x),
        )
    }

    fn quotient_sum(self, divisor: Vector) -> f64 {
        (self / divisor).element_sum()
    }

    fn angle_with(self, other: Vector) -> f64 {
        let dot = self.dot(other);
        if dot == 0.0 {
            return FRAC_PI_2;
        }
        COSINE.clamp(dot / (self.length() * other.length())).acos()
    }

    fn projection(self, onto: Vector) -> Vector {
        onto * self.dot(onto) / onto.dot(onto)
    }

    fn distance_to_plane(self, plane: &Plane) -> f64 {
        plane.evaluate(self) / plane.normal.length()
    }

    fn distance_to_line(self, point: Vector, direction: Vector) -> f64 {
        (point - self).cross(direction).length() / direction.length()
    }

    fn is_in_rectangle(self, p0: Vector, p1: Vector, p2: Vector) -> bool {
        let side1 = p1 - p0;
        let side2 = p1 - p2;

        // Distance to both lines parallel to one side must not exceed the other side.
        let across1 = self.distance_to_line(p0, side1).max(self.distance_to_line(p2, side1));
        let across2 = self.distance_to_line(p0, side2).max(self.distance_to_line(p2, side2));

        Interval::new(0.0, side2.length()).contains(across1)
            && Interval::new(0.0, side1.length()).contains(across2)
    }

    fn reflect_across(self, plane: &Plane) -> Vector {
        self - self.projection(plane.normal) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn addition_commutes_and_subtraction_anticommutes() {
        let a = Vector::new(1.5, -2.0, 3.25);
        let b = Vector::new(-4.0, 0.5, 7.0);
        assert_eq!(a + b, b + a);
        assert_eq!(a - b, -(b - a));
    }

    #[test]
    fn unit_mask_gives_ordinary_cross_product() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(-2.0, 0.5, 4.0);
        assert_eq!(Vector::ONE.masked_cross(a, b), a.cross(b));
        assert_eq!(Vector::ONE.masked_cross(a, b), -Vector::ONE.masked_cross(b, a));
        assert_eq!(Vector::ONE.masked_cross(Vector::X, Vector::Y), Vector::Z);
    }

    #[test]
    fn mask_scales_each_axis() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(-2.0, 0.5, 4.0);
        let plain = a.cross(b);
        let masked = Vector::new(-1.0, 2.0, 0.0).masked_cross(a, b);
        assert_eq!(masked, Vector::new(-plain.x, 2.0 * plain.y, 0.0));
    }

    #[test]
    fn undefined_sentinel() {
        assert!(!UNDEFINED.is_defined());
        assert_eq!(UNDEFINED.defined(), None);
        assert!(!Vector::new(1.0, f64::NAN, 0.0).is_defined());
        assert_eq!(Vector::X.defined(), Some(Vector::X));
    }

    #[test]
    fn arithmetic_with_sentinel_stays_undefined() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert!(!(v + UNDEFINED).is_defined());
        assert!(!(UNDEFINED * 2.0).is_defined());
        assert!(v.dot(UNDEFINED).is_nan());
        assert!(UNDEFINED.length().is_nan());
    }

    #[test]
    fn quotient_sum_adds_elementwise_quotients() {
        let v = Vector::new(2.0, 9.0, -4.0);
        assert_eq!(v.quotient_sum(Vector::new(1.0, 3.0, 2.0)), 2.0 + 3.0 - 2.0);
    }

    #[test]
    fn angle_with() {
        assert_eq!(Vector::X.angle_with(Vector::Y), FRAC_PI_2);
        assert_eq!(Vector::ZERO.angle_with(Vector::Y), FRAC_PI_2);
        assert!((Vector::X.angle_with(-Vector::X) - PI).abs() < EPS);
        assert!((Vector::X.angle_with(Vector::new(1.0, 1.0, 0.0)) - PI / 4.0).abs() < EPS);
        let parallel = Vector::splat(0.1).angle_with(Vector::splat(0.3));
        assert!(!parallel.is_nan());
        assert!(parallel < 1e-7);
    }

    #[test]
    fn projection_onto_axis() {
        let v = Vector::new(3.0, 4.0, 5.0);
        assert_eq!(v.projection(Vector::new(0.0, 2.0, 0.0)), Vector::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn distance_to_plane_is_signed() {
        let plane = Plane::from_points(Vector::ZERO, Vector::X, Vector::Y);
        assert!((Vector::new(5.0, -1.0, 2.5).distance_to_plane(&plane) - 2.5).abs() < EPS);
        assert!((Vector::new(0.0, 0.0, -3.0).distance_to_plane(&plane) + 3.0).abs() < EPS);
    }

    #[test]
    fn distance_to_line() {
        let p = Vector::new(0.0, 3.0, 4.0);
        assert!((p.distance_to_line(Vector::ZERO, Vector::new(2.0, 0.0, 0.0)) - 5.0).abs() < EPS);
        assert_eq!(p.distance_to_line(Vector::new(-1.0, 3.0, 4.0), Vector::X), 0.0);
    }

    #[test]
    fn rectangle_containment() {
        let p0 = Vector::new(0.0, 0.0, 0.0);
        let p1 = Vector::new(0.0, 0.0, 4.0);
        let p2 = Vector::new(0.0, 2.0, 4.0);

        assert!(Vector::new(0.0, 1.0, 2.0).is_in_rectangle(p0, p1, p2));
        assert!(Vector::new(0.0, 2.0, 4.0).is_in_rectangle(p0, p1, p2));
        assert!(!Vector::new(0.0, 2.5, 2.0).is_in_rectangle(p0, p1, p2));
        assert!(!Vector::new(0.0, 1.0, -0.5).is_in_rectangle(p0, p1, p2));
    }

    #[test]
    fn degenerate_rectangle_contains_nothing() {
        let p = Vector::new(1.0, 1.0, 1.0);
        assert!(!p.is_in_rectangle(p, p, p));
        assert!(!p.is_in_rectangle(UNDEFINED, UNDEFINED, UNDEFINED));
    }

    #[test]
    fn reflection_is_an_involution() {
        let plane = Plane::from_points(
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 2.0, 0.5),
            Vector::new(0.3, 0.0, 3.0),
        );
        let d = Vector::new(0.7, -1.2, 2.9);
        let twice = d.reflect_across(&plane).reflect_across(&plane);
        assert!(twice.abs_diff_eq(d, EPS));
    }

    #[test]
    fn reflection_flips_normal_component_only() {
        let floor = Plane::from_points(Vector::ZERO, Vector::X, Vector::Y);
        let d = Vector::new(1.0, 2.0, -3.0);
        assert_eq!(d.reflect_across(&floor), Vector::new(1.0, 2.0, 3.0));
    }
}
