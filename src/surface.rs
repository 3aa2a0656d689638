//! Ray-surface collision system.
//!
//! Defines the [`Surface`] trait for planar obstacles and [`Collision`] for
//! storing intersection data. Cube faces are bare [`Plane`]s; mirrors bound
//! their plane with a parallelogram.

use crate::interval::Interval;
use crate::plane::Plane;
use crate::ray::Ray;
use crate::vector::Vector;

/// Smallest distance from the ray origin that still counts as a hit.
///
/// A ray leaving a mirror starts on that mirror's plane; rounding can put the
/// re-intersection a hair in front of the origin. Measured in scene units so
/// the length of the direction vector does not matter.
pub const MIN_HIT_DISTANCE: f64 = 1e-9;

/// Distances accepted as hits.
const REACHABLE: Interval = Interval::new(MIN_HIT_DISTANCE, f64::INFINITY);

/// Ray-surface intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Point where the ray meets the surface
    pub point: Vector,
    /// Ray parameter of the point
    pub t: f64,
    /// Euclidean distance from the ray origin to the point
    pub distance: f64,
    /// Plane of the surface that was hit
    pub plane: Plane,
}

/// A planar obstacle a ray can collide with.
pub trait Surface {
    /// Supporting plane of the surface.
    fn plane(&self) -> &Plane;

    /// Whether a point already known to lie on [`Surface::plane`] belongs to the surface.
    fn contains(&self, _point: Vector) -> bool {
        true
    }

    /// First forward collision of `ray` with this surface, if any.
    fn collide(&self, ray: &Ray) -> Option<Collision> {
        let point = ray.intersect(self.plane())?;
        let t = ray.parameter_of(point);
        let distance = (point - ray.origin).length();
        if t <= 0.0 || !REACHABLE.surrounds(distance) || !self.contains(point) {
            return None;
        }
        Some(Collision {
            point,
            t,
            distance,
            plane: *self.plane(),
        })
    }
}

/// Unbounded plane; used for the faces of the enclosing cube.
impl Surface for Plane {
    fn plane(&self) -> &Plane {
        self
    }
}

/// Nearest forward collision of `ray` with any of `surfaces`.
///
/// When several collisions share the minimal distance the earliest surface wins.
pub fn nearest_collision<'a, S>(
    surfaces: impl IntoIterator<Item = &'a S>,
    ray: &Ray,
) -> Option<Collision>
where
    S: Surface + 'a,
{
    let mut closest: Option<Collision> = None;

    for surface in surfaces {
        if let Some(hit) = surface.collide(ray) {
            if closest.is_none_or(|best| hit.distance < best.distance) {
                closest = Some(hit);
            }
        }
    }

    closest
}
