//! Mirror panels: planar parallelograms that reflect the ray.

use crate::plane::Plane;
use crate::surface::Surface;
use crate::vector::{Vector, VectorExt};

/// Fourth vertex of the parallelogram with consecutive corners `p1`, `p2`, `p3`.
///
/// `p2` is the corner shared by the two known edges; the result is opposite it.
pub fn complete_parallelogram(p1: Vector, p2: Vector, p3: Vector) -> Vector {
    p2 + (p1 - p2) + (p3 - p2)
}

/// Reflective parallelogram defined by three consecutive corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Mirror {
    /// Corners in order around the panel; the last one is derived.
    corners: [Vector; 4],
    plane: Plane,
}

impl Mirror {
    /// Create a mirror from three consecutive corners, `p2` being the middle one.
    pub fn new(p1: Vector, p2: Vector, p3: Vector) -> Self {
        Self {
            corners: [p1, p2, p3, complete_parallelogram(p1, p2, p3)],
            plane: Plane::from_points(p1, p2, p3),
        }
    }

    /// All four corners, the derived one last.
    pub fn corners(&self) -> &[Vector; 4] {
        &self.corners
    }
}

impl Surface for Mirror {
    fn plane(&self) -> &Plane {
        &self.plane
    }

    fn contains(&self, point: Vector) -> bool {
        let [p0, p1, p2, _] = self.corners;
        point.is_in_rectangle(p0, p1, p2)
    }
}
