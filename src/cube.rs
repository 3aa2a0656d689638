//! The enclosing parallelepiped.
//!
//! Four input vertices fix the solid: `a`, `b`, `c` are consecutive corners of
//! one face and `d` is joined to `c` by an edge leaving that face. The other
//! vertices needed for the six face planes follow by parallelogram completion.

use crate::mirror::complete_parallelogram;
use crate::plane::Plane;
use crate::vector::Vector;

/// Parallelepiped enclosing the ray; reaching any face ends the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Vector; 7],
    faces: [Plane; 6],
}

impl Cube {
    /// Build the cube from vertices `a`, `b`, `c`, `d`.
    pub fn new(a: Vector, b: Vector, c: Vector, d: Vector) -> Self {
        let e = complete_parallelogram(a, b, c);
        let f = complete_parallelogram(d, c, b);
        let g = complete_parallelogram(d, c, e);

        Self {
            vertices: [a, b, c, d, e, f, g],
            faces: [
                Plane::from_points(a, b, c),
                Plane::from_points(b, c, d),
                Plane::from_points(c, d, e),
                Plane::from_points(a, e, g),
                Plane::from_points(g, d, f),
                Plane::from_points(a, b, f),
            ],
        }
    }

    /// Vertices `a` through `g`; `e`, `f` and `g` are derived.
    pub fn vertices(&self) -> &[Vector; 7] {
        &self.vertices
    }

    /// Face planes in construction order.
    pub fn faces(&self) -> &[Plane; 6] {
        &self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::VectorExt;

    fn box_10() -> Cube {
        Cube::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(10.0, 0.0, 0.0),
            Vector::new(10.0, 10.0, 0.0),
            Vector::new(10.0, 10.0, 10.0),
        )
    }

    #[test]
    fn derives_remaining_vertices() {
        let [.., e, f, g] = *box_10().vertices();
        assert_eq!(e, Vector::new(0.0, 10.0, 0.0));
        assert_eq!(f, Vector::new(10.0, 0.0, 10.0));
        assert_eq!(g, Vector::new(0.0, 10.0, 10.0));
    }

    #[test]
    fn faces_bound_the_box_in_order() {
        let centre = Vector::splat(5.0);
        // Axis and coordinate each face is perpendicular to.
        let expected = [(2, 0.0), (0, 10.0), (1, 10.0), (0, 0.0), (2, 10.0), (1, 0.0)];
        for (face, (axis, at)) in box_10().faces().iter().zip(expected) {
            let normal = face.normal.normalize();
            assert!(normal.abs().abs_diff_eq(Vector::AXES[axis], 1e-12), "{face:?}");
            assert!((centre.distance_to_plane(face).abs() - 5.0).abs() < 1e-12);
            let mut on_face = centre;
            on_face[axis] = at;
            assert_eq!(face.evaluate(on_face), 0.0);
        }
    }

    #[test]
    fn skewed_cube_faces_contain_their_vertices() {
        let cube = Cube::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(4.0, 1.0, 0.0),
            Vector::new(5.0, 4.0, 0.5),
            Vector::new(6.0, 5.0, 3.0),
        );
        let [a, b, c, d, e, f, g] = *cube.vertices();
        let face_vertices: [&[Vector]; 6] = [
            &[a, b, c, e],
            &[b, c, d, f],
            &[c, d, e, g],
            &[a, e, g],
            &[g, d, f],
            &[a, b, f],
        ];
        for (face, points) in cube.faces().iter().zip(face_vertices) {
            for p in points {
                assert!(face.evaluate(*p).abs() < 1e-9, "{p} off {face:?}");
            }
        }
    }
}
