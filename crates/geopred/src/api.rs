//! Curated call surface (UNSTABLE).
//!
//! One-stop re-exports for binaries and bindings, plus the `make_*`
//! constructors that take plain coordinate arrays.

pub use crate::error::GeomError;
pub use crate::segment::{
    intersect, intersect_with_tol, Intersection, Segment, DEFAULT_SEGMENT_TOL,
};
pub use crate::simplex::rand::{random_simplex, sample_point_in, ReplayToken};
pub use crate::simplex::{
    barycentric, barycentric_with, point_in_simplex, point_in_tetrahedron,
    point_in_tetrahedron_with, point_in_triangle, point_in_triangle3, point_in_triangle_with,
    Barycentric, Containment, PlaneQuery, Simplex, SimplexCfg, Tetrahedron, Triangle2, Triangle3,
    DEFAULT_PLANE_EPS,
};
pub use crate::vec::{cross2, point_from_slice, Point2, Point3};

use nalgebra::vector;

/// Triangle in the plane from three `[x, y]` vertices.
pub fn make_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle2 {
    Triangle2::triangle(vector![a[0], a[1]], vector![b[0], b[1]], vector![c[0], c[1]])
}

/// Tetrahedron from four `[x, y, z]` vertices.
pub fn make_tetrahedron(a: [f64; 3], b: [f64; 3], c: [f64; 3], d: [f64; 3]) -> Tetrahedron {
    Tetrahedron::tetrahedron(a.into(), b.into(), c.into(), d.into())
}

/// Triangle in 3-space; fails on (near) collinear vertices.
pub fn make_triangle3(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Result<Triangle3, GeomError> {
    Triangle3::new(a.into(), b.into(), c.into())
}

/// Segment from two `[x, y]` endpoints.
pub fn make_segment(p1: [f64; 2], p2: [f64; 2]) -> Result<Segment, GeomError> {
    Segment::new(p1.into(), p2.into())
}
