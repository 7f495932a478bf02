//! Triangles embedded in 3-space and the coplanar point query.
//!
//! A `Triangle3` spans a plane, not a volume, so the ambient 3D solver does
//! not apply. The query measures the signed distance along the unit normal,
//! projects onto the plane and solves in the triangle's own edge basis
//! (2×2 Gram system).

use nalgebra::{Matrix2, Vector2};

use super::cfg::DEGENERATE_EPS;
use super::types::Barycentric;
use crate::error::GeomError;
use crate::vec::{point_from_slice, Point3};

/// Triangle in R^3 with a cached unit normal.
///
/// Invariants:
/// - Vertices are not collinear: `|e1 × e2| / (|e1| |e2|) > DEGENERATE_EPS`.
/// - `normal` is `e1 × e2` normalized (right-hand rule on vertex order).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3 {
    vertices: [Point3; 3],
    normal: Point3,
}

impl Triangle3 {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self, GeomError> {
        let e1 = b - a;
        let e2 = c - a;
        let n = e1.cross(&e2);
        let area2 = n.norm();
        let scale = e1.norm() * e2.norm();
        let relative_area = if scale > 0.0 && scale.is_finite() {
            area2 / scale
        } else {
            0.0
        };
        if relative_area <= DEGENERATE_EPS || !relative_area.is_finite() {
            return Err(GeomError::DegenerateTriangle { relative_area });
        }
        Ok(Self {
            vertices: [a, b, c],
            normal: n / area2,
        })
    }

    /// Build from three runtime coordinate rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GeomError> {
        match rows {
            [a, b, c] => Self::new(
                point_from_slice(a.as_ref())?,
                point_from_slice(b.as_ref())?,
                point_from_slice(c.as_ref())?,
            ),
            _ => Err(GeomError::VertexCount {
                expected: 3,
                found: rows.len(),
            }),
        }
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Point3 {
        self.vertices[i]
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> Point3 {
        self.normal
    }

    pub fn area(&self) -> f64 {
        0.5 * (self.vertices[1] - self.vertices[0])
            .cross(&(self.vertices[2] - self.vertices[0]))
            .norm()
    }

    /// Signed distance of `p` to the plane (positive on the normal side).
    #[inline]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&(p - self.vertices[0]))
    }

    /// Orthogonal projection of `p` onto the plane.
    #[inline]
    pub fn project(&self, p: &Point3) -> Point3 {
        p - self.normal * self.signed_distance(p)
    }

    /// Barycentric coordinates of the projection of `p`.
    pub fn barycentric(&self, p: &Point3) -> Result<Barycentric<2>, GeomError> {
        let [a, b, c] = self.vertices;
        let e1 = b - a;
        let e2 = c - a;
        let q = self.project(p) - a;
        let g12 = e1.dot(&e2);
        let gram = Matrix2::new(e1.dot(&e1), g12, g12, e2.dot(&e2));
        let gram_inv = gram.try_inverse().ok_or(GeomError::DegenerateTriangle {
            relative_area: 0.0,
        })?;
        let lambdas = gram_inv * Vector2::new(e1.dot(&q), e2.dot(&q));
        Ok(Barycentric::from_edge_weights(lambdas))
    }

    /// Barycentric weights mapped back into 3-space.
    pub fn reconstruct(&self, coords: &Barycentric<2>) -> Point3 {
        self.vertices
            .iter()
            .zip(coords.iter())
            .fold(Point3::zeros(), |acc, (v, l)| acc + v * l)
    }
}

/// Result of `point_in_triangle3`.
///
/// `inside` only exists for in-plane points, so "inside but off-plane" cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaneQuery {
    InPlane {
        inside: bool,
        distance: f64,
        coordinates: Barycentric<2>,
    },
    /// Coordinates are those of the projected point, kept for diagnostics.
    OffPlane {
        distance: f64,
        coordinates: Barycentric<2>,
    },
}

impl PlaneQuery {
    #[inline]
    pub fn inside(&self) -> bool {
        matches!(self, PlaneQuery::InPlane { inside: true, .. })
    }

    #[inline]
    pub fn in_plane(&self) -> bool {
        matches!(self, PlaneQuery::InPlane { .. })
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        match *self {
            PlaneQuery::InPlane { distance, .. } | PlaneQuery::OffPlane { distance, .. } => {
                distance
            }
        }
    }

    #[inline]
    pub fn coordinates(&self) -> Barycentric<2> {
        match *self {
            PlaneQuery::InPlane { coordinates, .. } | PlaneQuery::OffPlane { coordinates, .. } => {
                coordinates
            }
        }
    }
}

/// Locate `p` relative to a triangle in 3-space.
///
/// `eps` bounds both the plane distance and the containment slack.
pub fn point_in_triangle3(p: &Point3, t: &Triangle3, eps: f64) -> Result<PlaneQuery, GeomError> {
    GeomError::check_tolerance("eps", eps)?;
    let distance = t.signed_distance(p);
    let coordinates = t.barycentric(p)?;
    if distance.abs() <= eps {
        Ok(PlaneQuery::InPlane {
            inside: coordinates.is_inside(eps),
            distance,
            coordinates,
        })
    } else {
        Ok(PlaneQuery::OffPlane {
            distance,
            coordinates,
        })
    }
}
