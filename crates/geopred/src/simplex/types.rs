//! Simplex, barycentric and containment value types.
//!
//! - `Simplex<D>`: D+1 vertices in R^D (triangle for D=2, tetrahedron for D=3).
//! - `Barycentric<D>`: the D+1 weights, stored as `lambda_0` plus the D edge weights.
//! - `Containment<D>`: inside flag plus coordinates.

use std::ops::Index;

use nalgebra::SMatrix;

use crate::error::GeomError;
use crate::vec::{point_from_slice, PointN};

/// Ordered simplex with `D + 1` vertices in R^D.
///
/// Invariants:
/// - Exactly `D + 1` vertices, enforced by the layout (`origin` + `D` others).
/// - Vertices may be degenerate; the solver reports that, construction does not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simplex<const D: usize> {
    origin: PointN<D>,
    others: [PointN<D>; D],
}

/// 2D triangle.
pub type Triangle2 = Simplex<2>;
/// 3D tetrahedron.
pub type Tetrahedron = Simplex<3>;

impl<const D: usize> Simplex<D> {
    #[inline]
    pub fn new(origin: PointN<D>, others: [PointN<D>; D]) -> Self {
        Self { origin, others }
    }

    /// Build from a vertex slice; the count must be `D + 1`.
    pub fn from_vertices(vertices: &[PointN<D>]) -> Result<Self, GeomError> {
        let (origin, rest) = match vertices.split_first() {
            Some(split) if vertices.len() == D + 1 => split,
            _ => {
                return Err(GeomError::VertexCount {
                    expected: D + 1,
                    found: vertices.len(),
                })
            }
        };
        let others = std::array::from_fn(|i| rest[i]);
        Ok(Self::new(*origin, others))
    }

    /// Build from runtime coordinate rows, checking vertex count and point dimension.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GeomError> {
        if rows.len() != D + 1 {
            return Err(GeomError::VertexCount {
                expected: D + 1,
                found: rows.len(),
            });
        }
        let vertices = rows
            .iter()
            .map(|r| point_from_slice::<D>(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_vertices(&vertices)
    }

    /// Number of vertices (`D + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        D + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Vertex `i`; panics if `i > D`.
    #[inline]
    pub fn vertex(&self, i: usize) -> PointN<D> {
        if i == 0 {
            self.origin
        } else {
            self.others[i - 1]
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = PointN<D>> + '_ {
        std::iter::once(self.origin).chain(self.others.iter().copied())
    }

    /// Edge matrix with columns `v_i - v_0`, i = 1..=D.
    pub fn edge_matrix(&self) -> SMatrix<f64, D, D> {
        SMatrix::<f64, D, D>::from_fn(|r, c| self.others[c][r] - self.origin[r])
    }

    /// Product of edge lengths `|v_i - v_0|`; Hadamard bound on `|det|`.
    pub(crate) fn edge_scale(&self) -> f64 {
        self.others
            .iter()
            .map(|v| (v - self.origin).norm())
            .product()
    }
}

impl Simplex<2> {
    #[inline]
    pub fn triangle(a: PointN<2>, b: PointN<2>, c: PointN<2>) -> Self {
        Self::new(a, [b, c])
    }
}

impl Simplex<3> {
    #[inline]
    pub fn tetrahedron(a: PointN<3>, b: PointN<3>, c: PointN<3>, d: PointN<3>) -> Self {
        Self::new(a, [b, c, d])
    }
}

/// Barycentric coordinates `(lambda_0, ..., lambda_D)` with respect to a simplex.
///
/// Invariant: weights sum to 1 (up to round-off), and
/// `point = sum_i lambda_i * vertex_i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric<const D: usize> {
    pub(crate) lambda0: f64,
    pub(crate) lambdas: PointN<D>,
}

impl<const D: usize> Barycentric<D> {
    /// From the D edge weights; `lambda_0 = 1 - sum`.
    #[inline]
    pub fn from_edge_weights(lambdas: PointN<D>) -> Self {
        Self {
            lambda0: 1.0 - lambdas.sum(),
            lambdas,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        D + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.lambda0).chain(self.lambdas.iter().copied())
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    pub fn min(&self) -> f64 {
        self.iter().fold(f64::INFINITY, f64::min)
    }

    /// All weights within `[-eps, 1 + eps]`.
    pub fn is_inside(&self, eps: f64) -> bool {
        self.iter().all(|l| l >= -eps && l <= 1.0 + eps)
    }

    /// `sum_i lambda_i * vertex_i`.
    pub fn reconstruct(&self, simplex: &Simplex<D>) -> PointN<D> {
        simplex
            .vertices()
            .zip(self.iter())
            .fold(PointN::<D>::zeros(), |acc, (v, l)| acc + v * l)
    }
}

impl<const D: usize> Index<usize> for Barycentric<D> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        if i == 0 {
            &self.lambda0
        } else {
            &self.lambdas[i - 1]
        }
    }
}

/// Result of a point-in-simplex query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Containment<const D: usize> {
    pub inside: bool,
    pub coordinates: Barycentric<D>,
}
