//! Point/vector primitive: fixed-dimension `f64` tuples backed by nalgebra.
//!
//! Points and vectors share one type (`SVector<f64, D>`), matching how the
//! rest of the crate treats them; subtraction, `dot` and `cross` come from
//! nalgebra, `cross2` covers the 2D perp-dot product.

use nalgebra::{SVector, Vector2};

use crate::error::GeomError;

/// D-dimensional point (or vector) with `f64` coordinates.
pub type PointN<const D: usize> = SVector<f64, D>;
/// Point in the plane.
pub type Point2 = PointN<2>;
/// Point in 3-space.
pub type Point3 = PointN<3>;

/// Signed area of the parallelogram spanned by `a` and `b` (2D cross product).
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Build a `D`-point from runtime coordinates.
///
/// Boundary check for callers holding untyped data (CLI, bindings); rejects
/// the wrong coordinate count before any arithmetic happens.
pub fn point_from_slice<const D: usize>(coords: &[f64]) -> Result<PointN<D>, GeomError> {
    if coords.len() != D {
        return Err(GeomError::DimensionMismatch {
            expected: D,
            found: coords.len(),
        });
    }
    Ok(PointN::<D>::from_column_slice(coords))
}

/// Coordinate-wise equality within `tol` (max-abs metric).
///
/// Only used for classification; plain arithmetic never compares with a tolerance.
#[inline]
pub fn approx_eq<const D: usize>(a: &PointN<D>, b: &PointN<D>, tol: f64) -> bool {
    (a - b).amax() <= tol
}
