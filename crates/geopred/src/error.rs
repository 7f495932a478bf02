//! Error taxonomy shared by the simplex and segment predicates.
//!
//! Every failure is reported synchronously as a `GeomError`; nothing is
//! swallowed or turned into NaN/Inf coordinates.

use std::fmt;

/// Errors surfaced by constructors and predicates.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A point (or vertex) has the wrong number of coordinates.
    DimensionMismatch { expected: usize, found: usize },
    /// A simplex was built from the wrong number of vertices.
    VertexCount { expected: usize, found: usize },
    /// Edge-vector determinant is (near) zero relative to the simplex scale.
    DegenerateSimplex { relative_volume: f64 },
    /// The three vertices of a 3D triangle are (nearly) collinear.
    DegenerateTriangle { relative_area: f64 },
    /// Both endpoints of a segment coincide.
    DegenerateSegment,
    /// A tolerance was negative, NaN or infinite.
    InvalidTolerance { name: &'static str, value: f64 },
}

impl GeomError {
    /// Reject tolerances that are negative or non-finite.
    pub(crate) fn check_tolerance(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidTolerance { name, value })
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {expected} coordinates, found {found}"
            ),
            GeomError::VertexCount { expected, found } => write!(
                f,
                "simplex needs {expected} vertices, found {found}"
            ),
            GeomError::DegenerateSimplex { relative_volume } => write!(
                f,
                "degenerate simplex (relative volume {relative_volume:e}); barycentric coordinates are undefined"
            ),
            GeomError::DegenerateTriangle { relative_area } => write!(
                f,
                "degenerate 3D triangle (relative area {relative_area:e}); plane is undefined"
            ),
            GeomError::DegenerateSegment => write!(f, "segment endpoints coincide"),
            GeomError::InvalidTolerance { name, value } => write!(
                f,
                "invalid tolerance {name}={value}: must be finite and >= 0"
            ),
        }
    }
}

impl std::error::Error for GeomError {}
