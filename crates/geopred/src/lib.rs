//! Computational-geometry predicates.
//!
//! - Point-in-simplex tests with barycentric coordinates: 2D triangle,
//!   3D tetrahedron, and a triangle embedded in 3-space (plane distance,
//!   in-plane flag, in-plane containment).
//! - 2D segment intersection classification.
//!
//! All predicates are pure functions over small value types. Tolerances are
//! explicit arguments (or a `SimplexCfg`); failures are `GeomError` values.

pub mod api;
pub mod error;
pub mod segment;
pub mod simplex;
pub mod vec;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::segment::{intersect, intersect_with_tol, Intersection, Segment};
    pub use crate::simplex::{
        point_in_tetrahedron, point_in_triangle, point_in_triangle3, Barycentric, Containment,
        PlaneQuery, SimplexCfg, Tetrahedron, Triangle2, Triangle3,
    };
    pub use crate::vec::{Point2, Point3};
    pub use nalgebra::vector;
}
