//! Point-in-simplex predicates (triangle, tetrahedron, triangle in 3-space).
//!
//! Purpose
//! - Locate a point relative to a simplex via barycentric coordinates, with an
//!   explicit containment slack and an explicit degeneracy outcome.
//!
//! Conventions
//! - One generic solver over the compile-time dimension `D` backs both
//!   `point_in_triangle` (D=2) and `point_in_tetrahedron` (D=3).
//! - A 3D triangle is not a full simplex in its ambient space; it has its own
//!   query (`point_in_triangle3`) reporting plane distance and in-plane status.
//! - Tolerances come from `SimplexCfg` or explicit arguments, never from
//!   global state. Negative or non-finite values are rejected.
//!
//! Code cross-refs: `crate::vec` (points), `crate::error::GeomError`.

mod barycentric;
pub mod cfg;
mod plane;
pub mod rand;
mod types;

pub use barycentric::{
    barycentric, barycentric_with, point_in_simplex, point_in_tetrahedron,
    point_in_tetrahedron_with, point_in_triangle, point_in_triangle_with,
};
pub use cfg::{SimplexCfg, DEFAULT_PLANE_EPS};
pub use plane::{point_in_triangle3, PlaneQuery, Triangle3};
pub use types::{Barycentric, Containment, Simplex, Tetrahedron, Triangle2};

#[cfg(test)]
mod tests;
