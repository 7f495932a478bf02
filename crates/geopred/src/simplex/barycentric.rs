//! Barycentric solver shared by triangles and tetrahedra.
//!
//! Solves `E x = p - v_0` where `E` has columns `v_i - v_0` through nalgebra's
//! LU decomposition, which also yields `det(E)`. The solve is refused when
//! `|det(E)| / prod |v_i - v_0|` drops below `eps_det` (scale-free degeneracy test).

use nalgebra::{Const, DimMin};

use super::cfg::SimplexCfg;
use super::types::{Barycentric, Containment, Simplex, Tetrahedron, Triangle2};
use crate::error::GeomError;
use crate::vec::{Point2, Point3, PointN};

impl<const D: usize> Simplex<D>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    /// Signed volume `det(E) / D!`.
    pub fn signed_volume(&self) -> f64 {
        let det = self.edge_matrix().determinant();
        let factorial: f64 = (1..=D).map(|k| k as f64).product();
        det / factorial
    }

    /// `|det(E)| / prod |v_i - v_0|`, in `[0, 1]`; 0 for coincident vertices.
    pub fn relative_volume(&self) -> f64 {
        let scale = self.edge_scale();
        if scale <= 0.0 || !scale.is_finite() {
            return 0.0;
        }
        self.edge_matrix().determinant().abs() / scale
    }
}

/// Barycentric coordinates of `p` with default tolerances.
pub fn barycentric<const D: usize>(
    p: &PointN<D>,
    simplex: &Simplex<D>,
) -> Result<Barycentric<D>, GeomError>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    barycentric_with(p, simplex, SimplexCfg::default())
}

/// Barycentric coordinates of `p`; `DegenerateSimplex` if the simplex is flat.
pub fn barycentric_with<const D: usize>(
    p: &PointN<D>,
    simplex: &Simplex<D>,
    cfg: SimplexCfg,
) -> Result<Barycentric<D>, GeomError>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    cfg.validate()?;
    let scale = simplex.edge_scale();
    let lu = simplex.edge_matrix().lu();
    let det = lu.determinant();
    let relative_volume = if scale > 0.0 && scale.is_finite() {
        det.abs() / scale
    } else {
        0.0
    };
    if relative_volume <= cfg.eps_det {
        return Err(GeomError::DegenerateSimplex { relative_volume });
    }
    match lu.solve(&(p - simplex.vertex(0))) {
        Some(x) if x.iter().all(|v| v.is_finite()) => Ok(Barycentric::from_edge_weights(x)),
        _ => Err(GeomError::DegenerateSimplex { relative_volume }),
    }
}

/// Generic point-in-simplex test; `inside` iff every weight is in `[-eps_inside, 1 + eps_inside]`.
pub fn point_in_simplex<const D: usize>(
    p: &PointN<D>,
    simplex: &Simplex<D>,
    cfg: SimplexCfg,
) -> Result<Containment<D>, GeomError>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    let coordinates = barycentric_with(p, simplex, cfg)?;
    Ok(Containment {
        inside: coordinates.is_inside(cfg.eps_inside),
        coordinates,
    })
}

pub fn point_in_triangle(p: &Point2, t: &Triangle2) -> Result<Containment<2>, GeomError> {
    point_in_simplex(p, t, SimplexCfg::default())
}

pub fn point_in_triangle_with(
    p: &Point2,
    t: &Triangle2,
    cfg: SimplexCfg,
) -> Result<Containment<2>, GeomError> {
    point_in_simplex(p, t, cfg)
}

pub fn point_in_tetrahedron(p: &Point3, t: &Tetrahedron) -> Result<Containment<3>, GeomError> {
    point_in_simplex(p, t, SimplexCfg::default())
}

pub fn point_in_tetrahedron_with(
    p: &Point3,
    t: &Tetrahedron,
    cfg: SimplexCfg,
) -> Result<Containment<3>, GeomError> {
    point_in_simplex(p, t, cfg)
}
