//! Point-in-simplex bindings.

use crate::common::{map_geom_err, v2, v3, Pt2, Pt3};
use geopred::api::{
    point_in_simplex, point_in_triangle3, Simplex, SimplexCfg, Tetrahedron, Triangle2, Triangle3,
    DEFAULT_PLANE_EPS,
};
use nalgebra::{Const, DimMin, SVector};
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn cfg(eps: Option<f64>) -> SimplexCfg {
    eps.map_or_else(SimplexCfg::default, SimplexCfg::with_inside_eps)
}

fn contains<const D: usize>(
    p: SVector<f64, D>,
    s: &Simplex<D>,
    eps: Option<f64>,
) -> PyResult<(bool, Vec<f64>)>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    let res = point_in_simplex(&p, s, cfg(eps)).map_err(map_geom_err)?;
    Ok((res.inside, res.coordinates.to_vec()))
}

/// Returns `(inside, [l0, l1, l2])`.
#[pyfunction]
#[pyo3(signature = (p, a, b, c, eps = None))]
pub fn point_in_triangle(
    p: Pt2,
    a: Pt2,
    b: Pt2,
    c: Pt2,
    eps: Option<f64>,
) -> PyResult<(bool, Vec<f64>)> {
    contains(v2(p), &Triangle2::triangle(v2(a), v2(b), v2(c)), eps)
}

/// Returns `(inside, [l0, l1, l2, l3])`.
#[pyfunction]
#[pyo3(signature = (p, a, b, c, d, eps = None))]
pub fn point_in_tetrahedron(
    p: Pt3,
    a: Pt3,
    b: Pt3,
    c: Pt3,
    d: Pt3,
    eps: Option<f64>,
) -> PyResult<(bool, Vec<f64>)> {
    let t = Tetrahedron::tetrahedron(v3(a), v3(b), v3(c), v3(d));
    contains(v3(p), &t, eps)
}

/// Point against a triangle in 3-space. Returns a dict with
/// `inside`, `in_plane`, `distance` and `coordinates`.
#[pyfunction]
#[pyo3(name = "point_in_triangle3", signature = (p, a, b, c, eps = DEFAULT_PLANE_EPS))]
pub fn point_in_triangle3_py(
    py: Python<'_>,
    p: Pt3,
    a: Pt3,
    b: Pt3,
    c: Pt3,
    eps: f64,
) -> PyResult<PyObject> {
    let tri = Triangle3::new(v3(a), v3(b), v3(c)).map_err(map_geom_err)?;
    let q = point_in_triangle3(&v3(p), &tri, eps).map_err(map_geom_err)?;
    let dict = PyDict::new(py);
    dict.set_item("inside", q.inside())?;
    dict.set_item("in_plane", q.in_plane())?;
    dict.set_item("distance", q.distance())?;
    dict.set_item("coordinates", q.coordinates().to_vec())?;
    Ok(dict.into())
}

/// Signed area (2D) of the triangle `a, b, c`.
#[pyfunction]
pub fn triangle_signed_area(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    Triangle2::triangle(v2(a), v2(b), v2(c)).signed_volume()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add("DEFAULT_PLANE_EPS", DEFAULT_PLANE_EPS)?;
    m.add_function(wrap_pyfunction!(point_in_triangle, m)?)?;
    m.add_function(wrap_pyfunction!(point_in_tetrahedron, m)?)?;
    m.add_function(wrap_pyfunction!(point_in_triangle3_py, m)?)?;
    m.add_function(wrap_pyfunction!(triangle_signed_area, m)?)?;
    Ok(())
}
