use geopred::GeomError;
use nalgebra::{Vector2, Vector3};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub type Pt2 = (f64, f64);
pub type Pt3 = (f64, f64, f64);

pub fn v2(p: Pt2) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

pub fn v3(p: Pt3) -> Vector3<f64> {
    Vector3::new(p.0, p.1, p.2)
}

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
