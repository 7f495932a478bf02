//! Segment intersection binding.

use crate::common::{map_geom_err, v2, Pt2};
use geopred::api::{intersect_with_tol, Intersection, Segment, DEFAULT_SEGMENT_TOL};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Classify two segments. The dict always carries `kind`, `intersect` and
/// `points`; the remaining keys depend on the outcome.
#[pyfunction]
#[pyo3(signature = (a1, a2, b1, b2, tol = DEFAULT_SEGMENT_TOL))]
pub fn segment_intersect(
    py: Python<'_>,
    a1: Pt2,
    a2: Pt2,
    b1: Pt2,
    b2: Pt2,
    tol: f64,
) -> PyResult<PyObject> {
    let s1 = Segment::new(v2(a1), v2(a2)).map_err(map_geom_err)?;
    let s2 = Segment::new(v2(b1), v2(b2)).map_err(map_geom_err)?;
    let r = intersect_with_tol(&s1, &s2, tol).map_err(map_geom_err)?;

    let dict = PyDict::new(py);
    dict.set_item("kind", r.kind())?;
    dict.set_item("intersect", r.intersects())?;
    let points: Vec<Pt2> = r.points().iter().map(|p| (p.x, p.y)).collect();
    dict.set_item("points", points)?;
    match r {
        Intersection::ProperCrossing { t, .. } => {
            dict.set_item("t", (t[0], t[1]))?;
        }
        Intersection::EndpointTouch { t, ends, .. } => {
            dict.set_item("t", (t[0], t[1]))?;
            dict.set_item("ends", (ends[0], ends[1]))?;
        }
        Intersection::CollinearOverlap { t, identical, .. } => {
            dict.set_item("t", [(t[0][0], t[0][1]), (t[1][0], t[1][1])])?;
            dict.set_item("identical", identical)?;
        }
        Intersection::Parallel { distance } => {
            dict.set_item("distance", distance)?;
        }
        Intersection::NoIntersection => {}
    }
    dict.set_item("text", format!("{r:#}"))?;
    Ok(dict.into())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add("DEFAULT_SEGMENT_TOL", DEFAULT_SEGMENT_TOL)?;
    m.add_function(wrap_pyfunction!(segment_intersect, m)?)?;
    Ok(())
}
