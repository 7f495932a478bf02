//! PyO3 bindings for the `geopred` predicates.
//!
//! Notes
//! - Points and vertices cross the boundary as plain tuples; results come back
//!   as `(inside, coordinates)` tuples or small dicts.
//! - Every `GeomError` is raised as `ValueError` with the library message.

use pyo3::prelude::*;

mod common;
mod segment;
mod simplex;

#[pymodule]
fn geopred_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", geopred::VERSION)?;
    simplex::register(m)?;
    segment::register(m)?;
    Ok(())
}
