//! Point-in-simplex walkthrough: triangle, tetrahedron, triangle in 3-space.
//!
//! Usage:
//!   cargo run -p geopred --example point_in_simplex

use geopred::api::{
    make_tetrahedron, make_triangle, make_triangle3, point_in_tetrahedron, point_in_triangle,
    point_in_triangle3, DEFAULT_PLANE_EPS,
};
use geopred::GeomError;
use nalgebra::vector;

fn main() -> Result<(), GeomError> {
    let tri = make_triangle([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
    for p in [vector![0.25, 0.25], vector![1.0, 1.0]] {
        let res = point_in_triangle(&p, &tri)?;
        println!(
            "triangle    p=({}, {}) inside={} coords={:?}",
            p.x,
            p.y,
            res.inside,
            res.coordinates.to_vec()
        );
    }

    let tet = make_tetrahedron(
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    );
    for p in [vector![0.1, 0.1, 0.1], vector![1.0, 1.0, 1.0]] {
        let res = point_in_tetrahedron(&p, &tet)?;
        println!(
            "tetrahedron p=({}, {}, {}) inside={} coords={:?}",
            p.x,
            p.y,
            p.z,
            res.inside,
            res.coordinates.to_vec()
        );
    }

    let tri3 = make_triangle3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])?;
    for p in [vector![0.2, 0.2, 0.0], vector![0.2, 0.2, 1.0]] {
        let q = point_in_triangle3(&p, &tri3, DEFAULT_PLANE_EPS)?;
        println!(
            "triangle3   p=({}, {}, {}) inside={} in_plane={} distance={:.3e} coords={:?}",
            p.x,
            p.y,
            p.z,
            q.inside(),
            q.in_plane(),
            q.distance(),
            q.coordinates().to_vec()
        );
    }

    let flat = make_triangle([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]);
    match point_in_triangle(&vector![0.5, 0.5], &flat) {
        Err(err) => println!("collinear triangle rejected: {err}"),
        Ok(res) => println!("unexpected result {res:?}"),
    }
    Ok(())
}
