use super::*;
use crate::error::GeomError;
use nalgebra::vector;
use proptest::prelude::*;

fn unit_triangle() -> Triangle2 {
    Triangle2::triangle(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0])
}

fn unit_tetrahedron() -> Tetrahedron {
    Tetrahedron::tetrahedron(
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    )
}

fn xy_triangle3() -> Triangle3 {
    Triangle3::new(
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
    )
    .unwrap()
}

#[test]
fn triangle_interior_point() {
    let res = point_in_triangle(&vector![0.25, 0.25], &unit_triangle()).unwrap();
    assert!(res.inside);
    let c = res.coordinates;
    assert!((c[0] - 0.5).abs() < 1e-12);
    assert!((c[1] - 0.25).abs() < 1e-12);
    assert!((c[2] - 0.25).abs() < 1e-12);
}

#[test]
fn triangle_exterior_point() {
    let res = point_in_triangle(&vector![1.0, 1.0], &unit_triangle()).unwrap();
    assert!(!res.inside);
    assert!((res.coordinates[0] + 1.0).abs() < 1e-12);
}

#[test]
fn triangle_vertices_and_edges_count_as_inside() {
    let t = unit_triangle();
    for p in [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.5, 0.5]] {
        assert!(point_in_triangle(&p, &t).unwrap().inside, "{p:?}");
    }
    // Just outside an edge, beyond the default slack.
    assert!(!point_in_triangle(&vector![0.5, -1e-9], &t).unwrap().inside);
    // Same point with a looser slack.
    let loose = SimplexCfg::with_inside_eps(1e-6);
    assert!(point_in_triangle_with(&vector![0.5, -1e-9], &t, loose)
        .unwrap()
        .inside);
}

#[test]
fn tetrahedron_inside_and_outside() {
    let t = unit_tetrahedron();
    let res = point_in_tetrahedron(&vector![0.1, 0.1, 0.1], &t).unwrap();
    assert!(res.inside);
    assert!((res.coordinates[0] - 0.7).abs() < 1e-12);
    assert!(!point_in_tetrahedron(&vector![1.0, 1.0, 1.0], &t)
        .unwrap()
        .inside);
}

#[test]
fn triangle_with_zero_leading_edge_entry() {
    // Edge matrix [[0, 1], [1, 0]] needs a row swap in the factorization.
    let t = Triangle2::triangle(vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]);
    let c = barycentric(&vector![0.2, 0.3], &t).unwrap();
    assert!((c[0] - 0.5).abs() < 1e-12);
    assert!((c[1] - 0.3).abs() < 1e-12);
    assert!((c[2] - 0.2).abs() < 1e-12);
}

#[test]
fn collinear_triangle_is_degenerate() {
    let t = Triangle2::triangle(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
    assert!(matches!(
        point_in_triangle(&vector![0.5, 0.5], &t),
        Err(GeomError::DegenerateSimplex { .. })
    ));
    assert!(t.relative_volume() < 1e-12);
}

#[test]
fn coincident_vertices_are_degenerate() {
    let p = vector![1.0, 2.0, 3.0];
    let t = Tetrahedron::tetrahedron(p, p, vector![0.0, 1.0, 0.0], vector![0.0, 0.0, 1.0]);
    assert!(matches!(
        barycentric(&vector![0.0, 0.0, 0.0], &t),
        Err(GeomError::DegenerateSimplex { .. })
    ));
}

#[test]
fn flat_tetrahedron_is_degenerate() {
    let t = Tetrahedron::tetrahedron(
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![1.0, 1.0, 0.0],
    );
    assert!(matches!(
        point_in_tetrahedron(&vector![0.2, 0.2, 0.0], &t),
        Err(GeomError::DegenerateSimplex { .. })
    ));
}

#[test]
fn degeneracy_test_is_scale_free() {
    // Tiny but well-shaped triangle must still solve.
    let s = 1e-8;
    let t = Triangle2::triangle(vector![0.0, 0.0], vector![s, 0.0], vector![0.0, s]);
    let res = point_in_triangle(&vector![0.25 * s, 0.25 * s], &t).unwrap();
    assert!(res.inside);
    assert!((res.coordinates[0] - 0.5).abs() < 1e-9);
}

#[test]
fn invalid_tolerance_rejected() {
    let t = unit_triangle();
    let cfg = SimplexCfg {
        eps_det: 1e-12,
        eps_inside: -1.0,
    };
    assert!(matches!(
        point_in_triangle_with(&vector![0.2, 0.2], &t, cfg),
        Err(GeomError::InvalidTolerance {
            name: "eps_inside",
            ..
        })
    ));
    assert!(matches!(
        point_in_triangle3(&vector![0.2, 0.2, 0.0], &xy_triangle3(), f64::NAN),
        Err(GeomError::InvalidTolerance { name: "eps", .. })
    ));
}

#[test]
fn from_rows_checks_counts_and_dimensions() {
    let ok = Tetrahedron::from_rows(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ])
    .unwrap();
    assert_eq!(ok, unit_tetrahedron());
    assert_eq!(
        Triangle2::from_rows(&[[0.0, 0.0], [1.0, 0.0]]),
        Err(GeomError::VertexCount {
            expected: 3,
            found: 2
        })
    );
    let mixed: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0, 0.0, 0.0], vec![0.0, 1.0]];
    assert_eq!(
        Triangle2::from_rows(&mixed),
        Err(GeomError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    );
    assert!(matches!(
        Triangle3::from_rows(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]),
        Err(GeomError::VertexCount { .. })
    ));
}

#[test]
fn signed_volume_of_unit_simplices() {
    assert!((unit_triangle().signed_volume() - 0.5).abs() < 1e-12);
    assert!((unit_tetrahedron().signed_volume() - 1.0 / 6.0).abs() < 1e-12);
    // Swapping two vertices flips orientation.
    let flipped = Triangle2::triangle(vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]);
    assert!((flipped.signed_volume() + 0.5).abs() < 1e-12);
}

#[test]
fn triangle3_in_plane_inside() {
    let q = point_in_triangle3(&vector![0.2, 0.2, 0.0], &xy_triangle3(), 1e-3).unwrap();
    assert!(q.in_plane());
    assert!(q.inside());
    assert!(q.distance().abs() < 1e-15);
    let c = q.coordinates();
    assert!((c[0] - 0.6).abs() < 1e-12);
    assert!((c[1] - 0.2).abs() < 1e-12);
    assert!((c[2] - 0.2).abs() < 1e-12);
}

#[test]
fn triangle3_off_plane_is_never_inside() {
    let q = point_in_triangle3(&vector![0.2, 0.2, 1.0], &xy_triangle3(), 1e-3).unwrap();
    assert!(!q.in_plane());
    assert!(!q.inside());
    assert!((q.distance() - 1.0).abs() < 1e-12);
    // Diagnostic coordinates are those of the projection (0.2, 0.2, 0).
    assert!((q.coordinates()[1] - 0.2).abs() < 1e-12);
    assert!(matches!(q, PlaneQuery::OffPlane { .. }));
}

#[test]
fn triangle3_distance_is_signed() {
    let q = point_in_triangle3(&vector![0.2, 0.2, -0.5], &xy_triangle3(), 1e-3).unwrap();
    assert!((q.distance() + 0.5).abs() < 1e-12);
}

#[test]
fn triangle3_in_plane_outside() {
    let q = point_in_triangle3(&vector![1.0, 1.0, 0.0005], &xy_triangle3(), 1e-3).unwrap();
    assert!(q.in_plane());
    assert!(!q.inside());
}

#[test]
fn triangle3_tilted_plane() {
    let t = Triangle3::new(
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    )
    .unwrap();
    let centroid = vector![1.0, 1.0, 1.0] / 3.0;
    let q = point_in_triangle3(&centroid, &t, 1e-9).unwrap();
    assert!(q.inside());
    for i in 0..3 {
        assert!((q.coordinates()[i] - 1.0 / 3.0).abs() < 1e-12);
    }
    let lifted = centroid + t.normal() * 0.25;
    let q = point_in_triangle3(&lifted, &t, 1e-3).unwrap();
    assert!((q.distance() - 0.25).abs() < 1e-12);
    assert!((t.project(&lifted) - centroid).norm() < 1e-12);
    assert!((t.area() - 3f64.sqrt() / 2.0).abs() < 1e-12);
}

#[test]
fn collinear_triangle3_is_rejected() {
    assert!(matches!(
        Triangle3::new(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 1.0, 1.0],
            vector![2.0, 2.0, 2.0]
        ),
        Err(GeomError::DegenerateTriangle { .. })
    ));
}

fn coord() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

proptest! {
    #[test]
    fn triangle_round_trip(
        ax in coord(), ay in coord(), bx in coord(), by in coord(),
        cx in coord(), cy in coord(), px in coord(), py in coord(),
    ) {
        let t = Triangle2::triangle(vector![ax, ay], vector![bx, by], vector![cx, cy]);
        prop_assume!(t.relative_volume() > 1e-3);
        let p = vector![px, py];
        let c = barycentric(&p, &t).unwrap();
        prop_assert!((c.sum() - 1.0).abs() < 1e-9);
        prop_assert!((c.reconstruct(&t) - p).norm() < 1e-8);
    }

    #[test]
    fn tetrahedron_round_trip(
        v in proptest::array::uniform12(coord()),
        p in proptest::array::uniform3(coord()),
    ) {
        let t = Tetrahedron::tetrahedron(
            vector![v[0], v[1], v[2]],
            vector![v[3], v[4], v[5]],
            vector![v[6], v[7], v[8]],
            vector![v[9], v[10], v[11]],
        );
        prop_assume!(t.relative_volume() > 1e-3);
        let p = vector![p[0], p[1], p[2]];
        let c = barycentric(&p, &t).unwrap();
        prop_assert!((c.sum() - 1.0).abs() < 1e-9);
        prop_assert!((c.reconstruct(&t) - p).norm() < 1e-7);
        // Inside iff every weight is non-negative (up to slack).
        let inside = point_in_tetrahedron(&p, &t).unwrap().inside;
        prop_assert_eq!(inside, c.is_inside(1e-12));
    }

    #[test]
    fn triangle3_projection_round_trip(
        v in proptest::array::uniform9(coord()),
        p in proptest::array::uniform3(coord()),
    ) {
        let t = match Triangle3::new(
            vector![v[0], v[1], v[2]],
            vector![v[3], v[4], v[5]],
            vector![v[6], v[7], v[8]],
        ) {
            Ok(t) => t,
            Err(_) => return Ok(()),
        };
        let e1 = t.vertex(1) - t.vertex(0);
        let e2 = t.vertex(2) - t.vertex(0);
        prop_assume!(e1.cross(&e2).norm() / (e1.norm() * e2.norm()) > 1e-2);
        let p = vector![p[0], p[1], p[2]];
        let q = point_in_triangle3(&p, &t, 1e-3).unwrap();
        prop_assert!((q.coordinates().sum() - 1.0).abs() < 1e-9);
        let back = t.reconstruct(&q.coordinates()) + t.normal() * q.distance();
        prop_assert!((back - p).norm() < 1e-7);
        prop_assert!(!q.inside() || q.in_plane());
    }
}
