//! Criterion benchmarks for the simplex and segment predicates.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use geopred::segment::{intersect, Segment};
use geopred::simplex::rand::{random_simplex, sample_point_in, ReplayToken};
use geopred::simplex::{point_in_tetrahedron, point_in_triangle, point_in_triangle3, Triangle3};
use nalgebra::Vector2;
use rand::Rng;

fn bench_simplex(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex");
    let mut rng = ReplayToken { seed: 43, index: 0 }.to_std_rng();
    let tri = random_simplex::<2, _>(&mut rng, 1.0, 1e-2, 100).expect("triangle");
    let tet = random_simplex::<3, _>(&mut rng, 1.0, 1e-2, 100).expect("tetrahedron");
    let tri3 = Triangle3::new(
        nalgebra::vector![0.0, 0.0, 0.0],
        nalgebra::vector![1.0, 0.2, 0.1],
        nalgebra::vector![0.3, 1.0, -0.2],
    )
    .expect("triangle3");

    group.bench_function("point_in_triangle", |b| {
        b.iter_batched(
            || sample_point_in(&tri, &mut rng),
            |p| point_in_triangle(&p, &tri),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("point_in_tetrahedron", |b| {
        b.iter_batched(
            || sample_point_in(&tet, &mut rng),
            |p| point_in_tetrahedron(&p, &tet),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("point_in_triangle3", |b| {
        b.iter_batched(
            || nalgebra::vector![rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>() * 1e-3],
            |p| point_in_triangle3(&p, &tri3, 1e-3),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn random_segment<R: Rng>(rng: &mut R) -> Segment {
    loop {
        let p1 = Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let p2 = Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        if let Ok(s) = Segment::new(p1, p2) {
            return s;
        }
    }
}

fn bench_segments(c: &mut Criterion) {
    let mut rng = ReplayToken { seed: 44, index: 0 }.to_std_rng();
    c.bench_function("segment_intersect", |b| {
        b.iter_batched(
            || (random_segment(&mut rng), random_segment(&mut rng)),
            |(s1, s2)| intersect(&s1, &s2),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_simplex, bench_segments);
criterion_main!(benches);
