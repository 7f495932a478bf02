//! Reproducible random simplices and uniform interior samples.
//!
//! Model
//! - Uniform points in a simplex: Dirichlet(1, ..., 1) weights from normalized
//!   exponential draws, mapped through the vertices.
//! - Random simplices: vertices uniform in `[-scale, scale]^D`, redrawn while
//!   the relative volume is below `min_relative_volume`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{Const, DimMin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Barycentric, Simplex};
use crate::vec::PointN;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniformly distributed barycentric weights (all in `[0, 1]`, summing to 1).
pub fn sample_barycentric<const D: usize, R: Rng>(rng: &mut R) -> Barycentric<D> {
    // -ln(1 - u) with u in [0, 1) stays finite.
    let mut draw = || -(1.0 - rng.gen::<f64>()).ln();
    let first = draw();
    let rest = PointN::<D>::from_fn(|_, _| draw());
    let total = first + rest.sum();
    if total > 0.0 {
        Barycentric::from_edge_weights(rest / total)
    } else {
        Barycentric::from_edge_weights(PointN::<D>::repeat(1.0 / (D as f64 + 1.0)))
    }
}

/// Uniform point inside `simplex`.
pub fn sample_point_in<const D: usize, R: Rng>(simplex: &Simplex<D>, rng: &mut R) -> PointN<D> {
    sample_barycentric::<D, R>(rng).reconstruct(simplex)
}

/// Random simplex with vertices in `[-scale, scale]^D`.
///
/// Returns `None` if `max_attempts` draws all fall below `min_relative_volume`.
pub fn random_simplex<const D: usize, R: Rng>(
    rng: &mut R,
    scale: f64,
    min_relative_volume: f64,
    max_attempts: usize,
) -> Option<Simplex<D>>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    let scale = scale.abs().max(1e-9);
    for _ in 0..max_attempts {
        let mut vertex = || PointN::<D>::from_fn(|_, _| rng.gen_range(-scale..=scale));
        let origin = vertex();
        let others = std::array::from_fn(|_| vertex());
        let s = Simplex::new(origin, others);
        if s.relative_volume() > min_relative_volume {
            return Some(s);
        }
    }
    None
}
