//! Sampling points of parameter space.
//!
//! - `grid`: a regular lattice over [0,1]², both ends included, row-major.
//! - `random_param`: reproducible random points from a replay token `(seed, index)`,
//!   so a single sample can be regenerated without replaying the whole stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::NormalizedParam;

/// `(steps + 1)²` points `(i/steps, j/steps)`; `steps == 0` yields only the origin.
pub fn grid(steps: usize) -> impl Iterator<Item = NormalizedParam> {
    let n = steps.max(1) as f64;
    (0..=steps).flat_map(move |j| {
        (0..=steps).map(move |i| {
            let x = (i as f64 / n).min(1.0);
            let y = (j as f64 / n).min(1.0);
            NormalizedParam::clamped(x, y).unwrap_or(NormalizedParam::CENTER)
        })
    })
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Uniform random point of the closed unit square.
pub fn random_param(tok: ReplayToken) -> NormalizedParam {
    let mut rng = tok.to_std_rng();
    let x = rng.gen_range(0.0..=1.0);
    let y = rng.gen_range(0.0..=1.0);
    NormalizedParam::clamped(x, y).unwrap_or(NormalizedParam::CENTER)
}

/// `count` consecutive draws starting at `tok`.
pub fn random_params(tok: ReplayToken, count: usize) -> Vec<NormalizedParam> {
    let mut out = Vec::with_capacity(count);
    let mut t = tok;
    for _ in 0..count {
        out.push(random_param(t));
        t = t.advance();
    }
    out
}
