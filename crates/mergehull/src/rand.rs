//! Reproducible random point sets.
//!
//! Purpose
//! - Feed tests, benches and the CLI with point sets whose x-coordinates are
//!   pairwise distinct, as the divider expects.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `compute_hull`, `XSorted`

use crate::hull::Pt2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Region the points are drawn from, centred at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Uniform in the square `[-half_width, half_width]²`.
    Box { half_width: f64 },
    /// Uniform in the disk of the given radius.
    Disk { radius: f64 },
    /// On the circle of the given radius (every point is a hull vertex).
    Circle { radius: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub n: usize,
    pub shape: Shape,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            n: 100,
            shape: Shape::Box { half_width: 1.0 },
        }
    }
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
        // SplitMix64-style mixing, cheap and stable.
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

fn draw<R: Rng>(shape: Shape, rng: &mut R) -> Pt2 {
    match shape {
        Shape::Box { half_width } => {
            let w = half_width.abs();
            Pt2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w))
        }
        Shape::Disk { radius } => {
            let r = radius.abs() * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Pt2::new(r * th.cos(), r * th.sin())
        }
        Shape::Circle { radius } => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Pt2::new(radius * th.cos(), radius * th.sin())
        }
    }
}

/// Draw `cfg.n` points with pairwise distinct x-coordinates.
///
/// Colliding x values are redrawn. A zero-size shape can only yield one
/// distinct x, so the result is then shorter than `n`.
pub fn sample_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Pt2> {
    let mut rng = tok.to_std_rng();
    let mut seen: HashSet<u64> = HashSet::with_capacity(cfg.n);
    let mut out = Vec::with_capacity(cfg.n);
    let max_attempts = cfg.n.saturating_mul(8).max(64);
    let mut attempts = 0;
    while out.len() < cfg.n && attempts < max_attempts {
        attempts += 1;
        let p = draw(cfg.shape, &mut rng);
        // +0.0 folds -0.0 onto 0.0 so both hash alike
        if seen.insert((p.x + 0.0).to_bits()) {
            out.push(p);
        }
    }
    out
}
