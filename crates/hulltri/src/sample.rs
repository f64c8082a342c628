//! Random planar point clouds (replay tokens).
//!
//! Purpose
//! - Small, deterministic point sources for stress tests, benches, and the CLI.
//!   Draws are reproducible from a `(seed, index)` token mixed into one RNG.
//!
//! Layouts
//! - `Layout::Box`: uniform in `[-half_extent, half_extent]²`.
//! - `Layout::Circle`: uniform angles on the circle of radius `half_extent`
//!   (every point ends up on the hull).

use nalgebra::point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Box,
    Circle,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub half_extent: f64,
    pub layout: Layout,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 32,
            half_extent: 1.0,
            layout: Layout::Box,
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
}

/// Draw `cfg.count` points. Same token, same points.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = cfg.half_extent.abs().max(f64::MIN_POSITIVE);
    (0..cfg.count)
        .map(|_| match cfg.layout {
            Layout::Box => point![rng.gen_range(-r..=r), rng.gen_range(-r..=r)],
            Layout::Circle => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                point![r * th.cos(), r * th.sin()]
            }
        })
        .collect()
}
