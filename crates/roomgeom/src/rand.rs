//! Random simple polygons (radial jitter around the origin).
//!
//! Purpose
//! - Deterministic, seeded outlines for property tests and benchmarks.
//!
//! Model
//! - `n` equally spaced angles with bounded angular jitter, sorted, each at a
//!   jittered radius. Sorting keeps the outline star-shaped about the origin,
//!   hence simple and counter-clockwise. Coordinates are rounded to whole
//!   centimeters.
//! - Same `(cfg, seed)` gives the same polygon.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::shape::{Point, Polygon};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RandomPolygonCfg {
    pub vertex_count: VertexCount,
    /// Fraction of the base spacing `2π/n`. Clamped to `[0, 0.2]`, which keeps
    /// consecutive vertices less than π apart even for triangles.
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to `[0, 0.9]`.
    pub radial_jitter: f64,
    /// Centimeters.
    pub base_radius: f64,
}

impl Default for RandomPolygonCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 24 },
            angle_jitter_frac: 0.2,
            radial_jitter: 0.4,
            base_radius: 1000.0,
        }
    }
}

/// Draw a simple counter-clockwise polygon.
///
/// Fails only if `base_radius` pushes a vertex out of the centimeter range.
pub fn random_simple_polygon(cfg: RandomPolygonCfg, seed: u64) -> Result<Polygon> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.2);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = TAU / n as f64;

    let mut angles: Vec<f64> = (0..n)
        .map(|k| k as f64 * delta + rng.gen_range(-1.0..=1.0) * aj * delta)
        .collect();
    angles.sort_by(f64::total_cmp);

    let points = angles
        .into_iter()
        .map(|th| {
            let r = cfg.base_radius * (1.0 + rng.gen_range(-1.0..=1.0) * rj);
            Point::from_vector_rounded(Vector2::new(th.cos(), th.sin()) * r)
        })
        .collect::<Result<Vec<_>>>()?;
    Polygon::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_reproducible() {
        let cfg = RandomPolygonCfg::default();
        let a = random_simple_polygon(cfg, 7).unwrap();
        let b = random_simple_polygon(cfg, 7).unwrap();
        assert_eq!(a, b);
        let c = random_simple_polygon(cfg, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn draws_are_counter_clockwise_with_requested_size() {
        let cfg = RandomPolygonCfg {
            vertex_count: VertexCount::Fixed(17),
            ..RandomPolygonCfg::default()
        };
        for seed in 0..20 {
            let pg = random_simple_polygon(cfg, seed).unwrap();
            assert_eq!(pg.vertex_count(), 17);
            assert!(pg.is_counter_clockwise());
            // star-shaped about the origin
            assert!(pg.contains(Point::ORIGIN));
        }
    }

    #[test]
    fn oversized_radius_is_an_error() {
        let cfg = RandomPolygonCfg {
            base_radius: 1e12,
            ..RandomPolygonCfg::default()
        };
        assert!(random_simple_polygon(cfg, 1).is_err());
    }
}
