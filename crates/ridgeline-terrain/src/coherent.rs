//! Coherent 2D noise primitives used as input to height-field synthesis.

use noise::{NoiseFn, Perlin};

/// A total, deterministic 2D noise function with output in `[0, 1]`.
///
/// Implementations must return the same value for the same coordinate on
/// every call, so that a generator run is reproducible.
pub trait CoherentNoise {
    /// Sample the noise at `(x, y)` in noise space.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Seeded Perlin noise remapped from `[-1, 1]` into `[0, 1]`.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    seed: u32,
    perlin: Perlin,
}

impl PerlinNoise {
    /// Create a Perlin source with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            perlin: Perlin::new(seed),
        }
    }

    /// The seed this source was built with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CoherentNoise for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.perlin.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_output_in_unit_range() {
        let noise = PerlinNoise::new(3);
        for i in 0..200 {
            for j in 0..200 {
                let v = noise.sample(i as f64 * 0.037, j as f64 * 0.041);
                assert!((0.0..=1.0).contains(&v), "sample {v} out of range at ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_same_seed_same_value() {
        let a = PerlinNoise::new(42);
        let b = PerlinNoise::new(42);
        for i in 0..100 {
            let (x, y) = (i as f64 * 0.13, i as f64 * 0.29);
            assert!((a.sample(x, y) - b.sample(x, y)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_different_seeds_differ_somewhere() {
        let a = PerlinNoise::new(1);
        let b = PerlinNoise::new(999);
        let total_diff: f64 = (0..100)
            .map(|i| {
                let (x, y) = (i as f64 * 0.17 + 0.3, i as f64 * 0.23 + 0.7);
                (a.sample(x, y) - b.sample(x, y)).abs()
            })
            .sum();
        assert!(total_diff > EPSILON, "seeds 1 and 999 produced identical noise");
    }

    #[test]
    fn test_continuity() {
        let noise = PerlinNoise::new(11);
        let step = 1e-4;
        for i in 0..1000 {
            let x = i as f64 * 0.01;
            let delta = (noise.sample(x + step, 0.5) - noise.sample(x, 0.5)).abs();
            assert!(delta < 0.01, "jump of {delta} at x={x}");
        }
    }
}
