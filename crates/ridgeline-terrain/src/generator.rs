//! Zone-blended height-field synthesis.
//!
//! Every cell starts from one low-amplitude octave of base noise. The row's
//! zone then decides what happens next: mountains add a broad mass and a
//! ridge octave, hills add one rolling octave, and the city band is pulled
//! most of the way toward a near-flat target. Hill bumps are added last, in
//! every zone, so they still rise out of the flattened city.

use std::time::Instant;

use glam::DVec2;

use crate::coherent::{CoherentNoise, PerlinNoise};
use crate::error::TerrainError;
use crate::heightfield::{HeightField, validate_resolution, validate_world_size};
use crate::zone::{HillBump, Zone, ZoneThresholds};

/// One noise layer sampled at `frequency` times the cell's grid fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseOctave {
    pub frequency: f64,
    pub amplitude: f64,
}

impl NoiseOctave {
    pub const fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    fn sample<N: CoherentNoise>(&self, noise: &N, fx: f64, fy: f64) -> f64 {
        noise.sample(fx * self.frequency, fy * self.frequency) * self.amplitude
    }
}

/// Shape parameters for the hybrid city/hills/mountains landscape.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightFieldParams {
    /// Base layer applied to every cell.
    pub base: NoiseOctave,
    /// Zone boundaries along the north axis.
    pub zones: ZoneThresholds,
    /// Additive layers in the mountain zone (broad mass, then ridges).
    pub mountain_octaves: Vec<NoiseOctave>,
    /// Additive layers in the hill zone.
    pub hill_octaves: Vec<NoiseOctave>,
    /// Elevation the city band is pulled toward.
    pub city_flat_target: f64,
    /// Fraction of the way each city cell moves toward the target.
    pub city_pull: f64,
    /// Cone hills added after zone rules.
    pub hill_bumps: Vec<HillBump>,
}

impl Default for HeightFieldParams {
    fn default() -> Self {
        Self {
            base: NoiseOctave::new(4.0, 0.15),
            zones: ZoneThresholds::default(),
            mountain_octaves: vec![NoiseOctave::new(3.0, 0.6), NoiseOctave::new(8.0, 0.2)],
            hill_octaves: vec![NoiseOctave::new(5.0, 0.3)],
            city_flat_target: 0.05,
            city_pull: 0.7,
            hill_bumps: vec![
                HillBump::new(0.2, 0.3, 0.1, 0.2),
                HillBump::new(0.6, 0.25, 0.08, 0.15),
            ],
        }
    }
}

/// Synthesizes [`HeightField`]s from a coherent noise source.
pub struct HeightFieldGenerator<N: CoherentNoise> {
    noise: N,
    params: HeightFieldParams,
}

impl<N: CoherentNoise> HeightFieldGenerator<N> {
    pub fn new(noise: N, params: HeightFieldParams) -> Self {
        Self { noise, params }
    }

    /// Return a reference to the shape parameters.
    pub fn params(&self) -> &HeightFieldParams {
        &self.params
    }

    /// Return a reference to the noise source.
    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Raw elevation of grid cell `(x, y)` in a `resolution`-sized grid.
    pub fn elevation_at(&self, x: u32, y: u32, resolution: u32) -> f64 {
        let p = &self.params;
        let res = f64::from(resolution.max(1));
        let (cx, cy) = (f64::from(x), f64::from(y));
        let fx = cx / res;
        let fy = cy / res;

        let mut elevation = p.base.sample(&self.noise, fx, fy);

        match Zone::classify(fy, &p.zones) {
            Zone::Mountains => {
                elevation += p
                    .mountain_octaves
                    .iter()
                    .map(|o| o.sample(&self.noise, fx, fy))
                    .sum::<f64>();
            }
            Zone::Hills => {
                elevation += p
                    .hill_octaves
                    .iter()
                    .map(|o| o.sample(&self.noise, fx, fy))
                    .sum::<f64>();
            }
            Zone::City => {
                elevation = lerp(elevation, p.city_flat_target, p.city_pull);
            }
        }

        elevation
            + p.hill_bumps
                .iter()
                .map(|bump| bump.contribution(cx, cy, res))
                .sum::<f64>()
    }

    /// Generate a full `resolution x resolution` field covering `world_size`.
    pub fn generate(&self, resolution: u32, world_size: DVec2) -> Result<HeightField, TerrainError> {
        if let Err(err) =
            validate_resolution(resolution).and_then(|()| validate_world_size(world_size))
        {
            tracing::warn!(resolution, width = world_size.x, depth = world_size.y, %err, "rejected height-field request");
            return Err(err);
        }

        let started = Instant::now();
        let values: Vec<f64> = (0..resolution)
            .flat_map(|y| (0..resolution).map(move |x| (x, y)))
            .map(|(x, y)| self.elevation_at(x, y, resolution))
            .collect();

        let field = HeightField::from_generated(resolution, world_size, values);
        tracing::info!(
            resolution,
            min = field.min(),
            max = field.max(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "generated height field"
        );
        Ok(field)
    }
}

/// Generate a height field with the default landscape shape and seeded Perlin noise.
pub fn generate_height_field(
    resolution: u32,
    world_size: DVec2,
    seed: u32,
) -> Result<HeightField, TerrainError> {
    HeightFieldGenerator::new(PerlinNoise::new(seed), HeightFieldParams::default())
        .generate(resolution, world_size)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
