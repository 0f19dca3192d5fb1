//! Procedural height-field synthesis and terrain-relative sampling.
//!
//! [`HeightFieldGenerator`] builds a square grid of raw elevations from a
//! coherent noise primitive: a flattened city band in the south, a hill band in
//! the middle, a mountain band in the north, and two cone-shaped hills near the
//! city. [`TerrainSampler`] answers bilinear elevation queries in world space so
//! placement code can rest objects on the ground.

mod coherent;
mod error;
mod generator;
mod heightfield;
mod sampler;
mod zone;

pub use coherent::{CoherentNoise, PerlinNoise};
pub use error::TerrainError;
pub use generator::{HeightFieldGenerator, HeightFieldParams, NoiseOctave, generate_height_field};
pub use heightfield::{HeightField, ZoneStats};
pub use sampler::{TerrainSampler, sample_height};
pub use zone::{HillBump, Zone, ZoneThresholds};
