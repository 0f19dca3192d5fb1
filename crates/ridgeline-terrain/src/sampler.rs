//! World-space elevation queries against a generated height field.

use std::sync::Arc;

use glam::DVec3;

use crate::heightfield::HeightField;

/// Answers "elevation at world `(x, z)`" for a terrain placed at `origin`.
///
/// Holds a shared, immutable [`HeightField`], so one sampler can be cloned
/// across placement workers freely. A sampler with no field answers 0
/// everywhere instead of failing.
#[derive(Clone, Debug, Default)]
pub struct TerrainSampler {
    field: Option<Arc<HeightField>>,
    origin: DVec3,
}

impl TerrainSampler {
    /// Sampler over `field`, whose south-west corner sits at `origin`.
    pub fn new(field: Arc<HeightField>, origin: DVec3) -> Self {
        Self {
            field: Some(field),
            origin,
        }
    }

    /// Sampler with no terrain behind it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Option<&HeightField> {
        self.field.as_deref()
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Raw elevation at world `(x, z)`, clamped to the terrain edge.
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        match self.field.as_deref() {
            Some(field) => field.sample_world(self.origin, x, z),
            None => 0.0,
        }
    }

    /// World-space ground height: raw elevation times `vertical_scale`, plus the origin's `y`.
    pub fn world_height_at(&self, x: f64, z: f64, vertical_scale: f64) -> f64 {
        if self.field.is_none() {
            return 0.0;
        }
        self.origin.y + self.height_at(x, z) * vertical_scale
    }
}

/// Raw elevation of `field` at world `(world_x, world_z)`, with the terrain at the origin.
///
/// Returns 0 when there is no field.
pub fn sample_height(field: Option<&HeightField>, world_x: f64, world_z: f64) -> f64 {
    field.map_or(0.0, |f| f.sample_world(DVec3::ZERO, world_x, world_z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    const EPSILON: f64 = 1e-12;

    /// 4x4 field over a 3x3 world, so grid vertices sit on integer coordinates.
    /// Elevation is `0.1 * x + 0.01 * z`.
    fn linear_field() -> Arc<HeightField> {
        let values = (0..4u32)
            .flat_map(|y| (0..4u32).map(move |x| 0.1 * f64::from(x) + 0.01 * f64::from(y)))
            .collect();
        Arc::new(HeightField::from_values(4, DVec2::new(3.0, 3.0), values).unwrap())
    }

    #[test]
    fn test_vertex_returns_stored_value() {
        let field = linear_field();
        let sampler = TerrainSampler::new(field.clone(), DVec3::ZERO);
        for y in 0..4u32 {
            for x in 0..4u32 {
                let h = sampler.height_at(f64::from(x), f64::from(y));
                assert!((h - field.get(x, y).unwrap()).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_midpoint_is_average_of_neighbors() {
        let field = linear_field();
        let sampler = TerrainSampler::new(field.clone(), DVec3::ZERO);
        let mid = sampler.height_at(1.5, 2.0);
        let expected = (field.get(1, 2).unwrap() + field.get(2, 2).unwrap()) * 0.5;
        assert!((mid - expected).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_bounds_clamps_to_edge() {
        let sampler = TerrainSampler::new(linear_field(), DVec3::ZERO);
        assert_eq!(sampler.height_at(-10.0, 1.0), sampler.height_at(0.0, 1.0));
        assert_eq!(sampler.height_at(50.0, 1.0), sampler.height_at(3.0, 1.0));
        assert_eq!(sampler.height_at(2.0, -4.0), sampler.height_at(2.0, 0.0));
        assert_eq!(sampler.height_at(2.0, 99.0), sampler.height_at(2.0, 3.0));
        assert_eq!(sampler.height_at(-1.0, 99.0), sampler.height_at(0.0, 3.0));
    }

    #[test]
    fn test_non_finite_positions_do_not_panic() {
        let sampler = TerrainSampler::new(linear_field(), DVec3::ZERO);
        assert!(sampler.height_at(f64::NAN, 1.0).is_finite());
        assert!(sampler.height_at(f64::INFINITY, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_origin_offset() {
        let field = linear_field();
        let plain = TerrainSampler::new(field.clone(), DVec3::ZERO);
        let shifted = TerrainSampler::new(field, DVec3::new(100.0, 0.0, -50.0));
        assert!((shifted.height_at(101.5, -48.0) - plain.height_at(1.5, 2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_world_height_scales_and_offsets() {
        let sampler = TerrainSampler::new(linear_field(), DVec3::new(0.0, 5.0, 0.0));
        let raw = sampler.height_at(2.0, 1.0);
        assert!((sampler.world_height_at(2.0, 1.0, 50.0) - (5.0 + raw * 50.0)).abs() < EPSILON);
    }

    #[test]
    fn test_empty_sampler_returns_zero() {
        let sampler = TerrainSampler::empty();
        assert_eq!(sampler.height_at(10.0, 10.0), 0.0);
        assert_eq!(sampler.world_height_at(10.0, 10.0, 50.0), 0.0);
        assert!(sampler.field().is_none());
        assert_eq!(sample_height(None, 1.0, 2.0), 0.0);
    }

    #[test]
    fn test_free_function_matches_sampler_at_origin() {
        let field = linear_field();
        let sampler = TerrainSampler::new(field.clone(), DVec3::ZERO);
        assert_eq!(sample_height(Some(field.as_ref()), 0.7, 2.2), sampler.height_at(0.7, 2.2));
    }

    #[test]
    fn test_parallel_readers_agree() {
        let sampler = TerrainSampler::new(linear_field(), DVec3::ZERO);
        let expected: Vec<f64> = (0..32).map(|i| sampler.height_at(i as f64 * 0.1, 1.3)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let sampler = sampler.clone();
                    scope.spawn(move || {
                        (0..32)
                            .map(|i| sampler.height_at(i as f64 * 0.1, 1.3))
                            .collect::<Vec<f64>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
