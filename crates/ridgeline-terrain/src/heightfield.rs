//! Immutable square grid of raw elevations.

use glam::{DVec2, DVec3};

use crate::error::TerrainError;
use crate::zone::{Zone, ZoneThresholds};

/// A `resolution x resolution` grid of raw elevations covering a rectangular
/// world footprint.
///
/// Values are stored row-major with the row index running north (`y`) and the
/// column index running east (`x`). The grid never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    resolution: u32,
    world_size: DVec2,
    values: Vec<f64>,
}

/// Summary statistics over a set of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoneStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

impl ZoneStats {
    /// Population mean and variance of `values`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for v in values {
            count += 1;
            sum += v;
            sum_sq += v * v;
        }
        if count == 0 {
            return Self::default();
        }
        let mean = sum / count as f64;
        let variance = (sum_sq / count as f64 - mean * mean).max(0.0);
        Self {
            count,
            mean,
            variance,
        }
    }
}

pub(crate) fn validate_resolution(resolution: u32) -> Result<(), TerrainError> {
    if resolution == 0 {
        return Err(TerrainError::InvalidResolution(resolution));
    }
    Ok(())
}

pub(crate) fn validate_world_size(world_size: DVec2) -> Result<(), TerrainError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(world_size.x) || !valid(world_size.y) {
        return Err(TerrainError::InvalidWorldSize {
            width: world_size.x,
            depth: world_size.y,
        });
    }
    Ok(())
}

impl HeightField {
    /// Build a field from caller-supplied row-major values.
    pub fn from_values(
        resolution: u32,
        world_size: DVec2,
        values: Vec<f64>,
    ) -> Result<Self, TerrainError> {
        validate_resolution(resolution)?;
        validate_world_size(world_size)?;

        let expected = resolution as usize * resolution as usize;
        if values.len() != expected {
            return Err(TerrainError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(TerrainError::NonFiniteValue { index });
        }

        Ok(Self {
            resolution,
            world_size,
            values,
        })
    }

    /// Construct from values already known to be valid.
    pub(crate) fn from_generated(resolution: u32, world_size: DVec2, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), resolution as usize * resolution as usize);
        Self {
            resolution,
            world_size,
            values,
        }
    }

    /// Cells per side.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// World footprint as `(width along X, depth along Z)`.
    pub fn world_size(&self) -> DVec2 {
        self.world_size
    }

    /// Row-major elevations.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Elevation of cell `(x, y)`, or `None` if outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.resolution || y >= self.resolution {
            return None;
        }
        Some(self.values[self.index(x, y)])
    }

    /// Lowest elevation in the grid.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest elevation in the grid.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Statistics over every cell whose row falls in `zone`.
    pub fn zone_stats(&self, zone: Zone, thresholds: &ZoneThresholds) -> ZoneStats {
        let res = self.resolution;
        ZoneStats::from_values(
            (0..res)
                .filter(|&y| Zone::of_row(y, res, thresholds) == zone)
                .flat_map(|y| (0..res).map(move |x| (x, y)))
                .map(|(x, y)| self.values[self.index(x, y)]),
        )
    }

    /// Bilinear elevation at normalized coordinates `(u, v)`.
    ///
    /// `u` runs east and `v` north; both are clamped into `[0, 1]`, and NaN is
    /// treated as 0.
    pub fn interpolate(&self, u: f64, v: f64) -> f64 {
        let span = f64::from(self.resolution - 1);
        let gx = unit_clamp(u) * span;
        let gy = unit_clamp(v) * span;

        let last = self.resolution - 1;
        let x0 = (gx.floor() as u32).min(last);
        let y0 = (gy.floor() as u32).min(last);
        let x1 = (x0 + 1).min(last);
        let y1 = (y0 + 1).min(last);

        let tx = gx - f64::from(x0);
        let ty = gy - f64::from(y0);

        let h00 = self.values[self.index(x0, y0)];
        let h10 = self.values[self.index(x1, y0)];
        let h01 = self.values[self.index(x0, y1)];
        let h11 = self.values[self.index(x1, y1)];

        let h0 = h00 * (1.0 - tx) + h10 * tx;
        let h1 = h01 * (1.0 - tx) + h11 * tx;

        h0 * (1.0 - ty) + h1 * ty
    }

    /// Elevation at world position `(x, z)` for a field whose south-west
    /// corner sits at `origin` (the origin's `y` is ignored).
    pub fn sample_world(&self, origin: DVec3, x: f64, z: f64) -> f64 {
        let u = (x - origin.x) / self.world_size.x;
        let v = (z - origin.z) / self.world_size.y;
        self.interpolate(u, v)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.resolution as usize + x as usize
    }
}

fn unit_clamp(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(resolution: u32) -> HeightField {
        let values = (0..resolution)
            .flat_map(|y| (0..resolution).map(move |x| f64::from(x) + 10.0 * f64::from(y)))
            .collect();
        HeightField::from_values(resolution, DVec2::new(3.0, 3.0), values).unwrap()
    }

    #[test]
    fn test_from_values_rejects_zero_resolution() {
        let err = HeightField::from_values(0, DVec2::ONE, vec![]).unwrap_err();
        assert_eq!(err, TerrainError::InvalidResolution(0));
    }

    #[test]
    fn test_from_values_rejects_bad_world_size() {
        let err = HeightField::from_values(1, DVec2::new(0.0, 1.0), vec![0.0]).unwrap_err();
        assert!(matches!(err, TerrainError::InvalidWorldSize { .. }));
        let err = HeightField::from_values(1, DVec2::new(1.0, f64::NAN), vec![0.0]).unwrap_err();
        assert!(matches!(err, TerrainError::InvalidWorldSize { .. }));
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        let err = HeightField::from_values(2, DVec2::ONE, vec![0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::ValueCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_values_rejects_non_finite() {
        let err =
            HeightField::from_values(2, DVec2::ONE, vec![0.0, 1.0, f64::INFINITY, 0.0]).unwrap_err();
        assert_eq!(err, TerrainError::NonFiniteValue { index: 2 });
    }

    #[test]
    fn test_get_is_row_major_by_north_axis() {
        let field = ramp(4);
        assert_eq!(field.get(1, 0), Some(1.0));
        assert_eq!(field.get(0, 1), Some(10.0));
        assert_eq!(field.get(3, 3), Some(33.0));
        assert_eq!(field.get(4, 0), None);
        assert_eq!(field.get(0, 4), None);
    }

    #[test]
    fn test_min_max() {
        let field = ramp(4);
        assert_eq!(field.min(), 0.0);
        assert_eq!(field.max(), 33.0);
    }

    #[test]
    fn test_interpolate_corners_and_clamp() {
        let field = ramp(4);
        assert_eq!(field.interpolate(0.0, 0.0), 0.0);
        assert_eq!(field.interpolate(1.0, 1.0), 33.0);
        assert_eq!(field.interpolate(-2.0, 5.0), 30.0);
        assert_eq!(field.interpolate(f64::NAN, 0.0), 0.0);
    }

    #[test]
    fn test_single_cell_field() {
        let field = HeightField::from_values(1, DVec2::ONE, vec![0.7]).unwrap();
        assert_eq!(field.interpolate(0.3, 0.9), 0.7);
        assert_eq!(field.get(0, 0), Some(0.7));
    }

    #[test]
    fn test_zone_stats_selects_rows() {
        // Rows 0..=4 are city, 5..=7 hills, 8..=9 mountains at resolution 10.
        let values = (0..10u32)
            .flat_map(|y| (0..10u32).map(move |_| f64::from(y)))
            .collect();
        let field = HeightField::from_values(10, DVec2::ONE, values).unwrap();
        let t = ZoneThresholds::default();

        let city = field.zone_stats(Zone::City, &t);
        assert_eq!(city.count, 50);
        assert!((city.mean - 2.0).abs() < 1e-12);
        assert!((city.variance - 2.0).abs() < 1e-9);

        let mountains = field.zone_stats(Zone::Mountains, &t);
        assert_eq!(mountains.count, 20);
        assert!((mountains.mean - 8.5).abs() < 1e-12);
    }

    #[test]
    fn test_zone_stats_empty() {
        assert_eq!(ZoneStats::from_values(std::iter::empty()), ZoneStats::default());
    }
}
