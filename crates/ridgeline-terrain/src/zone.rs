//! Landscape zones and localized hill bumps.

use glam::DVec2;

/// Latitude band a grid row belongs to, from south to north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Southern band, pulled toward a near-flat elevation.
    City,
    /// Transitional band with one octave of rolling hills.
    Hills,
    /// Northern band with a broad mass plus ridge detail.
    Mountains,
}

/// North-fraction boundaries between the zones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneThresholds {
    /// Rows with `fy <= city_max` are city.
    pub city_max: f64,
    /// Rows with `city_max < fy <= hills_max` are hills; above is mountains.
    pub hills_max: f64,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            city_max: 0.4,
            hills_max: 0.7,
        }
    }
}

impl Zone {
    /// Classify a north fraction `fy` (0 = south edge, 1 = north edge).
    pub fn classify(fy: f64, thresholds: &ZoneThresholds) -> Self {
        if fy <= thresholds.city_max {
            Zone::City
        } else if fy <= thresholds.hills_max {
            Zone::Hills
        } else {
            Zone::Mountains
        }
    }

    /// Classify grid row `y` of a `resolution`-sized grid.
    pub fn of_row(y: u32, resolution: u32, thresholds: &ZoneThresholds) -> Self {
        Self::classify(f64::from(y) / f64::from(resolution.max(1)), thresholds)
    }
}

/// A circular cone-shaped hill added on top of the zone elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HillBump {
    /// Center as a fraction of the grid (x east, y north).
    pub center: DVec2,
    /// Radius as a fraction of the grid resolution.
    pub radius_fraction: f64,
    /// Elevation added at the exact center.
    pub peak: f64,
}

impl HillBump {
    pub const fn new(center_x: f64, center_y: f64, radius_fraction: f64, peak: f64) -> Self {
        Self {
            center: DVec2::new(center_x, center_y),
            radius_fraction,
            peak,
        }
    }

    /// Elevation added at grid cell `(x, y)`. Zero at and beyond the radius.
    pub fn contribution(&self, x: f64, y: f64, resolution: f64) -> f64 {
        let radius = self.radius_fraction * resolution;
        if radius <= 0.0 {
            return 0.0;
        }
        let distance = DVec2::new(x, y).distance(self.center * resolution);
        if distance < radius {
            (1.0 - distance / radius) * self.peak
        } else {
            0.0
        }
    }
}
