//! Scene error types.

use ridgeline_terrain::TerrainError;

/// Errors raised while building a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Height-field generation rejected the terrain settings.
    #[error("terrain generation failed: {0}")]
    Terrain(#[from] TerrainError),

    /// Vertical scale must be non-negative and representable as `f32`.
    #[error("invalid terrain vertical scale {0}")]
    InvalidVerticalScale(f64),
}
