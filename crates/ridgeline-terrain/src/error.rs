//! Terrain error types.

/// Errors produced while building a [`HeightField`](crate::HeightField).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// Grid resolution must be at least 1.
    #[error("invalid height-field resolution {0}: must be at least 1")]
    InvalidResolution(u32),

    /// World extents must be finite and strictly positive.
    #[error("invalid world size {width} x {depth}: extents must be finite and positive")]
    InvalidWorldSize { width: f64, depth: f64 },

    /// Supplied value buffer does not match `resolution * resolution`.
    #[error("expected {expected} height values, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },

    /// A supplied height value is NaN or infinite.
    #[error("height value at index {index} is not finite")]
    NonFiniteValue { index: usize },
}
