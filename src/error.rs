//! Engine error types.

use thiserror::Error;

/// Errors reported during maze construction.
///
/// All runtime queries (collision, pathfinding, pellet removal) degrade
/// in-band instead of erroring: out-of-bounds pathfinding endpoints yield an
/// empty path, collision queries clamp to the grid, and repeated pellet
/// removal is a no-op. Only construction with unusable parameters fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Grid dimensions must both be at least 1.
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Cell size must be a positive, finite world length.
    #[error("cell size must be positive and finite, got {cell_size}")]
    InvalidCellSize { cell_size: f32 },

    /// Wall height must be a positive, finite world length.
    #[error("wall height must be positive and finite, got {wall_height}")]
    InvalidWallHeight { wall_height: f32 },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;
