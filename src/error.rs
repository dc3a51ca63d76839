//! Error types for everything around the stepping engine.
//!
//! The engine itself is infallible; these errors come from building a grid,
//! seeding it, sizing it from a viewport, or loading configuration.

use thiserror::Error;

/// Errors raised while setting up or driving a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    /// Cell buffer length does not equal `rows * cols`.
    #[error("grid holds {actual} cells but dimensions require {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Alive probability outside `[0, 1]`.
    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Viewport too small to hold a single cell.
    #[error("viewport {width_px}x{height_px} px holds no {cell_size_px} px cells")]
    EmptyGrid {
        width_px: u32,
        height_px: u32,
        cell_size_px: u32,
    },

    /// Configuration value missing, unparsable or out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// A renderer failed to draw a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LifeError>;
