//! Sizing a grid to fit a pixel viewport.

use crate::error::{LifeError, Result};

/// Default edge length of one cell in pixels.
pub const DEFAULT_CELL_SIZE_PX: u32 = 10;

/// A drawing surface measured in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Viewport {
            width_px,
            height_px,
        }
    }

    /// Whole cells that fit, as `(rows, cols)`. Partial cells at the right and bottom are dropped.
    pub fn grid_dimensions(&self, cell_size_px: u32) -> Result<(usize, usize)> {
        if cell_size_px == 0 {
            return Err(LifeError::InvalidConfig(
                "cell size must be at least 1 px".to_string(),
            ));
        }

        let rows = (self.height_px / cell_size_px) as usize;
        let cols = (self.width_px / cell_size_px) as usize;
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid {
                width_px: self.width_px,
                height_px: self.height_px,
                cell_size_px,
            });
        }

        Ok((rows, cols))
    }
}
