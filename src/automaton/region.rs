//! Bulk extraction of a rectangle of cells.

use super::grid::{index_of, Grid};

/// Clamp a half-open rectangle to the grid. Returns `None` when it is empty.
fn clamp_region(
    grid: &Grid,
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> Option<(usize, usize, usize, usize)> {
    let min_row = min_row.min(grid.rows());
    let min_col = min_col.min(grid.cols());
    let max_row = max_row.min(grid.rows());
    let max_col = max_col.min(grid.cols());

    if min_row >= max_row || min_col >= max_col {
        return None;
    }
    Some((min_row, min_col, max_row, max_col))
}

/// Extract a rectangular region from the grid into a flat buffer.
///
/// # Layout
/// Row-major, one byte per cell (0 = dead, 1 = alive).
///
/// # Returns
/// Number of bytes written, or 0 if the region is empty or the buffer too small.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> usize {
    let Some((min_row, min_col, max_row, max_col)) =
        clamp_region(grid, min_row, min_col, max_row, max_col)
    else {
        return 0;
    };

    let total_size = (max_row - min_row) * (max_col - min_col);
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for row in min_row..max_row {
        for col in min_col..max_col {
            out_buf[offset] = grid.get(index_of(grid.cols(), row, col)) as u8;
            offset += 1;
        }
    }

    offset
}
