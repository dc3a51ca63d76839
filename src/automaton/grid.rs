//! Grid storage, flat-index helpers, and neighbor counting.

use crate::error::{LifeError, Result};

/// Row-major grid of life-states. `cells.len() == rows * cols` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Wrap an existing cell buffer, rejecting a length that disagrees with the dimensions.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self> {
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(LifeError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Internal constructor for buffers whose length is already known to match.
    pub(crate) fn from_raw(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Life-state at a flat index; out-of-range reads are dead.
    pub fn get(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Set the life-state at a flat index. Returns false if the index is out of range.
    pub fn set(&mut self, index: usize, alive: bool) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live neighbors of the cell at `index`. Panics if `index` is out of range.
    pub fn count_live_neighbors(&self, index: usize) -> u8 {
        count_live_neighbors(&self.cells, self.rows, self.cols, index)
    }
}

/// Flat index of a (row, col) coordinate.
#[inline]
pub fn index_of(cols: usize, row: usize, col: usize) -> usize {
    row * cols + col
}

/// (row, col) coordinate of a flat index.
#[inline]
pub fn position_of(cols: usize, index: usize) -> (usize, usize) {
    (index / cols, index % cols)
}

/// Check if a coordinate lies inside the grid.
#[inline]
pub fn in_bounds(rows: usize, cols: usize, row: usize, col: usize) -> bool {
    row < rows && col < cols
}

/// The eight Moore-neighborhood positions of `index`, in the order
/// above-left, above, above-right, left, right, below-left, below, below-right.
///
/// Positions that would leave the grid are `None`. A cell in column 0 has no
/// left-hand neighbors and a cell in column `cols - 1` has no right-hand ones,
/// so flat-index arithmetic never wraps onto an adjacent row. An index outside
/// the grid (including any index of a zero-width grid) has no neighbors.
pub fn neighbor_indices(rows: usize, cols: usize, index: usize) -> [Option<usize>; 8] {
    let len = rows * cols;
    if index >= len {
        return [None; 8];
    }
    let col = index % cols;
    let has_left = col != 0;
    let has_right = col != cols - 1;

    let above = index.checked_sub(cols);
    let below = Some(index + cols).filter(|&i| i < len);
    let left_of = |i: Option<usize>| i.filter(|_| has_left).map(|i| i - 1);
    let right_of = |i: Option<usize>| i.filter(|_| has_right).map(|i| i + 1);

    [
        left_of(above),
        above,
        right_of(above),
        left_of(Some(index)),
        right_of(Some(index)),
        left_of(below),
        below,
        right_of(below),
    ]
}

/// Count live neighbors of `index` in a row-major buffer, without wrapping at the edges.
///
/// # Panics
/// If `cells.len() != rows * cols` or `index` is not a valid cell.
pub fn count_live_neighbors(cells: &[bool], rows: usize, cols: usize, index: usize) -> u8 {
    assert_eq!(
        cells.len(),
        rows * cols,
        "grid holds {} cells but dimensions are {}x{}",
        cells.len(),
        rows,
        cols
    );
    assert!(
        index < cells.len(),
        "index {} outside a grid of {} cells",
        index,
        cells.len()
    );

    neighbor_indices(rows, cols, index)
        .iter()
        .flatten()
        .filter(|&&i| cells[i])
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[usize]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &i in alive {
            grid.set(i, true);
        }
        grid
    }

    #[test]
    fn test_create_grid() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.len(), 24);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_from_cells_rejects_mismatch() {
        let err = Grid::from_cells(3, 3, vec![false; 8]).unwrap_err();
        assert_eq!(
            err,
            LifeError::DimensionMismatch {
                expected: 9,
                actual: 8
            }
        );
        assert!(Grid::from_cells(3, 3, vec![false; 9]).is_ok());
    }

    #[test]
    fn test_index_and_position_agree() {
        let cols = 7;
        for index in 0..35 {
            let (row, col) = position_of(cols, index);
            assert_eq!(index_of(cols, row, col), index);
        }
        assert_eq!(position_of(7, 13), (1, 6));
        assert!(in_bounds(5, 7, 4, 6));
        assert!(!in_bounds(5, 7, 5, 0));
        assert!(!in_bounds(5, 7, 0, 7));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.set(4, true));
        assert!(!grid.get(4));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_count_neighbors_center() {
        // Fill a 5x5 grid completely; the center sees all 8 and never itself.
        let grid = Grid::from_cells(5, 5, vec![true; 25]).unwrap();
        assert_eq!(grid.count_live_neighbors(12), 8);
    }

    #[test]
    fn test_count_neighbors_edges_and_corners() {
        let grid = Grid::from_cells(4, 5, vec![true; 20]).unwrap();
        assert_eq!(grid.count_live_neighbors(0), 3);
        assert_eq!(grid.count_live_neighbors(4), 3);
        assert_eq!(grid.count_live_neighbors(15), 3);
        assert_eq!(grid.count_live_neighbors(19), 3);
        assert_eq!(grid.count_live_neighbors(2), 5);
        assert_eq!(grid.count_live_neighbors(5), 5);
        assert_eq!(grid.count_live_neighbors(9), 5);
    }

    #[test]
    fn test_no_wrap_across_rows() {
        // Right column of row 0 alive; column 0 of row 1 must not see it as a left neighbor.
        let grid = grid_with(3, 4, &[3, 7, 11]);
        assert_eq!(grid.count_live_neighbors(4), 0);
        assert_eq!(grid.count_live_neighbors(8), 0);

        // And the reverse: column 0 alive is invisible to the previous row's last column.
        let grid = grid_with(3, 4, &[4, 8]);
        assert_eq!(grid.count_live_neighbors(3), 0);
        assert_eq!(grid.count_live_neighbors(7), 0);
    }

    #[test]
    fn test_neighbor_indices_exclude_self() {
        let (rows, cols) = (4, 4);
        for index in 0..rows * cols {
            let neighbors = neighbor_indices(rows, cols, index);
            let (row, col) = position_of(cols, index);
            for n in neighbors.iter().flatten() {
                assert_ne!(*n, index);
                let (nr, nc) = position_of(cols, *n);
                assert!(nr.abs_diff(row) <= 1 && nc.abs_diff(col) <= 1);
            }
        }
    }

    #[test]
    fn test_neighbor_indices_outside_grid() {
        assert_eq!(neighbor_indices(3, 0, 0), [None; 8]);
        assert_eq!(neighbor_indices(0, 4, 2), [None; 8]);
        assert_eq!(neighbor_indices(2, 2, 4), [None; 8]);
    }

    #[test]
    fn test_single_column_grid() {
        let grid = Grid::from_cells(3, 1, vec![true; 3]).unwrap();
        assert_eq!(grid.count_live_neighbors(0), 1);
        assert_eq!(grid.count_live_neighbors(1), 2);
        assert_eq!(grid.count_live_neighbors(2), 1);
    }

    #[test]
    #[should_panic(expected = "outside a grid")]
    fn test_count_neighbors_index_out_of_range() {
        let grid = Grid::new(2, 2);
        grid.count_live_neighbors(4);
    }

    #[test]
    #[should_panic(expected = "grid holds")]
    fn test_count_neighbors_length_mismatch() {
        count_live_neighbors(&[false; 5], 2, 3, 0);
    }
}
