//! Generation stepping with the fixed B3/S23 rules.
//!
//! Every next-state is computed from the untouched current snapshot and
//! written into a fresh buffer, so evaluation order never matters.

use log::debug;
use rayon::prelude::*;

use super::grid::{count_live_neighbors, Grid};
use crate::state::Simulation;

/// A cell whose life-state flipped during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    pub index: usize,
    /// true = born this step, false = died this step.
    pub became_alive: bool,
}

/// Output of one step: the next grid plus the cells that changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    pub transitions: Vec<Transition>,
}

/// B3/S23: survive on 2 or 3 neighbors, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

fn assert_dimensions(cells: &[bool], rows: usize, cols: usize) {
    assert_eq!(
        cells.len(),
        rows * cols,
        "grid holds {} cells but dimensions are {}x{}",
        cells.len(),
        rows,
        cols
    );
}

/// Transitions for every index where `before` and `after` differ, in index order.
fn diff(before: &[bool], after: &[bool]) -> Vec<Transition> {
    before
        .iter()
        .zip(after)
        .enumerate()
        .filter(|(_, (was, now))| was != now)
        .map(|(index, (_, &now))| Transition {
            index,
            became_alive: now,
        })
        .collect()
}

/// Compute the next generation of a row-major grid.
///
/// Returns the new cells and a transition for each cell that changed.
///
/// # Panics
/// If `cells.len() != rows * cols`.
pub fn next_generation(cells: &[bool], rows: usize, cols: usize) -> (Vec<bool>, Vec<Transition>) {
    assert_dimensions(cells, rows, cols);

    let next: Vec<bool> = (0..cells.len())
        .map(|i| next_state(cells[i], count_live_neighbors(cells, rows, cols, i)))
        .collect();
    let transitions = diff(cells, &next);
    (next, transitions)
}

/// Same result as [`next_generation`], evaluated with rayon's indexed iterator.
///
/// Runs on whichever pool it is called from; `StepController` installs it into its own.
pub fn par_next_generation(
    cells: &[bool],
    rows: usize,
    cols: usize,
) -> (Vec<bool>, Vec<Transition>) {
    assert_dimensions(cells, rows, cols);

    let next: Vec<bool> = (0..cells.len())
        .into_par_iter()
        .map(|i| next_state(cells[i], count_live_neighbors(cells, rows, cols, i)))
        .collect();
    let transitions = diff(cells, &next);
    (next, transitions)
}

impl Grid {
    /// Next generation of this grid; the grid itself is left untouched.
    pub fn next_generation(&self) -> Generation {
        let (cells, transitions) = next_generation(self.cells(), self.rows(), self.cols());
        Generation {
            grid: Grid::from_raw(self.rows(), self.cols(), cells),
            transitions,
        }
    }
}

/// Step the simulation forward by one generation, returning what changed.
pub fn step(sim: &mut Simulation) -> Vec<Transition> {
    let Generation { grid, transitions } = sim.grid.next_generation();
    sim.grid = grid;
    sim.generation += 1;

    debug!(
        "generation {}: {} transitions, population {}",
        sim.generation,
        transitions.len(),
        sim.grid.population()
    );

    transitions
}
