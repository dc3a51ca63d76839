//! Core simulation state owned by the driver.

use crate::automaton::grid::Grid;
use crate::automaton::stepping::{self, Transition};

/// The state of a running automaton: the current grid and how many steps produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    pub grid: Grid,
    pub generation: u64,
}

impl Simulation {
    /// Start a simulation at generation 0 from an initial grid.
    pub fn new(grid: Grid) -> Self {
        Simulation {
            grid,
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Advance one generation in place.
    pub fn step(&mut self) -> Vec<Transition> {
        stepping::step(self)
    }
}
