//! Whole-grid stepping on a dedicated worker pool.
//!
//! The controller owns the simulation and a rayon pool (one thread unless
//! configured otherwise). Each `step` blocks the caller until the next grid is
//! complete, then swaps it in, so callers always observe a whole generation.

use log::{debug, info};

use super::grid::Grid;
use super::stepping::{par_next_generation, Transition};
use crate::error::{LifeError, Result};
use crate::state::Simulation;

/// Drives a [`Simulation`] one generation at a time and remembers the last step's changes.
pub struct StepController {
    /// The simulation being stepped.
    pub simulation: Simulation,

    /// Cells that changed during the most recent step.
    last_transitions: Vec<Transition>,

    /// Rayon thread pool (1 thread by default).
    thread_pool: rayon::ThreadPool,
}

impl StepController {
    /// Create a controller over an initial grid with `num_threads` workers (0 means 1).
    pub fn new(grid: Grid, num_threads: usize) -> Result<Self> {
        Self::from_simulation(Simulation::new(grid), num_threads)
    }

    /// Create a controller from an existing simulation.
    pub fn from_simulation(simulation: Simulation, num_threads: usize) -> Result<Self> {
        let num_threads = num_threads.max(1);
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("life-step-{}", i))
            .build()
            .map_err(|e| LifeError::ThreadPool(e.to_string()))?;

        info!(
            "step controller ready: {}x{} grid, {} worker thread(s)",
            simulation.rows(),
            simulation.cols(),
            num_threads
        );

        Ok(StepController {
            simulation,
            last_transitions: Vec::new(),
            thread_pool,
        })
    }

    /// Extract the inner simulation.
    pub fn into_simulation(self) -> Simulation {
        self.simulation
    }

    pub fn generation(&self) -> u64 {
        self.simulation.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.simulation.grid
    }

    pub fn threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Mutable access for edits made outside the step loop.
    ///
    /// The last step's transitions no longer describe the grid after an edit,
    /// so they are discarded.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.last_transitions.clear();
        &mut self.simulation.grid
    }

    /// Transitions produced by the most recent step (empty before the first or after an edit).
    pub fn last_transitions(&self) -> &[Transition] {
        &self.last_transitions
    }

    /// Replace the grid from outside the step loop. Resets the generation counter.
    pub fn reset(&mut self, grid: Grid) {
        self.simulation = Simulation::new(grid);
        self.last_transitions.clear();
    }

    /// Compute the next generation on the pool and swap it in.
    pub fn step(&mut self) -> &[Transition] {
        let grid = &self.simulation.grid;
        let (rows, cols) = (grid.rows(), grid.cols());
        let (cells, transitions) = self
            .thread_pool
            .install(|| par_next_generation(grid.cells(), rows, cols));

        self.simulation.grid = Grid::from_raw(rows, cols, cells);
        self.simulation.generation += 1;
        self.last_transitions = transitions;

        debug!(
            "generation {}: {} transitions, population {}",
            self.simulation.generation,
            self.last_transitions.len(),
            self.simulation.grid.population()
        );

        &self.last_transitions
    }
}
