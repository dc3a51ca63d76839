//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for seeding and stepping the grid,
//! plus bulk region copies. The FFI layer in `ffi/` and the scheduler call
//! these functions.

pub mod controller;
pub mod grid;
pub mod region;
pub mod seeding;
pub mod stepping;

pub use controller::StepController;
pub use grid::{count_live_neighbors, in_bounds, index_of, neighbor_indices, position_of, Grid};
pub use region::extract_region;
pub use seeding::{random_grid, DEFAULT_ALIVE_PROBABILITY};
pub use stepping::{next_generation, par_next_generation, step, Generation, Transition};
