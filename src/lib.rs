//! Life Automata - Conway's Game of Life engine
//!
//! A flat, row-major grid of life-states stepped with the fixed B3/S23
//! rules and edge-bounded (non-wrapping) neighborhoods. Each step reports the
//! cells that flipped so a presentation layer can redraw only those.
//!
//! - `automaton` - grid, neighbor counting, stepping, seeding, controller
//! - `display` - DEAD/DYING/ALIVE/BORN categories derived from transitions
//! - `scheduler` - fixed-cadence driver loop with cancellation
//! - `ffi` - C ABI for hosts that own the drawing surface

pub mod automaton;
pub mod config;
pub mod display;
pub mod error;
pub mod ffi;
pub mod scheduler;
pub mod state;
pub mod terminal;
pub mod viewport;


pub use automaton::{Grid, StepController, Transition};
pub use config::LifeConfig;
pub use display::{DisplayCategory, DisplayMap};
pub use error::{LifeError, Result};
pub use scheduler::{CancelToken, Renderer, Scheduler};
pub use state::Simulation;
pub use viewport::Viewport;
