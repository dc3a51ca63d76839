//! C FFI layer for embedding hosts.
//!
//! Hosts that own the presentation surface (a browser via wasm, a game
//! engine, a scripting runtime) drive the automaton through these
//! functions. All are `#[no_mangle]` and `extern "C"`.
//!
//! The actual logic is in the `automaton` and `display` modules. These
//! functions are thin wrappers that handle null checks, pointer safety,
//! and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod region;

pub use grid::{
    la_count_neighbors, la_get_cell, la_get_display, la_get_transitions, la_set_cell, la_step,
};
pub use lifecycle::{la_cols, la_create, la_destroy, la_get_generation, la_rows, la_seed, LifeHandle};
pub use region::la_extract_region;
