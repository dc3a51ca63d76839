//! Cell access, stepping, and per-step output.

use super::lifecycle::LifeHandle;
use crate::display::DisplayCategory;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// The cell's display category is reset to the steady one for its new state,
/// and the last step's transitions are discarded.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// Out-of-range indices are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn la_set_cell(ptr: *mut LifeHandle, index: u32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let handle = &mut *ptr;
    let index = index as usize;
    if index >= handle.controller.grid().len() {
        return;
    }

    let grid = handle.controller.grid_mut();
    grid.set(index, alive != 0);
    handle.display.resync(grid, [index]);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// # Returns
/// 0 if out of range, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn la_get_cell(ptr: *const LifeHandle, index: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).controller.grid().get(index as usize) as u8
}

/// Counts live neighbors of a cell, without wrapping at the edges.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// # Returns
/// 0..=8, or 0 if out of range or null pointer.
#[no_mangle]
pub unsafe extern "C" fn la_count_neighbors(ptr: *const LifeHandle, index: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let grid = (*ptr).controller.grid();
    let index = index as usize;
    if index >= grid.len() {
        return 0;
    }
    grid.count_live_neighbors(index)
}

/// Advances the automaton by one generation (B3/S23, edge-bounded).
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// # Returns
/// Number of cells that changed state, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn la_step(ptr: *mut LifeHandle) -> u32 {
    if ptr.is_null() {
        return 0;
    }

    let handle = &mut *ptr;
    let transitions = handle.controller.step();
    handle.display.apply(transitions);
    transitions.len() as u32
}

/// Copies the last step's transitions into caller buffers.
///
/// Nothing is reported after a host edit until the next `la_step`.
///
/// `out_indices[i]` receives the flat index and `out_alive[i]` 1 if the cell
/// was born or 0 if it died. At most `capacity` records are written.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
/// - `out_indices` and `out_alive` must each point to at least `capacity` elements
///
/// # Returns
/// Number of records written, or 0 on null pointers.
#[no_mangle]
pub unsafe extern "C" fn la_get_transitions(
    ptr: *const LifeHandle,
    out_indices: *mut u32,
    out_alive: *mut u8,
    capacity: u32,
) -> u32 {
    if ptr.is_null() || out_indices.is_null() || out_alive.is_null() {
        return 0;
    }

    let transitions = (*ptr).controller.last_transitions();
    let count = transitions.len().min(capacity as usize);
    let indices = std::slice::from_raw_parts_mut(out_indices, count);
    let alive = std::slice::from_raw_parts_mut(out_alive, count);

    for (i, transition) in transitions.iter().take(count).enumerate() {
        indices[i] = transition.index as u32;
        alive[i] = transition.became_alive as u8;
    }

    count as u32
}

/// Gets the display category code of a cell: 0 dead, 1 dying, 2 alive, 3 born.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// # Returns
/// The category code, or 0 (dead) if out of range or null pointer.
#[no_mangle]
pub unsafe extern "C" fn la_get_display(ptr: *const LifeHandle, index: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr)
        .display
        .get(index as usize)
        .unwrap_or(DisplayCategory::Dead)
        .code()
}
