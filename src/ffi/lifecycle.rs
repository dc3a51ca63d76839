//! Handle creation, destruction, seeding, and dimension queries.

use log::warn;

use crate::automaton::controller::StepController;
use crate::automaton::grid::Grid;
use crate::automaton::seeding::random_grid;
use crate::display::DisplayMap;

/// Opaque handle given to hosts: the stepping controller plus the display state it feeds.
pub struct LifeHandle {
    pub controller: StepController,
    pub display: DisplayMap,
}

impl LifeHandle {
    fn new(grid: Grid) -> Option<Self> {
        let display = DisplayMap::new(&grid);
        match StepController::new(grid, 1) {
            Ok(controller) => Some(LifeHandle {
                controller,
                display,
            }),
            Err(e) => {
                warn!("la_create: {}", e);
                None
            }
        }
    }

    /// Swap in a new grid, resetting generation and display state.
    pub(crate) fn reset(&mut self, grid: Grid) {
        self.display = DisplayMap::new(&grid);
        self.controller.reset(grid);
    }
}

/// Creates an all-dead `rows` x `cols` automaton and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new handle, or null if either dimension is zero.
///
/// # Safety
/// The returned pointer must eventually be freed with `la_destroy()`.
#[no_mangle]
pub extern "C" fn la_create(rows: u32, cols: u32) -> *mut LifeHandle {
    if rows == 0 || cols == 0 {
        warn!("la_create: refusing {}x{} grid", rows, cols);
        return std::ptr::null_mut();
    }

    match LifeHandle::new(Grid::new(rows as usize, cols as usize)) {
        Some(handle) => Box::into_raw(Box::new(handle)),
        None => std::ptr::null_mut(),
    }
}

/// Destroys a handle and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `la_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn la_destroy(ptr: *mut LifeHandle) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Re-seeds every cell: alive with `probability`.
///
/// When `has_seed` is non-zero the draw is reproducible from `seed`;
/// otherwise OS entropy is used. Generation resets to 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or probability outside [0, 1])
#[no_mangle]
pub unsafe extern "C" fn la_seed(
    ptr: *mut LifeHandle,
    probability: f64,
    seed: u64,
    has_seed: u8,
) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let handle = &mut *ptr;
    let grid = handle.controller.grid();
    let seed = if has_seed != 0 { Some(seed) } else { None };

    match random_grid(grid.rows(), grid.cols(), probability, seed) {
        Ok(grid) => {
            handle.reset(grid);
            0
        }
        Err(e) => {
            warn!("la_seed: {}", e);
            1
        }
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn la_get_generation(ptr: *const LifeHandle) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).controller.generation()
}

/// Number of rows, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
#[no_mangle]
pub unsafe extern "C" fn la_rows(ptr: *const LifeHandle) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).controller.grid().rows() as u32
}

/// Number of columns, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
#[no_mangle]
pub unsafe extern "C" fn la_cols(ptr: *const LifeHandle) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).controller.grid().cols() as u32
}
