//! Bulk copy of a grid rectangle into a host buffer.

use super::lifecycle::LifeHandle;
use crate::automaton;

/// Extracts a rectangle of cells into a flat buffer.
///
/// Rows `min_row..max_row` and columns `min_col..max_col` (clamped to the
/// grid) are written row-major, one byte per cell: 0 = dead, 1 = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a handle, or null
/// - `out_buf` must point to at least `(max_row - min_row) * (max_col - min_col)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error (null ptr/buffer, empty region)
#[no_mangle]
pub unsafe extern "C" fn la_extract_region(
    ptr: *const LifeHandle,
    out_buf: *mut u8,
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let handle = &*ptr;
    let len = region_len(min_row, min_col, max_row, max_col);
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::extract_region(
        handle.controller.grid(),
        buf_slice,
        min_row as usize,
        min_col as usize,
        max_row as usize,
        max_col as usize,
    ) as u64
}

/// Byte count of the unclamped rectangle the caller promised to provide.
fn region_len(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> usize {
    let rows = max_row.saturating_sub(min_row) as usize;
    let cols = max_col.saturating_sub(min_col) as usize;
    rows * cols
}
