//! # Perimeter Engine
//!
//! The single linear scan at the heart of the Islet CORE.
//!
//! Each land cell exposes one unit of perimeter for every orthogonal side
//! that faces water or the outside of the grid. Water cells contribute
//! nothing. Cells are independent, so the result does not depend on scan
//! order and no connectivity analysis is required.

use crate::grid::Grid;

// =============================================================================
// PERIMETER SCAN
// =============================================================================

/// Compute the perimeter of the island embedded in `grid`.
///
/// Scans every cell in row-major order; for each land cell, each of the four
/// orthogonal directions adds 1 if it falls outside the grid bounds or faces
/// a water cell. The bounds check short-circuits before any neighbor lookup,
/// so no out-of-range access ever occurs.
///
/// The grid's single-island assumption is not required: disconnected land
/// cells are simply summed per cell.
#[must_use]
pub fn island_perimeter(grid: &Grid) -> u64 {
    let mut perimeter: u64 = 0;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_land(row, col) {
                perimeter += exposed_sides(grid, row, col);
            }
        }
    }

    perimeter
}

/// Count the exposed sides of the land cell at `(row, col)`.
///
/// A side is exposed when the neighbor in that direction is outside the grid
/// or holds water.
fn exposed_sides(grid: &Grid, row: usize, col: usize) -> u64 {
    let mut sides: u64 = 0;

    // Up
    if row == 0 || !grid.is_land(row - 1, col) {
        sides += 1;
    }
    // Down
    if row == grid.rows() - 1 || !grid.is_land(row + 1, col) {
        sides += 1;
    }
    // Left
    if col == 0 || !grid.is_land(row, col - 1) {
        sides += 1;
    }
    // Right
    if col == grid.cols() - 1 || !grid.is_land(row, col + 1) {
        sides += 1;
    }

    sides
}

// =============================================================================
// TESTS
// =============================================================================
