//! # Grid
//!
//! The validated, immutable grid for the Islet CORE.
//!
//! A [`Grid`] can only be constructed through [`Grid::from_rows`] (or the
//! equivalent `TryFrom` / serde paths), which enforce every structural
//! invariant up front: non-empty, rectangular, binary cells, bounded size.
//! Code holding a `Grid` may therefore index it freely within
//! `rows() x cols()` without re-checking shape.

use crate::primitives::MAX_GRID_CELLS;
use crate::types::{Cell, IsletError};
use serde::{Deserialize, Serialize};

// =============================================================================
// GRID
// =============================================================================

/// A rectangular grid of land/water cells, stored row-major.
///
/// Serialization uses the external row-of-rows representation
/// (`[[0,1],[1,0]]`), so a grid deserialized from JSON passes through the
/// same validation as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell storage; `cells.len() == rows * cols` always holds.
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from raw 0/1 rows, validating every invariant.
    ///
    /// Validation order: emptiness, per-row emptiness and rectangularity,
    /// total size, cell values. The first violation is returned; no partial
    /// grid is ever produced.
    pub fn from_rows(raw: &[Vec<u8>]) -> Result<Self, IsletError> {
        let rows = raw.len();
        if rows == 0 {
            return Err(IsletError::EmptyGrid);
        }

        let cols = raw[0].len();
        for (row, values) in raw.iter().enumerate() {
            if values.is_empty() {
                return Err(IsletError::EmptyRow { row });
            }
            if values.len() != cols {
                return Err(IsletError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
        }

        let total = rows.saturating_mul(cols);
        if total > MAX_GRID_CELLS {
            return Err(IsletError::GridTooLarge {
                cells: total,
                max: MAX_GRID_CELLS,
            });
        }

        let mut cells = Vec::with_capacity(total);
        for (row, values) in raw.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                match Cell::from_raw(value) {
                    Some(cell) => cells.push(cell),
                    None => return Err(IsletError::InvalidCell { row, col, value }),
                }
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows. Always at least 1.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns. Always at least 1.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Callers stay within `rows() x cols()`; construction guarantees the
    /// backing storage covers exactly that range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row * self.cols + col)
            .copied()
            .unwrap_or(Cell::Water)
    }

    /// Check whether `(row, col)` is a land cell.
    #[must_use]
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_land()
    }

    /// Count the land cells in the grid.
    #[must_use]
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_land()).count()
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = IsletError;

    fn try_from(raw: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&raw)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        (0..grid.rows)
            .map(|row| (0..grid.cols).map(|col| grid.cell(row, col).to_raw()).collect())
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn valid_grid_reports_shape() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.land_count(), 3);
    }

    #[test]
    fn cell_lookup_is_row_major() {
        let grid = Grid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(grid.cell(0, 0), Cell::Water);
        assert_eq!(grid.cell(0, 1), Cell::Land);
        assert_eq!(grid.cell(1, 0), Cell::Land);
        assert!(!grid.is_land(1, 1));
    }

    #[test]
    fn empty_grid_rejected() {
        assert_eq!(Grid::from_rows(&[]), Err(IsletError::EmptyGrid));
    }

    #[test]
    fn empty_row_rejected() {
        // An empty first row fails as EmptyRow, not as a shape mismatch
        assert_eq!(
            Grid::from_rows(&[vec![]]),
            Err(IsletError::EmptyRow { row: 0 })
        );
        assert_eq!(
            Grid::from_rows(&[vec![1], vec![]]),
            Err(IsletError::EmptyRow { row: 1 })
        );
    }

    #[test]
    fn ragged_row_rejected() {
        assert_eq!(
            Grid::from_rows(&[vec![0, 1], vec![1]]),
            Err(IsletError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn non_binary_cell_rejected() {
        assert_eq!(
            Grid::from_rows(&[vec![0, 1], vec![2, 0]]),
            Err(IsletError::InvalidCell {
                row: 1,
                col: 0,
                value: 2
            })
        );
    }

    #[test]
    fn oversized_grid_rejected() {
        // 4097 rows x 4097 cols > MAX_GRID_CELLS; rejected before any
        // cell storage is allocated
        let raw = vec![vec![0u8; 4097]; 4097];
        assert_eq!(
            Grid::from_rows(&raw),
            Err(IsletError::GridTooLarge {
                cells: 4097 * 4097,
                max: MAX_GRID_CELLS
            })
        );
    }

    #[test]
    fn serde_round_trip_preserves_grid() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![1, 1, 0]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,1,0],[1,1,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn serde_rejects_malformed_grid() {
        let ragged: Result<Grid, _> = serde_json::from_str("[[0,1],[1]]");
        assert!(ragged.is_err());
        let non_binary: Result<Grid, _> = serde_json::from_str("[[0,3]]");
        assert!(non_binary.is_err());
    }
}
