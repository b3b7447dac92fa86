//! # Property-Based Tests
//!
//! Verification tests using proptest.
//!
//! These tests ensure determinism and the structural invariants of the
//! perimeter scan. Several properties compare the scan against an
//! independent oracle (the land/adjacency identity) rather than re-running
//! the same algorithm.

#![allow(clippy::unwrap_used, clippy::panic)]

use islet_core::{Grid, island_perimeter};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Arbitrary rectangular raw grid of 0/1 cells, up to 16x16.
fn raw_grid() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(rows, cols)| {
        vec(vec(0u8..=1, cols..=cols), rows..=rows)
    })
}

/// Transpose a raw grid (valid because inputs are rectangular).
fn transpose(raw: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let cols = raw[0].len();
    (0..cols)
        .map(|col| raw.iter().map(|row| row[col]).collect())
        .collect()
}

/// Count orthogonally adjacent land-cell pairs (horizontal + vertical).
fn adjacent_land_pairs(raw: &[Vec<u8>]) -> u64 {
    let rows = raw.len();
    let cols = raw[0].len();
    let mut pairs = 0u64;
    for r in 0..rows {
        for c in 0..cols {
            if raw[r][c] == 1 {
                if c + 1 < cols && raw[r][c + 1] == 1 {
                    pairs += 1;
                }
                if r + 1 < rows && raw[r + 1][c] == 1 {
                    pairs += 1;
                }
            }
        }
    }
    pairs
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Same grid scanned twice yields the same perimeter.
    #[test]
    fn determinism_repeated_scans_agree(raw in raw_grid()) {
        let grid = Grid::from_rows(&raw).unwrap();
        prop_assert_eq!(island_perimeter(&grid), island_perimeter(&grid));
    }

    /// The scan matches the independent identity
    /// perimeter == 4 * land_cells - 2 * adjacent_land_pairs.
    #[test]
    fn matches_adjacency_identity(raw in raw_grid()) {
        let grid = Grid::from_rows(&raw).unwrap();
        let land = grid.land_count() as u64;
        let expected = 4 * land - 2 * adjacent_land_pairs(&raw);
        prop_assert_eq!(island_perimeter(&grid), expected);
    }

    /// Perimeter is always even: every exposed side of the land region is
    /// matched by an opposite exposed side along any axis-aligned sweep.
    #[test]
    fn perimeter_is_even(raw in raw_grid()) {
        let grid = Grid::from_rows(&raw).unwrap();
        prop_assert_eq!(island_perimeter(&grid) % 2, 0);
    }

    /// Perimeter never exceeds four sides per land cell.
    #[test]
    fn bounded_by_four_per_land_cell(raw in raw_grid()) {
        let grid = Grid::from_rows(&raw).unwrap();
        prop_assert!(island_perimeter(&grid) <= 4 * grid.land_count() as u64);
    }

    /// Cell contributions are independent of traversal order, so the result
    /// is symmetric under transposition.
    #[test]
    fn invariant_under_transpose(raw in raw_grid()) {
        let grid = Grid::from_rows(&raw).unwrap();
        let flipped = Grid::from_rows(&transpose(&raw)).unwrap();
        prop_assert_eq!(island_perimeter(&grid), island_perimeter(&flipped));
    }

    /// Symmetric under horizontal mirroring for the same reason.
    #[test]
    fn invariant_under_mirror(raw in raw_grid()) {
        let grid = Grid::from_rows(&raw).unwrap();
        let mirrored: Vec<Vec<u8>> = raw
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        let mirrored = Grid::from_rows(&mirrored).unwrap();
        prop_assert_eq!(island_perimeter(&grid), island_perimeter(&mirrored));
    }

    /// All-water grids of any shape have perimeter 0.
    #[test]
    fn all_water_is_zero(rows in 1usize..=24, cols in 1usize..=24) {
        let raw = vec![vec![0u8; cols]; rows];
        let grid = Grid::from_rows(&raw).unwrap();
        prop_assert_eq!(island_perimeter(&grid), 0);
    }

    /// A single land cell anywhere exposes exactly four sides.
    #[test]
    fn lone_cell_is_four(rows in 1usize..=24, cols in 1usize..=24, seed in any::<u64>()) {
        let r = (seed as usize) % rows;
        let c = (seed as usize / rows.max(1)) % cols;
        let mut raw = vec![vec![0u8; cols]; rows];
        raw[r][c] = 1;
        let grid = Grid::from_rows(&raw).unwrap();
        prop_assert_eq!(island_perimeter(&grid), 4);
    }

    /// A fully-land R x C grid has perimeter 2 * (R + C): only boundary
    /// sides are exposed.
    #[test]
    fn filled_rectangle_formula(rows in 1usize..=24, cols in 1usize..=24) {
        let raw = vec![vec![1u8; cols]; rows];
        let grid = Grid::from_rows(&raw).unwrap();
        prop_assert_eq!(island_perimeter(&grid), 2 * (rows as u64 + cols as u64));
    }
}
