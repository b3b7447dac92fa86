//! # Core Type Definitions
//!
//! This module contains the core types for the Islet deterministic perimeter
//! engine:
//! - Cell representation (`Cell`)
//! - Error types (`IsletError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering
//! - Carry no hidden state; a `Cell` is exactly one of two values

use crate::primitives::{RAW_LAND, RAW_WATER};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CELL
// =============================================================================

/// A single grid cell: water (0) or land (1).
///
/// Raw input uses `u8`; anything outside {0, 1} is rejected during grid
/// construction with [`IsletError::InvalidCell`], so a `Cell` value is
/// binary by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Water cell (raw value 0). Contributes nothing to the perimeter.
    Water,
    /// Land cell (raw value 1). Each exposed side contributes 1.
    Land,
}

impl Cell {
    /// Convert a raw input value into a cell.
    ///
    /// Returns `None` for values outside {0, 1}; the caller maps that to
    /// [`IsletError::InvalidCell`] with the offending position.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            RAW_WATER => Some(Self::Water),
            RAW_LAND => Some(Self::Land),
            _ => None,
        }
    }

    /// Get the raw 0/1 value of this cell.
    #[must_use]
    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Water => RAW_WATER,
            Self::Land => RAW_LAND,
        }
    }

    /// Check whether this cell is land.
    #[must_use]
    pub const fn is_land(self) -> bool {
        matches!(self, Self::Land)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Islet system.
///
/// - No silent failures
/// - Use `Result<T, IsletError>` for fallible operations
/// - The CORE never panics; a malformed grid fails fast at construction,
///   before any scan begins
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsletError {
    /// The grid has no rows at all.
    #[error("Grid is empty: at least one row is required")]
    EmptyGrid,

    /// A row has no cells.
    #[error("Row {row} is empty: at least one cell per row is required")]
    EmptyRow {
        /// Zero-based index of the empty row.
        row: usize,
    },

    /// A row's length differs from the first row's length.
    #[error("Row {row} has {found} cells, expected {expected} (grid must be rectangular)")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row, which all rows must match.
        expected: usize,
        /// Actual length of the offending row.
        found: usize,
    },

    /// A cell holds a value outside {0, 1}.
    #[error("Cell ({row}, {col}) holds {value}, expected 0 (water) or 1 (land)")]
    InvalidCell {
        /// Zero-based row of the offending cell.
        row: usize,
        /// Zero-based column of the offending cell.
        col: usize,
        /// The rejected raw value.
        value: u8,
    },

    /// The grid exceeds the maximum supported cell count.
    #[error("Grid has {cells} cells, exceeds maximum {max}")]
    GridTooLarge {
        /// Total cell count of the rejected grid.
        cells: usize,
        /// The configured limit ([`crate::primitives::MAX_GRID_CELLS`]).
        max: usize,
    },

    /// An I/O error occurred (binary only; the CORE performs no I/O).
    #[error("I/O error: {0}")]
    IoError(String),

    /// A serialization error occurred while producing output.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An input file could not be parsed into a raw grid.
    #[error("Parse error: {0}")]
    ParseError(String),
}

// =============================================================================
// TESTS
// =============================================================================
