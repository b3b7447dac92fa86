//! # Innate Primitives
//!
//! Hardcoded constants for the Islet CORE.
//!
//! These values are compiled into the binary and are immutable at runtime.

/// Raw cell value representing water.
pub const RAW_WATER: u8 = 0;

/// Raw cell value representing land.
pub const RAW_LAND: u8 = 1;

/// Number of orthogonal sides a single cell has.
///
/// - Each land cell can expose at most this many sides.
/// - Diagonal adjacency does not exist in this model.
pub const SIDES_PER_CELL: u64 = 4;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of cells in a single grid.
///
/// Grids larger than this (16M cells) will be rejected at construction.
/// This prevents memory exhaustion from malicious or malformed input.
pub const MAX_GRID_CELLS: usize = 16_777_216;
