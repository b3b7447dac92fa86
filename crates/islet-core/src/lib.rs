//! # islet-core
//!
//! The deterministic perimeter engine for Islet - THE LOGIC.
//!
//! This crate implements the CORE computation: given a rectangular grid of
//! land (1) and water (0) cells, count the land-cell sides that are exposed
//! to water or to the outside of the grid. That count is the perimeter of
//! the island embedded in the grid.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is pure: no I/O, no mutation of inputs, no observable state
//! - Is deterministic: integer arithmetic only, result independent of scan order
//! - Validates eagerly: a [`Grid`] can only be constructed from well-formed
//!   input, so the scan itself never sees ragged rows or non-binary cells
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod grid;
pub mod perimeter;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Cell, IsletError};

// =============================================================================
// RE-EXPORTS: Grid & Perimeter Engine
// =============================================================================

pub use grid::Grid;
pub use perimeter::island_perimeter;

// =============================================================================
// RE-EXPORTS: Primitives
// =============================================================================

pub use primitives::{MAX_GRID_CELLS, RAW_LAND, RAW_WATER, SIDES_PER_CELL};
