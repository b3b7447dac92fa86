//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::input;
use islet_core::{Grid, IsletError, island_perimeter};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum input file size (64 MB).
///
/// Grid files are tiny in practice; anything near this limit is malformed
/// or malicious, and is rejected before being read into memory.
const MAX_INPUT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), IsletError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| IsletError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(IsletError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input file path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it names
/// a regular file, so path traversal cannot reach unexpected locations.
fn validate_file_path(path: &Path) -> Result<PathBuf, IsletError> {
    let canonical = path.canonicalize().map_err(|e| {
        IsletError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(IsletError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

// =============================================================================
// GRID LOADING
// =============================================================================

/// Read the raw contents of `path`, where `-` means stdin.
fn read_input(path: &Path) -> Result<String, IsletError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| IsletError::IoError(format!("Cannot read stdin: {}", e)))?;
        return Ok(buf);
    }

    let canonical = validate_file_path(path)?;
    validate_file_size(&canonical, MAX_INPUT_FILE_SIZE)?;

    std::fs::read_to_string(&canonical)
        .map_err(|e| IsletError::IoError(format!("Cannot read '{}': {}", path.display(), e)))
}

/// Load and validate a grid from `path` in the given format.
pub fn load_grid(path: &Path, format: &str) -> Result<Grid, IsletError> {
    let contents = read_input(path)?;
    let grid = input::grid_from_str(&contents, format)?;

    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        land = grid.land_count(),
        "grid loaded"
    );

    Ok(grid)
}

// =============================================================================
// REPORTS
// =============================================================================

/// Machine-readable result of a perimeter computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerimeterReport {
    /// Grid row count.
    pub rows: usize,
    /// Grid column count.
    pub cols: usize,
    /// Number of land cells in the grid.
    pub land_cells: usize,
    /// The computed perimeter.
    pub perimeter: u64,
}

impl PerimeterReport {
    /// Compute the full report for a validated grid.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            land_cells: grid.land_count(),
            perimeter: island_perimeter(grid),
        }
    }
}

/// Machine-readable result of a validation-only run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Always `true` for an emitted report; errors abort before emission.
    pub valid: bool,
    /// Grid row count.
    pub rows: usize,
    /// Grid column count.
    pub cols: usize,
    /// Number of land cells in the grid.
    pub land_cells: usize,
}

impl ValidationReport {
    /// Build the report for a grid that already passed validation.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            valid: true,
            rows: grid.rows(),
            cols: grid.cols(),
            land_cells: grid.land_count(),
        }
    }
}

fn to_json<T: Serialize>(report: &T) -> Result<String, IsletError> {
    serde_json::to_string_pretty(report).map_err(|e| IsletError::SerializationError(e.to_string()))
}

// =============================================================================
// PERIMETER COMMAND
// =============================================================================

/// Compute and print the island perimeter of a grid file.
pub fn cmd_perimeter(file: &Path, format: &str, json_mode: bool) -> Result<(), IsletError> {
    let grid = load_grid(file, format)?;
    let report = PerimeterReport::from_grid(&grid);

    if json_mode {
        println!("{}", to_json(&report)?);
    } else {
        println!("Grid:      {} x {}", report.rows, report.cols);
        println!("Land:      {} cells", report.land_cells);
        println!("Perimeter: {}", report.perimeter);
    }

    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Validate a grid file and print its shape; no perimeter is computed.
pub fn cmd_validate(file: &Path, format: &str, json_mode: bool) -> Result<(), IsletError> {
    let grid = load_grid(file, format)?;
    let report = ValidationReport::from_grid(&grid);

    if json_mode {
        println!("{}", to_json(&report)?);
    } else {
        println!("Valid grid: {} x {}", report.rows, report.cols);
        println!("Land:       {} cells", report.land_cells);
    }

    Ok(())
}
