//! # Input Loaders
//!
//! Parsers that turn raw file contents into a validated [`Grid`].
//!
//! Two formats are supported:
//! - `json`: an array of arrays of 0/1 integers, e.g. `[[0,1],[1,1]]`
//! - `text`: lines of `0`/`1` characters, one row per line; blank lines
//!   and surrounding whitespace are ignored
//!
//! Both paths end in the same grid validation, so a malformed grid is
//! rejected identically regardless of how it arrived.

use islet_core::{Grid, IsletError};

// =============================================================================
// FORMAT PARSERS
// =============================================================================

/// Parse a JSON row-of-rows grid.
pub fn grid_from_json(input: &str) -> Result<Grid, IsletError> {
    serde_json::from_str(input)
        .map_err(|e| IsletError::ParseError(format!("invalid JSON grid: {}", e)))
}

/// Parse a text grid: one row per line, `0`/`1` characters only.
pub fn grid_from_text(input: &str) -> Result<Grid, IsletError> {
    let mut raw: Vec<Vec<u8>> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            match ch {
                '0' => row.push(0),
                '1' => row.push(1),
                _ => {
                    return Err(IsletError::ParseError(format!(
                        "line {}: unexpected character '{}', expected '0' or '1'",
                        idx + 1,
                        ch
                    )));
                }
            }
        }
        raw.push(row);
    }

    Grid::from_rows(&raw)
}

/// Parse `input` according to a named format (`json` or `text`).
pub fn grid_from_str(input: &str, format: &str) -> Result<Grid, IsletError> {
    match format {
        "json" => grid_from_json(input),
        "text" => grid_from_text(input),
        other => Err(IsletError::ParseError(format!(
            "unknown input format '{}', expected 'json' or 'text'",
            other
        ))),
    }
}

// =============================================================================
// TESTS
// =============================================================================
