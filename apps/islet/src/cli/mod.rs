//! # Islet CLI Module
//!
//! This module implements the CLI interface for Islet.
//!
//! ## Available Commands
//!
//! - `perimeter` - Compute the island perimeter of a grid file
//! - `validate` - Check a grid file for shape and value errors

mod commands;

use clap::{Parser, Subcommand};
use islet_core::IsletError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Islet - Island Perimeter Calculator
///
/// Computes the perimeter of the island (connected land cells) embedded in a
/// rectangular 0/1 grid. Land sides facing water or the grid boundary count;
/// nothing else does.
#[derive(Parser, Debug)]
#[command(name = "islet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the island perimeter of a grid
    Perimeter {
        /// Path to the input file ("-" reads stdin)
        #[arg(short, long)]
        file: PathBuf,

        /// Input format (json, text)
        #[arg(short = 't', long, default_value = "json")]
        format: String,
    },

    /// Validate a grid file without computing the perimeter
    Validate {
        /// Path to the input file ("-" reads stdin)
        #[arg(short, long)]
        file: PathBuf,

        /// Input format (json, text)
        #[arg(short = 't', long, default_value = "json")]
        format: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), IsletError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Perimeter { file, format } => cmd_perimeter(&file, &format, json_mode),
        Commands::Validate { file, format } => cmd_validate(&file, &format, json_mode),
    }
}
