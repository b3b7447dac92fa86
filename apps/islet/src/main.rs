//! # Islet - Island Perimeter Calculator
//!
//! The main binary for the Islet deterministic perimeter engine.
//!
//! This application provides:
//! - Grid loading from JSON or text files (or stdin)
//! - Perimeter computation via `islet-core`
//! - A validation-only mode for checking grid files
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              apps/islet (THE BINARY)         │
//! │                                              │
//! │   ┌─────────────┐      ┌────────────────┐    │
//! │   │   CLI       │      │  Input Loaders │    │
//! │   │  (clap)     │      │  (json / text) │    │
//! │   └──────┬──────┘      └───────┬────────┘    │
//! │          └───────────┬─────────┘             │
//! │                      ▼                       │
//! │              ┌───────────────┐               │
//! │              │  islet-core   │               │
//! │              │  (THE LOGIC)  │               │
//! │              └───────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Compute a perimeter from a JSON grid
//! islet perimeter -f grid.json
//!
//! # Text format, machine-readable output
//! islet --json-mode perimeter -f grid.txt -t text
//!
//! # Shape/value check only
//! islet validate -f grid.json
//! ```

use clap::Parser;
use islet::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — ISLET_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("ISLET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "islet=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner (suppressed in JSON mode to keep output parseable)
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Islet startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗███████╗██╗     ███████╗████████╗
  ██║██╔════╝██║     ██╔════╝╚══██╔══╝
  ██║███████╗██║     █████╗     ██║
  ██║╚════██║██║     ██╔══╝     ██║
  ██║███████║███████╗███████╗   ██║
  ╚═╝╚══════╝╚══════╝╚══════╝   ╚═╝

  Island Perimeter Calculator v{}

  Deterministic • Validated • Exact
"#,
        env!("CARGO_PKG_VERSION")
    );
}
