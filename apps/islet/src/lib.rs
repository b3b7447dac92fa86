//! # Islet Binary Crate
//!
//! Library surface of the Islet application: the CLI definition and the
//! input-format loaders. The binary in `main.rs` is a thin shell over this
//! so that the loaders and report types stay testable.

pub mod cli;
pub mod input;
