//! Command implementations for the CLI.
//!
//! Each module contains the full implementation for a command,
//! which can be invoked by a thin wrapper binary.

pub mod completions;
pub mod generate;
