//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the curator binary.

mod benchmark;
mod commands;
mod config;
mod select;

pub use benchmark::match_slug;
pub use commands::{Cli, Commands};
pub use config::validate_config;
pub use select::{SelectionArgs, run_selection};
