//! Error types for the Curator selection engine.
//!
//! This crate provides the foundation error types used throughout the Curator workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Only two conditions abort a selection: an out-of-range complexity score
//! and an empty candidate pool. Everything else in the engine degrades to a
//! fallback value instead of producing an error.
//!
//! # Examples
//!
//! ```
//! use curator_error::{CuratorResult, SelectionError, SelectionErrorKind};
//!
//! fn pick() -> CuratorResult<String> {
//!     Err(SelectionError::new(SelectionErrorKind::NoCandidates))?
//! }
//!
//! match pick() {
//!     Ok(id) => println!("Selected: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod input;
mod selection;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{CuratorError, CuratorErrorKind, CuratorResult};
pub use input::{InputError, InputErrorKind};
pub use selection::{SelectionError, SelectionErrorKind, SelectionResult};
