//! Foundation types for the folcfg toolchain.
//!
//! This module provides the primitives shared by every later stage:
//! - [`Field`] - The seven named fields of an alphabet declaration
//! - [`Position`] - Line/column locations inside a declaration file
//! - Domain constants (punctuation, field cardinalities, default file names)
//!
//! This module has NO dependencies on other folcfg modules.

pub mod constants;
mod field;
mod position;

pub use field::Field;
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
