//! Error handling module
//!
//! This module provides the error taxonomy shared by every phase:
//! - Categorized error codes for filtering and log output
//! - Validation errors (fail-fast, raised before grammar compilation)
//! - Lexical errors for malformed punctuation in formula words
//! - Syntax errors carrying the offending token and its stream position

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{
    DeclarationDefect, Error, Expected, LexError, ParseError, SyntaxError, ValidationError,
};
