//! # folcfg
//!
//! Derives a context-free grammar from a first-order-logic alphabet
//! declaration and decides whether a formula belongs to its language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis    → End-to-end pipeline, one diagnostic per run
//!   ↓
//! render      → RenderNode label trees, Graphviz DOT text
//!   ↓
//! project     → Declaration files on disk
//!   ↓
//! diagnostics → Diagnostic events, DiagnosticSink
//!   ↓
//! errors      → ErrorCode and per-phase error types
//!   ↓
//! parser      → Grammar compiler, logos formula lexer, recursive descent
//!   ↓
//! syntax      → RawDeclaration, Alphabet, validation
//!   ↓
//! base        → Constants, Field, Position, TextRange
//! ```
//!
//! ## Example
//!
//! ```
//! use folcfg::{Diagnostic, RawDeclaration, analyze};
//!
//! let declaration = RawDeclaration::new()
//!     .with("variables", "x y")
//!     .with("constants", "a")
//!     .with("predicates", "P[2]")
//!     .with("equality", "=")
//!     .with("connectives", "\\land \\lor \\implies \\iff \\neg")
//!     .with("quantifiers", "\\exists \\forall")
//!     .with("formula", "P(x,y)");
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let analysis = analyze(&declaration, &mut diagnostics).unwrap();
//! assert_eq!(analysis.derivation.tree.leaves(), ["P", "(", "x", ",", "y", ")"]);
//! assert!(diagnostics[0].is_success());
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → errors → diagnostics
//          → project → render → analysis)
// ============================================================================

/// Foundation types: constants, Field, Position, TextRange
pub mod base;

/// Declaration side: RawDeclaration, Alphabet, validator
pub mod syntax;

/// Formula side: Grammar, lexer, derivation tree, parser
pub mod parser;

/// Error codes and error types for every phase
pub mod errors;

/// Diagnostic events and sinks
pub mod diagnostics;

/// Declaration file loading
pub mod project;

/// Tree rendering: RenderNode, DOT
pub mod render;

/// The validate → compile → tokenize → parse pipeline
pub mod analysis;

pub use analysis::{Analysis, Derivation, analyze, derive_formula};
pub use base::{Field, Position, TextRange, TextSize};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use errors::{Error, ErrorCode, LexError, ParseError, SyntaxError, ValidationError};
pub use parser::{DerivationTree, Grammar, NonTerminal, Parse, TokenStream, compile, parse, tokenize};
pub use project::{LoadError, load_declaration, parse_declaration};
pub use render::{RenderNode, RenderOptions, to_dot};
pub use syntax::{Alphabet, PredicateSymbol, RawDeclaration, validate};
