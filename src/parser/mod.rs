//! Grammar compilation, formula lexing and parsing
//!
//! ## Architecture
//!
//! ```text
//! Alphabet (validated)
//!     ↓
//! compile → Grammar (nine nonterminals, tagged alternatives)
//!     ↓
//! Lexer (logos) → TokenStream
//!     ↓
//! parse → DerivationTree (arena) or ParseError
//! ```
//!
//! The grammar is immutable once compiled and is shared by reference
//! between the lexer, which needs its terminal set, and the parser.

#[allow(clippy::module_inception)]
mod parser;

pub mod grammar;
mod lexer;
mod tree;

pub use grammar::{Alternative, Grammar, NonTerminal, Symbol, compile};
pub use lexer::{Lexer, Token, TokenStream, tokenize};
pub use parser::{Parse, parse};
pub use tree::{DerivationTree, NodeId, NodeLabel};
