//! Declaration side of the pipeline
//!
//! A [`RawDeclaration`] holds the seven named fields exactly as they were
//! written; [`validate`] checks them and produces an immutable [`Alphabet`]
//! that the grammar compiler consumes.

mod alphabet;
mod declaration;
mod symbols;
mod validate;

pub use alphabet::{Alphabet, PredicateSymbol};
pub use declaration::{DeclarationEntry, RawDeclaration};
pub use validate::validate;
