//! Error types for every phase of the pipeline
//!
//! Validation and lexing errors abort before any parse attempt; a
//! [`ParseError`] aborts the derivation at the point of failure.

use smol_str::SmolStr;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::{Field, Position};
use crate::parser::NonTerminal;

/// Why a declaration could not be read as seven named fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationDefect {
    #[error("field `{0}` is missing")]
    MissingField(Field),

    #[error("field `{0}` is declared more than once")]
    DuplicateField(Field),

    #[error("unknown field `{0}`")]
    UnknownField(SmolStr),

    #[error("multiple colons found at {0}")]
    MultipleColons(Position),

    #[error("line at {0} continues a value but no field precedes it")]
    OrphanContinuation(Position),
}

/// Errors raised while turning a raw declaration into an `Alphabet`.
///
/// Validation is fail-fast: only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed declaration: {0}")]
    MalformedDeclaration(DeclarationDefect),

    #[error("{actual} {field} declared instead of {expected}")]
    ArityMismatch {
        field: Field,
        expected: usize,
        actual: usize,
    },

    #[error("{field} symbol `{token}` can only contain {}", allowed_characters(.field))]
    InvalidSymbol { field: Field, token: SmolStr },

    #[error("predicate `{0}` must carry a positive arity marker such as `P[2]`")]
    InvalidPredicateArity(SmolStr),

    #[error("{first} and {second} share the following names: {}", .shared.join(", "))]
    NameCollision {
        first: Field,
        second: Field,
        shared: Vec<SmolStr>,
    },
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedDeclaration(_) => ErrorCode::E0101,
            Self::ArityMismatch { .. } => ErrorCode::E0102,
            Self::InvalidSymbol { .. } => ErrorCode::E0103,
            Self::InvalidPredicateArity(_) => ErrorCode::E0104,
            Self::NameCollision { .. } => ErrorCode::E0105,
        }
    }
}

impl From<DeclarationDefect> for ValidationError {
    fn from(defect: DeclarationDefect) -> Self {
        Self::MalformedDeclaration(defect)
    }
}

fn allowed_characters(field: &Field) -> &'static str {
    match field {
        Field::Equality => "letters, digits, `_`, `\\` or `=`",
        Field::Connectives | Field::Quantifiers => "letters, digits, `_` or `\\`",
        _ => "letters, digits and `_`",
    }
}

/// Malformed punctuation in a formula word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("`{word}` contains `{character}` at offset {offset}, which no symbol may contain")]
    InvalidCharacter {
        word: SmolStr,
        character: char,
        offset: usize,
    },

    #[error("`{word}` has an empty argument at offset {offset}")]
    EmptyArgument { word: SmolStr, offset: usize },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCharacter { .. } => ErrorCode::E0201,
            Self::EmptyArgument { .. } => ErrorCode::E0202,
        }
    }

    /// Byte offset of the offending character in the formula source
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. } | Self::EmptyArgument { offset, .. } => *offset,
        }
    }
}

/// What the parser needed at the point of failure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A specific terminal (`)`, `,`, a predicate name...)
    Terminal(SmolStr),
    /// Any derivation of a nonterminal
    Rule(NonTerminal),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terminal(text) => write!(f, "`{}`", text),
            Self::Rule(rule) => write!(f, "{}", rule.name()),
        }
    }
}

/// A token that could not be matched against any applicable production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: {} at position {position} could not be parsed, expected {expected}", describe_found(.found))]
pub struct SyntaxError {
    /// Index of the offending token in the terminal stream
    pub position: usize,
    /// The offending token, or `None` once the stream is exhausted
    pub found: Option<SmolStr>,
    pub expected: Expected,
}

impl SyntaxError {
    pub fn new(position: usize, found: Option<SmolStr>, expected: Expected) -> Self {
        Self {
            position,
            found,
            expected,
        }
    }

    pub fn code(&self) -> ErrorCode {
        if self.is_end_of_input() {
            ErrorCode::E0302
        } else {
            ErrorCode::E0301
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.found.is_none()
    }
}

fn describe_found(found: &Option<SmolStr>) -> String {
    match found {
        Some(token) => format!("`{}`", token),
        None => "end of formula".to_string(),
    }
}

/// Failure of a parse over a complete terminal stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("extra characters: `{}` from position {position} were not consumed", .tokens.join(" "))]
    TrailingTokens {
        position: usize,
        tokens: Vec<SmolStr>,
    },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax(err) => err.code(),
            Self::TrailingTokens { .. } => ErrorCode::E0303,
        }
    }

    /// Stream position the failure was detected at
    pub fn position(&self) -> usize {
        match self {
            Self::Syntax(err) => err.position,
            Self::TrailingTokens { position, .. } => *position,
        }
    }
}

/// Any failure of the end-to-end pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::Lex(err) => err.code(),
            Self::Parse(err) => err.code(),
        }
    }
}
