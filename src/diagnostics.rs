//! Structured diagnostics and the sinks that receive them
//!
//! Every run of the pipeline ends in exactly one [`Diagnostic`]: the first
//! failure, or a success record naming the formula. Sinks decide what to do
//! with it; the library ships a `tracing` sink and the `Vec` collector.

use std::fmt;

use tracing::{info, warn};

use crate::errors::{Error, ErrorCode, LexError, ParseError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum DiagnosticKind {
    Validation,
    Lex,
    Syntax,
    Success,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Lex => "lex",
            Self::Syntax => "syntax",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Validation(ValidationError),
    Lex(LexError),
    Syntax(ParseError),
    Success { formula: String },
}

impl Diagnostic {
    pub fn success(formula: impl Into<String>) -> Self {
        Self::Success {
            formula: formula.into(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::Validation(_) => DiagnosticKind::Validation,
            Self::Lex(_) => DiagnosticKind::Lex,
            Self::Syntax(_) => DiagnosticKind::Syntax,
            Self::Success { .. } => DiagnosticKind::Success,
        }
    }

    /// Error code, `None` for a success
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Validation(err) => Some(err.code()),
            Self::Lex(err) => Some(err.code()),
            Self::Syntax(err) => Some(err.code()),
            Self::Success { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[cfg(feature = "interchange")]
    pub fn record(&self) -> DiagnosticRecord {
        DiagnosticRecord {
            kind: self.kind(),
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "error[{}]: {}", err.code(), err),
            Self::Lex(err) => write!(f, "error[{}]: {}", err.code(), err),
            Self::Syntax(err) => write!(f, "error[{}]: {}", err.code(), err),
            Self::Success { formula } => write!(f, "success: the formula `{}` is valid", formula),
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(err) => Self::Validation(err),
            Error::Lex(err) => Self::Lex(err),
            Error::Parse(err) => Self::Syntax(err),
        }
    }
}

/// Serializable summary of a [`Diagnostic`]
#[cfg(feature = "interchange")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DiagnosticRecord {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
}

/// Receiver of pipeline outcomes
pub trait DiagnosticSink {
    fn publish(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn publish(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn publish(&mut self, diagnostic: &Diagnostic) {
        (**self).publish(diagnostic);
    }
}

/// Fan-out to two sinks, in order
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    fn publish(&mut self, diagnostic: &Diagnostic) {
        self.0.publish(diagnostic);
        self.1.publish(diagnostic);
    }
}

/// Emits each diagnostic as a `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn publish(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.code() {
            Some(code) => warn!(code = %code, kind = %diagnostic.kind(), "{}", diagnostic),
            None => info!(kind = %diagnostic.kind(), "{}", diagnostic),
        }
    }
}
