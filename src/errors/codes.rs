//! Error code definitions for folcfg diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Declaration errors (alphabet validation)
//! - E02xx: Lexical errors (formula tokenization)
//! - E03xx: Syntax errors (derivation against the grammar)

use std::fmt;

/// Error codes for folcfg diagnostics
///
/// Each error code represents one rule of the alphabet, lexer or parser
/// contract, enabling filtering and stable log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Declaration errors
    // =========================================================================
    /// Missing, duplicated or unreadable declaration field
    E0101,
    /// Wrong number of symbols in a fixed-size field
    E0102,
    /// Symbol outside the permitted character set
    E0103,
    /// Predicate without a positive `[n]` arity marker
    E0104,
    /// Symbol declared in two roles
    E0105,

    // =========================================================================
    // E02xx: Lexical errors
    // =========================================================================
    /// Character outside the formula character set
    E0201,
    /// Empty argument between separators
    E0202,

    // =========================================================================
    // E03xx: Syntax errors
    // =========================================================================
    /// Token cannot be derived at this position
    E0301,
    /// Formula ended while a production was still open
    E0302,
    /// Derivation finished before the end of the formula
    E0303,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0102")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Declaration
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            // Lexical
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            // Syntax
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 => {
                "declaration error"
            }
            Self::E0201 | Self::E0202 => "lexical error",
            Self::E0301 | Self::E0302 | Self::E0303 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Declaration
            Self::E0101 => "malformed declaration",
            Self::E0102 => "wrong number of symbols",
            Self::E0103 => "invalid symbol",
            Self::E0104 => "invalid predicate arity",
            Self::E0105 => "name collision",
            // Lexical
            Self::E0201 => "invalid character",
            Self::E0202 => "empty argument",
            // Syntax
            Self::E0301 => "unexpected token",
            Self::E0302 => "unexpected end of formula",
            Self::E0303 => "extra characters after formula",
        }
    }

    /// Check if this error was raised before any parse attempt
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0102.as_str(), "E0102");
        assert_eq!(ErrorCode::E0303.as_str(), "E0303");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0201), "E0201");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0105.default_message(), "name collision");
        assert_eq!(
            ErrorCode::E0303.default_message(),
            "extra characters after formula"
        );
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::E0101.category_description(), "declaration error");
        assert_eq!(ErrorCode::E0202.category_description(), "lexical error");
        assert_eq!(ErrorCode::E0301.category_description(), "syntax error");
    }

    #[test]
    fn test_is_declaration() {
        assert!(ErrorCode::E0104.is_declaration());
        assert!(!ErrorCode::E0201.is_declaration());
        assert!(!ErrorCode::E0303.is_declaration());
    }
}
