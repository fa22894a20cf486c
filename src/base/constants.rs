//! Domain constants shared across the validator, lexer and parser.

/// Opening parenthesis of a predicate application or bracketed formula.
pub const LEFT_PAREN: &str = "(";
/// Closing parenthesis.
pub const RIGHT_PAREN: &str = ")";
/// Argument separator inside a predicate application.
pub const COMMA: &str = ",";

/// The three structural punctuation marks, in dump order.
pub const PUNCTUATION: [&str; 3] = [LEFT_PAREN, RIGHT_PAREN, COMMA];

/// Leading marker of escaped symbols such as `\land` or `\forall`.
pub const ESCAPE_MARKER: char = '\\';

/// Separates a field name from its value in a declaration file.
pub const FIELD_SEPARATOR: char = ':';

/// Exactly one equality symbol must be declared.
pub const EQUALITY_COUNT: usize = 1;
/// Exactly five connectives; the last one is the unary negation.
pub const CONNECTIVE_COUNT: usize = 5;
/// Exactly two quantifiers.
pub const QUANTIFIER_COUNT: usize = 2;

/// Declaration file read when none is given on the command line.
pub const DEFAULT_DECLARATION_FILE: &str = "file.txt";
/// Log file the command line front end appends diagnostics to.
pub const DEFAULT_LOG_FILE: &str = "parser.log";
/// File the command line front end appends grammar dumps to.
pub const DEFAULT_GRAMMAR_FILE: &str = "grammar.txt";
/// Stem of the DOT file written when no declaration file was named.
pub const DEFAULT_TREE_STEM: &str = "parse_tree";

/// Does `text` start with the escape marker?
pub fn is_escaped(text: &str) -> bool {
    text.starts_with(ESCAPE_MARKER)
}
