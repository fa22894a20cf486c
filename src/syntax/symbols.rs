//! Logos-based scanner for declared symbols
//!
//! Decides whether a declared token fits the character set of its field and
//! splits predicate tokens such as `P[2]` into name and arity.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPiece {
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    #[token("\\")]
    Escape,

    #[token("=")]
    Equals,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,
}

/// Lex `text` completely, or `None` if any character is outside every piece
fn pieces(text: &str) -> Option<Vec<(SymbolPiece, &str)>> {
    let mut lexer = SymbolPiece::lexer(text);
    let mut out = Vec::new();
    while let Some(piece) = lexer.next() {
        out.push((piece.ok()?, lexer.slice()));
    }
    Some(out)
}

fn consists_of(text: &str, allowed: &[SymbolPiece]) -> bool {
    match pieces(text) {
        Some(pieces) => !pieces.is_empty() && pieces.iter().all(|(kind, _)| allowed.contains(kind)),
        None => false,
    }
}

/// `[A-Za-z0-9_]+`: variables, constants and predicate names
pub(crate) fn is_plain_name(text: &str) -> bool {
    consists_of(text, &[SymbolPiece::Word])
}

/// `[A-Za-z0-9_\\]+`: connectives and quantifiers
pub(crate) fn is_connective_symbol(text: &str) -> bool {
    consists_of(text, &[SymbolPiece::Word, SymbolPiece::Escape])
}

/// `[A-Za-z0-9_\\=]+`: the equality symbol
pub(crate) fn is_equality_symbol(text: &str) -> bool {
    consists_of(
        text,
        &[SymbolPiece::Word, SymbolPiece::Escape, SymbolPiece::Equals],
    )
}

/// Result of scanning a predicate token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PredicateShape<'a> {
    Valid { name: &'a str, arity: usize },
    /// Characters are fine but there is no positive `[n]` marker
    BadArity,
    /// The name contains characters outside `[A-Za-z0-9_]`
    BadCharacters,
}

pub(crate) fn scan_predicate(text: &str) -> PredicateShape<'_> {
    let Some(pieces) = pieces(text) else {
        return PredicateShape::BadCharacters;
    };

    if let [
        (SymbolPiece::Word, name),
        (SymbolPiece::OpenBracket, _),
        (SymbolPiece::Word, digits),
        (SymbolPiece::CloseBracket, _),
    ] = pieces.as_slice()
    {
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(arity) = digits.parse::<usize>() {
                if arity > 0 {
                    return PredicateShape::Valid { name: *name, arity };
                }
            }
        }
        return PredicateShape::BadArity;
    }

    if pieces
        .iter()
        .any(|(kind, _)| matches!(kind, SymbolPiece::Escape | SymbolPiece::Equals))
    {
        PredicateShape::BadCharacters
    } else {
        PredicateShape::BadArity
    }
}
