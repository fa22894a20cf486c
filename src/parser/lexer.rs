//! Logos-based lexer for formula words
//!
//! The formula arrives as whitespace-separated words. Each word is scanned
//! with logos to locate its punctuation, then cut around `(`, `,` and `)`
//! into terminals. Fragments that still carry punctuation after a cut are
//! split again, so lexing a stream that was already lexed is a no-op.

use std::fmt;
use std::ops::Range;

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use super::grammar::Grammar;
use crate::base::constants::{COMMA, LEFT_PAREN, RIGHT_PAREN};
use crate::errors::LexError;

/// A terminal together with its byte range in the formula source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: SmolStr,
    pub range: TextRange,
}

impl Token {
    fn new(text: &str, offset: usize) -> Self {
        Self {
            text: SmolStr::new(text),
            range: TextRange::at(TextSize::new(offset as u32), TextSize::of(text)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Ordered terminals of one formula
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

/// Splits formula words into terminals of one grammar
pub struct Lexer<'g> {
    grammar: &'g Grammar,
}

impl<'g> Lexer<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Tokenize `words`. Offsets refer to the words joined by single spaces.
    pub fn tokenize<S: AsRef<str>>(&self, words: &[S]) -> Result<TokenStream, LexError> {
        let mut tokens = Vec::new();
        let mut offset = 0;
        for word in words {
            let word = word.as_ref();
            let marks = scan(word, offset)?;
            let before = tokens.len();
            self.split(word, &marks, 0..word.len(), offset, &mut tokens)?;
            trace!(word, offset, pieces = tokens.len() - before, "split word");
            offset += word.len() + 1;
        }
        debug!(words = words.len(), tokens = tokens.len(), "tokenized formula");
        Ok(TokenStream { tokens })
    }

    fn split(
        &self,
        word: &str,
        marks: &[(usize, Mark)],
        region: Range<usize>,
        base: usize,
        out: &mut Vec<Token>,
    ) -> Result<(), LexError> {
        let inside: Vec<(usize, Mark)> = marks
            .iter()
            .copied()
            .filter(|(at, _)| region.contains(at))
            .collect();
        let cuts = cut_points(&inside, region.len());
        if cuts.is_empty() {
            self.emit(&word[region.clone()], base + region.start, out);
            return Ok(());
        }

        let mut cursor = region.start;
        let mut previous: Option<Mark> = None;
        for (at, mark) in cuts {
            if cursor == at {
                if previous.is_some_and(Mark::opens_argument) && mark.closes_argument() {
                    return Err(LexError::EmptyArgument {
                        word: SmolStr::new(word),
                        offset: base + at,
                    });
                }
            } else {
                self.split(word, marks, cursor..at, base, out)?;
            }
            out.push(Token::new(mark.text(), base + at));
            cursor = at + 1;
            previous = Some(mark);
        }
        if cursor < region.end {
            self.split(word, marks, cursor..region.end, base, out)?;
        }
        Ok(())
    }

    /// Push an unpunctuated fragment, separating an embedded equality symbol
    fn emit(&self, text: &str, offset: usize, out: &mut Vec<Token>) {
        let equality = self.grammar.equality();
        let splittable = !equality.is_empty()
            && equality
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        if !splittable || self.grammar.is_terminal(text) || !text.contains(equality) {
            out.push(Token::new(text, offset));
            return;
        }

        let mut cursor = 0;
        for (at, _) in text.match_indices(equality) {
            if at > cursor {
                out.push(Token::new(&text[cursor..at], offset + cursor));
            }
            out.push(Token::new(equality, offset + at));
            cursor = at + equality.len();
        }
        if cursor < text.len() {
            out.push(Token::new(&text[cursor..], offset + cursor));
        }
    }
}

/// Tokenize `words` against `grammar`
pub fn tokenize<S: AsRef<str>>(grammar: &Grammar, words: &[S]) -> Result<TokenStream, LexError> {
    Lexer::new(grammar).tokenize(words)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[regex(r"[A-Za-z0-9_\\=]+")]
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Open,
    Close,
    Comma,
}

impl Mark {
    fn text(self) -> &'static str {
        match self {
            Self::Open => LEFT_PAREN,
            Self::Close => RIGHT_PAREN,
            Self::Comma => COMMA,
        }
    }

    fn opens_argument(self) -> bool {
        matches!(self, Self::Open | Self::Comma)
    }

    fn closes_argument(self) -> bool {
        matches!(self, Self::Comma | Self::Close)
    }
}

/// Locate the punctuation of `word`, rejecting characters no symbol may contain
fn scan(word: &str, base: usize) -> Result<Vec<(usize, Mark)>, LexError> {
    let mut marks = Vec::new();
    for (piece, span) in Piece::lexer(word).spanned() {
        let mark = match piece {
            Ok(Piece::OpenParen) => Mark::Open,
            Ok(Piece::CloseParen) => Mark::Close,
            Ok(Piece::Comma) => Mark::Comma,
            Ok(Piece::Text) => continue,
            Err(()) => {
                let character = word[span.start..].chars().next().unwrap_or_default();
                return Err(LexError::InvalidCharacter {
                    word: SmolStr::new(word),
                    character,
                    offset: base + span.start,
                });
            }
        };
        marks.push((span.start, mark));
    }
    Ok(marks)
}

/// Where to cut a region, given the punctuation inside it.
///
/// The first `(` and the first `)` decide the shape: both present in order
/// cuts at the parentheses and every comma between them; a `)` with no
/// earlier `(` cuts at the commas before it; a lone `(` cuts at the commas
/// after it. A region holding only commas is cut at the first one.
fn cut_points(inside: &[(usize, Mark)], len: usize) -> Vec<(usize, Mark)> {
    let first = |wanted: Mark| {
        inside
            .iter()
            .find(|(_, mark)| *mark == wanted)
            .map(|(at, _)| *at)
    };
    let commas = |lo: Option<usize>, hi: Option<usize>| {
        inside.iter().copied().filter(move |&(at, mark)| {
            mark == Mark::Comma && lo.is_none_or(|lo| at > lo) && hi.is_none_or(|hi| at < hi)
        })
    };

    match (first(Mark::Open), first(Mark::Close)) {
        (Some(open), Some(close)) if open < close => std::iter::once((open, Mark::Open))
            .chain(commas(Some(open), Some(close)))
            .chain(std::iter::once((close, Mark::Close)))
            .collect(),
        (_, Some(close)) => commas(None, Some(close))
            .chain(std::iter::once((close, Mark::Close)))
            .collect(),
        (Some(open), None) => std::iter::once((open, Mark::Open))
            .chain(commas(Some(open), None))
            .collect(),
        (None, None) if len > 1 => inside.first().copied().into_iter().collect(),
        (None, None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::compile;
    use crate::syntax::{RawDeclaration, validate};

    fn grammar() -> Grammar {
        let declaration = RawDeclaration::new()
            .with("variables", "x y")
            .with("constants", "a")
            .with("predicates", "P[2] Q[1]")
            .with("equality", "=")
            .with("connectives", "\\land \\lor \\implies \\iff \\neg")
            .with("quantifiers", "\\exists \\forall")
            .with("formula", "P(x,y)");
        compile(&validate(&declaration).unwrap())
    }

    fn texts(words: &[&str]) -> Vec<String> {
        tokenize(&grammar(), words)
            .unwrap()
            .texts()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_lex_predicate_application() {
        assert_eq!(texts(&["P(x,y)"]), ["P", "(", "x", ",", "y", ")"]);
    }

    #[test]
    fn test_lex_bracket_prefix() {
        assert_eq!(texts(&["(P(x,y)"]), ["(", "P", "(", "x", ",", "y", ")"]);
    }

    #[test]
    fn test_lex_close_only() {
        assert_eq!(texts(&["y))"]), ["y", ")", ")"]);
    }

    #[test]
    fn test_lex_close_before_open() {
        assert_eq!(texts(&["x)(y"]), ["x", ")", "(", "y"]);
    }

    #[test]
    fn test_lex_open_only_with_commas() {
        assert_eq!(texts(&["P(x,"]), ["P", "(", "x", ","]);
    }

    #[test]
    fn test_lex_bare_comma() {
        assert_eq!(texts(&[","]), [","]);
        assert_eq!(texts(&["x,y"]), ["x", ",", "y"]);
    }

    #[test]
    fn test_lex_splits_equality() {
        assert_eq!(texts(&["(x=a)"]), ["(", "x", "=", "a", ")"]);
    }

    #[test]
    fn test_lex_keeps_escaped_words() {
        assert_eq!(texts(&["\\forall", "x"]), ["\\forall", "x"]);
    }

    #[test]
    fn test_token_ranges_follow_joined_source() {
        let stream = tokenize(&grammar(), &["\\neg", "Q(x)"]).unwrap();
        let ranges: Vec<(u32, u32)> = stream
            .iter()
            .map(|token| (token.range.start().into(), token.range.end().into()))
            .collect();
        assert_eq!(ranges, [(0, 4), (5, 6), (6, 7), (7, 8), (8, 9)]);
        assert_eq!(stream.to_string(), "\\neg Q ( x )");
    }

    #[test]
    fn test_empty_argument_is_rejected() {
        let err = tokenize(&grammar(), &["P(x,)"]).unwrap_err();
        assert_eq!(
            err,
            LexError::EmptyArgument {
                word: SmolStr::new("P(x,)"),
                offset: 4
            }
        );
    }

    #[test]
    fn test_invalid_character_is_rejected() {
        let err = tokenize(&grammar(), &["P(x,y)", "x+y"]).unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidCharacter {
                word: SmolStr::new("x+y"),
                character: '+',
                offset: 8
            }
        );
    }
}
