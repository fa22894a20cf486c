#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{grammar, lex};
use folcfg::{LexError, tokenize};
use rstest::rstest;
use smol_str::SmolStr;

fn texts(formula: &str) -> Vec<String> {
    lex(&grammar(), formula).texts().map(String::from).collect()
}

#[rstest]
#[case::predicate("P(x,y)", &["P", "(", "x", ",", "y", ")"])]
#[case::spaced_predicate("P( x , y )", &["P", "(", "x", ",", "y", ")"])]
#[case::open_bracket_prefix("(P(x,y)", &["(", "P", "(", "x", ",", "y", ")"])]
#[case::nested_closers("P(x,y))", &["P", "(", "x", ",", "y", ")", ")"])]
#[case::closer_then_opener("y)(x", &["y", ")", "(", "x"])]
#[case::trailing_comma("P(x,", &["P", "(", "x", ","])]
#[case::leading_comma(",y)", &[",", "y", ")"])]
#[case::bare_punctuation("( ) ,", &["(", ")", ","])]
#[case::equality("(x=a)", &["(", "x", "=", "a", ")"])]
#[case::quantifier("\\forall x P(x,x)", &["\\forall", "x", "P", "(", "x", ",", "x", ")"])]
#[case::connective("(P(x,y) \\land P(y,x))", &["(", "P", "(", "x", ",", "y", ")", "\\land", "P", "(", "y", ",", "x", ")", ")"])]
fn test_lex(#[case] formula: &str, #[case] expected: &[&str]) {
    assert_eq!(texts(formula), expected);
}

#[rstest]
#[case("P(x,y)")]
#[case("(P(x,y) \\lor \\lnot P(y,y))")]
#[case("\\exists y (y=a)")]
#[case("y)(x,")]
fn test_lexing_is_idempotent(#[case] formula: &str) {
    let grammar = grammar();
    let once = lex(&grammar, formula);
    let words: Vec<&str> = once.texts().collect();
    let twice = tokenize(&grammar, &words).unwrap();
    assert_eq!(
        once.texts().collect::<Vec<_>>(),
        twice.texts().collect::<Vec<_>>()
    );
}

#[test]
fn test_ranges_point_into_the_joined_formula() {
    let source = "\\forall x P(x,x)";
    let stream = lex(&grammar(), source);
    for token in &stream {
        let start: usize = token.range.start().into();
        let end: usize = token.range.end().into();
        assert_eq!(&source[start..end], token.as_str());
    }
}

#[rstest]
#[case::empty_parens("P()", 2)]
#[case::double_comma("P(x,,y)", 4)]
#[case::leading_empty("P(,y)", 2)]
fn test_empty_argument(#[case] word: &str, #[case] offset: usize) {
    let err = tokenize(&grammar(), &[word]).unwrap_err();
    assert_eq!(
        err,
        LexError::EmptyArgument {
            word: SmolStr::new(word),
            offset
        }
    );
}

#[rstest]
#[case("x+y", '+', 1)]
#[case("P(x;y)", ';', 3)]
#[case("[x]", '[', 0)]
fn test_invalid_character(#[case] word: &str, #[case] character: char, #[case] offset: usize) {
    let err = tokenize(&grammar(), &[word]).unwrap_err();
    assert_eq!(
        err,
        LexError::InvalidCharacter {
            word: SmolStr::new(word),
            character,
            offset
        }
    );
}
