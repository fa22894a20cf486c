//! Shared fixtures: the alphabet used throughout the scenario tests

#![allow(dead_code)]

use folcfg::{Grammar, RawDeclaration, TokenStream, compile, tokenize, validate};

pub const CONNECTIVES: &str = "\\land \\lor \\to \\leftrightarrow \\lnot";
pub const QUANTIFIERS: &str = "\\forall \\exists";

/// V = {x, y}, C = {a}, P = {P/2}, E = {=}
pub fn declaration(formula: &str) -> RawDeclaration {
    RawDeclaration::new()
        .with("variables", "x y")
        .with("constants", "a")
        .with("predicates", "P[2]")
        .with("equality", "=")
        .with("connectives", CONNECTIVES)
        .with("quantifiers", QUANTIFIERS)
        .with("formula", formula)
}

/// The same alphabet as a declaration file
pub fn declaration_text(formula: &str) -> String {
    format!(
        "variables: x y\nconstants: a\npredicates: P[2]\nequality: =\nconnectives: {}\nquantifiers: {}\nformula: {}\n",
        CONNECTIVES, QUANTIFIERS, formula
    )
}

pub fn grammar() -> Grammar {
    compile(&validate(&declaration("P(x,y)")).unwrap())
}

pub fn lex(grammar: &Grammar, formula: &str) -> TokenStream {
    let words: Vec<&str> = formula.split_whitespace().collect();
    tokenize(grammar, &words).unwrap()
}
