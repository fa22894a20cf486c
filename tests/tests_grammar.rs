#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use folcfg::parser::{Alternative, Symbol};
use folcfg::{NonTerminal, RawDeclaration, compile, validate};
use rstest::rstest;

fn grammar_with_predicates(predicates: &str) -> folcfg::Grammar {
    let declaration = RawDeclaration::new()
        .with("variables", "x y")
        .with("constants", "a b")
        .with("predicates", predicates)
        .with("equality", "=")
        .with("connectives", common::CONNECTIVES)
        .with("quantifiers", common::QUANTIFIERS)
        .with("formula", "x");
    compile(&validate(&declaration).unwrap())
}

#[test]
fn test_every_non_terminal_has_a_rule() {
    let grammar = common::grammar();
    let rules: Vec<NonTerminal> = grammar.non_terminals().collect();
    assert_eq!(rules, NonTerminal::ALL);
}

#[test]
fn test_connective_alternatives_are_the_binary_connectives() {
    let grammar = common::grammar();
    let connectives: Vec<&str> = grammar
        .alternatives(NonTerminal::Connective)
        .iter()
        .filter_map(Alternative::leading_terminal)
        .collect();
    assert_eq!(connectives, ["\\land", "\\lor", "\\to", "\\leftrightarrow"]);
    assert_eq!(grammar.negation(), "\\lnot");
}

#[test]
fn test_negation_prefixes_start() {
    let grammar = common::grammar();
    let negated = &grammar.alternatives(NonTerminal::Start)[3];
    assert_eq!(
        negated.symbols().to_vec(),
        vec![
            Symbol::terminal("\\lnot"),
            Symbol::NonTerminal(NonTerminal::Start)
        ]
    );
}

#[test]
fn test_terminal_is_variable_or_constant() {
    let grammar = grammar_with_predicates("P[1]");
    let alternatives: Vec<String> = grammar
        .alternatives(NonTerminal::Terminal)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(alternatives, ["V", "C"]);
    assert_eq!(grammar.alternatives(NonTerminal::Constant).len(), 2);
}

#[test]
fn test_bracketed_tries_terms_before_subformulas() {
    let grammar = common::grammar();
    let listed: Vec<String> = grammar
        .alternatives(NonTerminal::Bracketed)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(listed, ["S J S )", "T E T )"]);

    let tried: Vec<String> = grammar
        .trial_order(NonTerminal::Bracketed)
        .map(ToString::to_string)
        .collect();
    assert_eq!(tried, ["T E T )", "S J S )"]);

    let start: Vec<String> = grammar
        .trial_order(NonTerminal::Start)
        .map(ToString::to_string)
        .collect();
    assert_eq!(start[0], "P");
    assert_eq!(start.len(), 4);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
fn test_predicate_alternative_shape(#[case] arity: usize) {
    let grammar = grammar_with_predicates(&format!("R[{}]", arity));
    let alternatives = grammar.alternatives(NonTerminal::Predicate);
    assert_eq!(alternatives.len(), 1);

    let alternative = &alternatives[0];
    assert_eq!(alternative.count(NonTerminal::Variable), arity);
    assert_eq!(alternative.count_terminal(","), arity - 1);
    assert_eq!(alternative.count_terminal("("), 1);
    assert_eq!(alternative.count_terminal(")"), 1);
    assert_eq!(alternative.symbols().len(), 2 * arity + 2);
}

#[test]
fn test_one_predicate_alternative_per_declared_predicate() {
    let grammar = grammar_with_predicates("P[2] Q[1] Likes[2]");
    assert_eq!(grammar.alternatives(NonTerminal::Predicate).len(), 3);
    assert_eq!(grammar.predicate_arity("Likes"), Some(2));
}

#[test]
fn test_terminals_include_punctuation() {
    let grammar = common::grammar();
    for symbol in ["(", ")", ",", "=", "x", "a", "P", "\\forall", "\\lnot"] {
        assert!(grammar.is_terminal(symbol), "{symbol} should be a terminal");
    }
    assert!(!grammar.is_terminal("S"));
    assert!(!grammar.is_terminal("z"));
}

#[test]
fn test_grammar_dump() {
    let dump = common::grammar().to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "Non Terminal Symbols: S A E T Q V C P J");
    assert_eq!(
        lines[1],
        "Terminal Symbols: = \\land \\lor \\to \\leftrightarrow \\lnot x y a \\forall \\exists P ( ) ,"
    );
    assert_eq!(lines[2], "Production Rules:");
    assert_eq!(lines[3], "S -> P | ( A | Q V S | \\lnot S");
    assert_eq!(lines[4], "A -> S J S ) | T E T )");
    assert_eq!(lines[5], "E -> =");
    assert_eq!(lines[8], "V -> x | y");
    assert_eq!(lines[10], "P -> P(V,V)");
    assert_eq!(lines[11], "J -> \\land | \\lor | \\to | \\leftrightarrow");
}
