//! Grammar compiler: alphabet in, production rules out

use smol_str::SmolStr;
use tracing::debug;

use super::{Alternative, FxIndexMap, FxIndexSet, Grammar, NonTerminal, Symbol};
use crate::base::constants::PUNCTUATION;
use crate::syntax::Alphabet;

/// Derive the grammar that recognises formulas over `alphabet`.
///
/// ```text
/// S -> P | ( A | Q V S | neg S
/// A -> S J S ) | T E T )
/// E -> equality
/// T -> V | C
/// Q -> each quantifier
/// V -> each variable
/// C -> each constant
/// P -> name ( V , ... , V ) for each predicate
/// J -> each binary connective
/// ```
///
/// Each production is built in a fresh vector, so nothing is shared
/// between rules.
pub fn compile(alphabet: &Alphabet) -> Grammar {
    use NonTerminal::*;

    let literal = |text: &SmolStr| Alternative::sequence([Symbol::Terminal(text.clone())]);
    let nt = Symbol::NonTerminal;
    let negation = alphabet.negation().clone();

    let mut rules: FxIndexMap<NonTerminal, Vec<Alternative>> = FxIndexMap::default();
    for rule in NonTerminal::ALL {
        let alternatives = match rule {
            Start => vec![
                Alternative::sequence([nt(Predicate)]),
                Alternative::sequence([Symbol::terminal("("), nt(Bracketed)]),
                Alternative::sequence([nt(Quantifier), nt(Variable), nt(Start)]),
                Alternative::sequence([Symbol::Terminal(negation.clone()), nt(Start)]),
            ],
            Bracketed => vec![
                Alternative::sequence([
                    nt(Start),
                    nt(Connective),
                    nt(Start),
                    Symbol::terminal(")"),
                ]),
                Alternative::sequence([
                    nt(Terminal),
                    nt(Equality),
                    nt(Terminal),
                    Symbol::terminal(")"),
                ]),
            ],
            Equality => vec![literal(alphabet.equality())],
            Terminal => vec![
                Alternative::sequence([nt(Variable)]),
                Alternative::sequence([nt(Constant)]),
            ],
            Quantifier => alphabet.quantifiers().iter().map(literal).collect(),
            Variable => alphabet.variables().iter().map(literal).collect(),
            Constant => alphabet.constants().iter().map(literal).collect(),
            Predicate => alphabet
                .predicates()
                .iter()
                .map(|predicate| Alternative::Predicate {
                    name: SmolStr::new(predicate.name()),
                    arity: predicate.arity(),
                })
                .collect(),
            Connective => alphabet.binary_connectives().iter().map(literal).collect(),
        };
        rules.insert(rule, alternatives);
    }

    let mut terminals: FxIndexSet<SmolStr> = FxIndexSet::default();
    terminals.insert(alphabet.equality().clone());
    terminals.extend(alphabet.connectives().iter().cloned());
    terminals.extend(alphabet.variables().iter().cloned());
    terminals.extend(alphabet.constants().iter().cloned());
    terminals.extend(alphabet.quantifiers().iter().cloned());
    terminals.extend(alphabet.predicate_names().map(SmolStr::new));
    terminals.extend(PUNCTUATION.iter().copied().map(SmolStr::new));

    debug!(
        rules = rules.len(),
        terminals = terminals.len(),
        predicates = alphabet.predicates().len(),
        "compiled grammar"
    );

    Grammar {
        rules,
        terminals,
        equality: alphabet.equality().clone(),
        negation,
    }
}
