//! Context-free grammar for one alphabet
//!
//! Productions are structurally typed: an [`Alternative`] is either a
//! sequence of [`Symbol`]s or a predicate application expanded on demand
//! from its arity. The compiler in [`compile`] builds a [`Grammar`] from a
//! validated alphabet; the parser walks the alternatives in declared order.

mod compile;

use std::borrow::Cow;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::base::constants::{COMMA, LEFT_PAREN, RIGHT_PAREN};

pub use compile::compile;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// The nine nonterminal categories of every derived grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum NonTerminal {
    Start,
    Bracketed,
    Equality,
    Terminal,
    Quantifier,
    Variable,
    Constant,
    Predicate,
    Connective,
}

impl NonTerminal {
    /// All nonterminals, in grammar dump order
    pub const ALL: [NonTerminal; 9] = [
        NonTerminal::Start,
        NonTerminal::Bracketed,
        NonTerminal::Equality,
        NonTerminal::Terminal,
        NonTerminal::Quantifier,
        NonTerminal::Variable,
        NonTerminal::Constant,
        NonTerminal::Predicate,
        NonTerminal::Connective,
    ];

    /// Single-letter symbol used in grammar dumps and tree labels
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Start => "S",
            Self::Bracketed => "A",
            Self::Equality => "E",
            Self::Terminal => "T",
            Self::Quantifier => "Q",
            Self::Variable => "V",
            Self::Constant => "C",
            Self::Predicate => "P",
            Self::Connective => "J",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Bracketed => "Bracketed",
            Self::Equality => "Equality",
            Self::Terminal => "Terminal",
            Self::Quantifier => "Quantifier",
            Self::Variable => "Variable",
            Self::Constant => "Constant",
            Self::Predicate => "Predicate",
            Self::Connective => "Connective",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One position in a production alternative
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(SmolStr),
    NonTerminal(NonTerminal),
}

impl Symbol {
    pub fn terminal(text: impl Into<SmolStr>) -> Self {
        Self::Terminal(text.into())
    }

    pub fn is_non_terminal(&self, rule: NonTerminal) -> bool {
        matches!(self, Self::NonTerminal(r) if *r == rule)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(rule: NonTerminal) -> Self {
        Self::NonTerminal(rule)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(text) => f.write_str(text),
            Self::NonTerminal(rule) => write!(f, "{}", rule),
        }
    }
}

/// One expansion choice of a nonterminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// A fixed sequence of terminals and nonterminals
    Sequence(Vec<Symbol>),
    /// `name ( V , ... , V )` with `arity` variable placeholders
    Predicate { name: SmolStr, arity: usize },
}

impl Alternative {
    pub fn sequence(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self::Sequence(symbols.into_iter().collect())
    }

    /// The symbols of this alternative, left to right.
    ///
    /// Predicate applications are expanded here; sequences are borrowed.
    pub fn symbols(&self) -> Cow<'_, [Symbol]> {
        match self {
            Self::Sequence(symbols) => Cow::Borrowed(symbols),
            Self::Predicate { name, arity } => {
                let mut symbols = Vec::with_capacity(2 * arity + 2);
                symbols.push(Symbol::Terminal(name.clone()));
                symbols.push(Symbol::terminal(LEFT_PAREN));
                for i in 0..*arity {
                    if i > 0 {
                        symbols.push(Symbol::terminal(COMMA));
                    }
                    symbols.push(Symbol::NonTerminal(NonTerminal::Variable));
                }
                symbols.push(Symbol::terminal(RIGHT_PAREN));
                Cow::Owned(symbols)
            }
        }
    }

    /// The terminal this alternative must start with, if it starts with one
    pub fn leading_terminal(&self) -> Option<&str> {
        match self {
            Self::Sequence(symbols) => match symbols.first() {
                Some(Symbol::Terminal(text)) => Some(text),
                _ => None,
            },
            Self::Predicate { name, .. } => Some(name),
        }
    }

    /// Number of positions holding `rule`
    pub fn count(&self, rule: NonTerminal) -> usize {
        self.symbols()
            .iter()
            .filter(|symbol| symbol.is_non_terminal(rule))
            .count()
    }

    /// Number of positions holding `terminal`
    pub fn count_terminal(&self, terminal: &str) -> usize {
        self.symbols()
            .iter()
            .filter(|symbol| matches!(symbol, Symbol::Terminal(text) if text == terminal))
            .count()
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(symbols) => {
                for (i, symbol) in symbols.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", symbol)?;
                }
                Ok(())
            }
            Self::Predicate { name, arity } => {
                let placeholders = vec![NonTerminal::Variable.symbol(); *arity];
                write!(f, "{}({})", name, placeholders.join(","))
            }
        }
    }
}

/// A grammar derived from one alphabet.
///
/// Immutable once compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: FxIndexMap<NonTerminal, Vec<Alternative>>,
    terminals: FxIndexSet<SmolStr>,
    equality: SmolStr,
    negation: SmolStr,
}

impl Grammar {
    /// Alternatives of `rule`, in listing order
    pub fn alternatives(&self, rule: NonTerminal) -> &[Alternative] {
        self.rules.get(&rule).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Alternatives of `rule` in the order the parser tries them.
    ///
    /// Alternatives led by `Terminal` go first, so `T E T )` is tried
    /// before `S J S )` even when a quantifier shares a term's name.
    /// The rest keep listing order.
    pub fn trial_order(&self, rule: NonTerminal) -> impl Iterator<Item = &Alternative> {
        let alternatives = self.alternatives(rule);
        let term_led = |alternative: &&Alternative| {
            matches!(
                alternative.symbols().first(),
                Some(Symbol::NonTerminal(NonTerminal::Terminal))
            )
        };
        let first = alternatives.iter().filter(term_led);
        let rest = alternatives.iter().filter(move |alternative| !term_led(alternative));
        first.chain(rest)
    }

    pub fn rules(&self) -> impl Iterator<Item = (NonTerminal, &[Alternative])> {
        self.rules
            .iter()
            .map(|(rule, alternatives)| (*rule, alternatives.as_slice()))
    }

    pub fn non_terminals(&self) -> impl Iterator<Item = NonTerminal> + '_ {
        self.rules.keys().copied()
    }

    /// Every terminal symbol, punctuation last
    pub fn terminals(&self) -> impl Iterator<Item = &str> {
        self.terminals.iter().map(SmolStr::as_str)
    }

    pub fn is_terminal(&self, text: &str) -> bool {
        self.terminals.contains(text)
    }

    pub fn equality(&self) -> &str {
        &self.equality
    }

    /// The unary connective used as a negation prefix
    pub fn negation(&self) -> &str {
        &self.negation
    }

    /// Declared arity of the predicate called `name`
    pub fn predicate_arity(&self, name: &str) -> Option<usize> {
        self.alternatives(NonTerminal::Predicate)
            .iter()
            .find_map(|alternative| match alternative {
                Alternative::Predicate { name: n, arity } if n == name => Some(*arity),
                _ => None,
            })
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let non_terminals: Vec<&str> = self.non_terminals().map(|rule| rule.symbol()).collect();
        let terminals: Vec<&str> = self.terminals().collect();
        writeln!(f, "Non Terminal Symbols: {}", non_terminals.join(" "))?;
        writeln!(f, "Terminal Symbols: {}", terminals.join(" "))?;
        writeln!(f, "Production Rules:")?;
        for (rule, alternatives) in self.rules() {
            let alternatives: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
            writeln!(f, "{} -> {}", rule, alternatives.join(" | "))?;
        }
        Ok(())
    }
}
