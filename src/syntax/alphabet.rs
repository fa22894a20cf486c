use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::base::constants::{CONNECTIVE_COUNT, QUANTIFIER_COUNT};

/// A predicate symbol together with the number of variables it takes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredicateSymbol {
    name: SmolStr,
    arity: usize,
}

impl PredicateSymbol {
    pub(crate) fn new(name: impl Into<SmolStr>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always at least one
    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// A validated first-order-logic alphabet plus the formula to parse.
///
/// Only [`validate`](super::validate) constructs one, so every instance
/// satisfies the character-set, cardinality and disjointness rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    pub(crate) variables: IndexSet<SmolStr>,
    pub(crate) constants: IndexSet<SmolStr>,
    pub(crate) predicates: Vec<PredicateSymbol>,
    pub(crate) equality: SmolStr,
    pub(crate) connectives: [SmolStr; CONNECTIVE_COUNT],
    pub(crate) quantifiers: [SmolStr; QUANTIFIER_COUNT],
    pub(crate) formula: Vec<SmolStr>,
}

impl Alphabet {
    pub fn variables(&self) -> &IndexSet<SmolStr> {
        &self.variables
    }

    pub fn constants(&self) -> &IndexSet<SmolStr> {
        &self.constants
    }

    /// Predicates in declaration order
    pub fn predicates(&self) -> &[PredicateSymbol] {
        &self.predicates
    }

    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.predicates.iter().map(PredicateSymbol::name)
    }

    pub fn equality(&self) -> &SmolStr {
        &self.equality
    }

    /// All five connectives, the unary one last
    pub fn connectives(&self) -> &[SmolStr] {
        &self.connectives
    }

    /// The four binary connectives
    pub fn binary_connectives(&self) -> &[SmolStr] {
        &self.connectives[..CONNECTIVE_COUNT - 1]
    }

    /// The reserved unary connective used as a negation prefix
    pub fn negation(&self) -> &SmolStr {
        &self.connectives[CONNECTIVE_COUNT - 1]
    }

    pub fn quantifiers(&self) -> &[SmolStr] {
        &self.quantifiers
    }

    /// The formula as whitespace-split words
    pub fn formula(&self) -> &[SmolStr] {
        &self.formula
    }

    /// The formula words joined by single spaces
    pub fn formula_source(&self) -> String {
        self.formula.join(" ")
    }
}
