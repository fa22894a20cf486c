//! End-to-end pipeline
//!
//! ```text
//! RawDeclaration → validate → Alphabet → compile → Grammar
//!                                   ↓
//!                  formula words → tokenize → TokenStream → parse → DerivationTree
//! ```
//!
//! Each run publishes exactly one [`Diagnostic`]: the first failure, or a
//! success naming the formula.

use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::errors::Error;
use crate::parser::{DerivationTree, Grammar, TokenStream, compile, parse, tokenize};
use crate::syntax::{Alphabet, RawDeclaration, validate};

/// A successfully parsed formula
#[derive(Debug, Clone)]
pub struct Derivation {
    pub tokens: TokenStream,
    pub tree: DerivationTree,
    /// Nonterminal expansions the parser attempted
    pub steps: usize,
}

/// Every artefact of a successful run
#[derive(Debug, Clone)]
pub struct Analysis {
    pub alphabet: Alphabet,
    pub grammar: Grammar,
    pub derivation: Derivation,
}

/// Validate `declaration`, compile its grammar and parse its formula
pub fn analyze(declaration: &RawDeclaration, sink: &mut impl DiagnosticSink) -> Result<Analysis, Error> {
    let alphabet = match validate(declaration) {
        Ok(alphabet) => alphabet,
        Err(err) => {
            let err = Error::from(err);
            sink.publish(&Diagnostic::from(err.clone()));
            return Err(err);
        }
    };
    let grammar = compile(&alphabet);
    let derivation = derive_formula(&alphabet, &grammar, sink)?;
    Ok(Analysis {
        alphabet,
        grammar,
        derivation,
    })
}

/// Tokenize and parse the formula of `alphabet` against `grammar`
pub fn derive_formula(
    alphabet: &Alphabet,
    grammar: &Grammar,
    sink: &mut impl DiagnosticSink,
) -> Result<Derivation, Error> {
    let result = tokenize(grammar, alphabet.formula())
        .map_err(Error::from)
        .and_then(|tokens| {
            let parse = parse(grammar, &tokens);
            let steps = parse.steps;
            let tree = parse.into_result()?;
            Ok(Derivation {
                tokens,
                tree,
                steps,
            })
        });

    match &result {
        Ok(derivation) => {
            debug!(
                tokens = derivation.tokens.len(),
                nodes = derivation.tree.len(),
                "formula accepted"
            );
            sink.publish(&Diagnostic::success(alphabet.formula_source()));
        }
        Err(err) => sink.publish(&Diagnostic::from(err.clone())),
    }
    result
}
