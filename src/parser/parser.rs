//! Grammar-driven recursive descent parser
//!
//! One procedure serves every nonterminal: alternatives are tried in
//! [`Grammar::trial_order`], and an alternative applies when its first
//! symbol matches. Once an alternative applies, every later symbol must match
//! or the parse fails at the current token. A non-applicable alternative
//! rolls the token cursor and the tree arena back to where it started.

use tracing::{debug, trace};

use super::grammar::{Alternative, Grammar, NonTerminal, Symbol};
use super::lexer::{Token, TokenStream};
use super::tree::{DerivationTree, NodeId, NodeLabel};
use crate::errors::{Expected, ParseError, SyntaxError};

/// Outcome of parsing one terminal stream
#[derive(Debug, Clone)]
pub struct Parse {
    /// The derivation; empty when the parse failed
    pub tree: DerivationTree,
    pub error: Option<ParseError>,
    /// Nonterminal expansions attempted
    pub steps: usize,
}

impl Parse {
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<DerivationTree, ParseError> {
        match self.error {
            None => Ok(self.tree),
            Some(err) => Err(err),
        }
    }
}

/// Parse `stream` as a single formula of `grammar`
pub fn parse(grammar: &Grammar, stream: &TokenStream) -> Parse {
    let mut parser = Parser::new(grammar, stream.as_slice());
    let result = parser.parse_formula();
    parser.finish(result)
}

#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    position: usize,
    tree_len: usize,
}

/// The parser state
struct Parser<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
    pos: usize,
    tree: DerivationTree,
    steps: usize,
}

impl<'a> Parser<'a> {
    fn new(grammar: &'a Grammar, tokens: &'a [Token]) -> Self {
        Self {
            grammar,
            tokens,
            pos: 0,
            tree: DerivationTree::new(),
            steps: 0,
        }
    }

    fn finish(self, result: Result<(), ParseError>) -> Parse {
        match result {
            Ok(()) => {
                debug!(tokens = self.tokens.len(), nodes = self.tree.len(), steps = self.steps, "parsed formula");
                Parse {
                    tree: self.tree,
                    error: None,
                    steps: self.steps,
                }
            }
            Err(err) => {
                debug!(position = err.position(), steps = self.steps, "parse failed");
                Parse {
                    tree: DerivationTree::new(),
                    error: Some(err),
                    steps: self.steps,
                }
            }
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current_text(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(Token::as_str)
    }

    fn at(&self, text: &str) -> bool {
        self.current_text() == Some(text)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.pos,
            tree_len: self.tree.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.position;
        self.tree.truncate(checkpoint.tree_len);
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self, parent: NodeId) {
        if let Some(token) = self.tokens.get(self.pos) {
            self.tree.alloc(NodeLabel::Token(token.text.clone()), Some(parent));
            self.pos += 1;
        }
    }

    /// Consume `terminal` or fail at the current token
    fn expect(&mut self, terminal: &str, parent: NodeId) -> Result<(), SyntaxError> {
        if self.at(terminal) {
            self.bump(parent);
            Ok(())
        } else {
            Err(self.error(Expected::Terminal(terminal.into())))
        }
    }

    fn error(&self, expected: Expected) -> SyntaxError {
        let found = self.current_text().map(Into::into);
        SyntaxError::new(self.pos, found, expected)
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    fn parse_formula(&mut self) -> Result<(), ParseError> {
        if self.derive(NonTerminal::Start, None)?.is_none() {
            return Err(self.error(Expected::Rule(NonTerminal::Start)).into());
        }
        if !self.at_eof() {
            return Err(ParseError::TrailingTokens {
                position: self.pos,
                tokens: self.tokens[self.pos..].iter().map(|t| t.text.clone()).collect(),
            });
        }
        Ok(())
    }

    /// Expand `rule` at the cursor.
    ///
    /// `Ok(None)` means no alternative applies and nothing was consumed.
    /// Recursion depth grows with nesting, so a very long prefix chain
    /// (tens of thousands of negations) can exhaust the thread's stack.
    fn derive(&mut self, rule: NonTerminal, parent: Option<NodeId>) -> Result<Option<NodeId>, SyntaxError> {
        self.steps += 1;
        let start = self.checkpoint();
        let node = self.tree.alloc(NodeLabel::Rule(rule), parent);
        let expanded = self.checkpoint();

        let grammar = self.grammar;
        for alternative in grammar.trial_order(rule) {
            if self.apply(alternative, node)? {
                trace!(rule = rule.name(), from = start.position, to = self.pos, "derived");
                return Ok(Some(node));
            }
            self.restore(expanded);
        }

        self.restore(start);
        Ok(None)
    }

    /// `Ok(false)` if the first symbol does not match; an error if a later one does not
    fn apply(&mut self, alternative: &Alternative, node: NodeId) -> Result<bool, SyntaxError> {
        let symbols = alternative.symbols();
        for (index, symbol) in symbols.iter().enumerate() {
            let matched = match symbol {
                Symbol::Terminal(text) if index == 0 && !self.at(text) => false,
                Symbol::Terminal(text) => {
                    self.expect(text, node)?;
                    true
                }
                Symbol::NonTerminal(rule) => self.derive(*rule, Some(node))?.is_some(),
            };
            if !matched {
                if index == 0 {
                    return Ok(false);
                }
                return Err(self.error(Expected::from(symbol)));
            }
        }
        Ok(true)
    }
}

impl From<&Symbol> for Expected {
    fn from(symbol: &Symbol) -> Self {
        match symbol {
            Symbol::Terminal(text) => Expected::Terminal(text.clone()),
            Symbol::NonTerminal(rule) => Expected::Rule(*rule),
        }
    }
}
