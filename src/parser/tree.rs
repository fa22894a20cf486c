//! Arena-backed derivation tree
//!
//! Nodes live in one vector and refer to each other by [`NodeId`]. The
//! parser only ever appends, and backtracking truncates the arena to a
//! recorded length, so a failed alternative leaves nothing behind.

use std::fmt;

use smol_str::SmolStr;

use super::grammar::NonTerminal;
use crate::base::constants::{ESCAPE_MARKER, is_escaped};
use crate::render::RenderNode;

/// Index of a node in its [`DerivationTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    /// Interior node: one expansion of a nonterminal
    Rule(NonTerminal),
    /// Leaf: a terminal consumed from the stream, verbatim
    Token(SmolStr),
}

impl NodeLabel {
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(text) => Some(text),
            Self::Rule(_) => None,
        }
    }

    /// Label shown in rendered output. Escape-prefixed terminals gain an
    /// extra marker so graph tools print them literally.
    pub fn display_label(&self) -> String {
        match self {
            Self::Rule(rule) => rule.symbol().to_string(),
            Self::Token(text) if is_escaped(text) => format!("{}{}", ESCAPE_MARKER, text),
            Self::Token(text) => text.to_string(),
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => write!(f, "{}", rule),
            Self::Token(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    label: NodeLabel,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Derivation of one formula; the first node allocated is the root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivationTree {
    nodes: Vec<Node>,
}

impl DerivationTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc(&mut self, label: NodeLabel, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            label,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    /// Drop every node allocated after the arena had `len` nodes
    pub(crate) fn truncate(&mut self, len: usize) {
        while self.nodes.len() > len {
            let Some(node) = self.nodes.pop() else { break };
            // Parents precede children, and siblings are popped newest first.
            if let Some(parent) = node.parent {
                self.nodes[parent.index()].children.pop();
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    pub fn label(&self, id: NodeId) -> &NodeLabel {
        &self.nodes[id.index()].label
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in depth-first, left-to-right order
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// Terminals at the leaves, left to right
    pub fn leaves(&self) -> Vec<&str> {
        self.preorder()
            .into_iter()
            .filter_map(|id| self.label(id).as_token())
            .collect()
    }

    /// Compact bracketed form, e.g. `(S (P P ( (V x) , (V y) )))`
    pub fn to_sexp(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            self.write_sexp(root, &mut out);
        }
        out
    }

    fn write_sexp(&self, id: NodeId, out: &mut String) {
        match self.label(id) {
            NodeLabel::Token(text) => out.push_str(text),
            NodeLabel::Rule(rule) => {
                out.push('(');
                out.push_str(rule.symbol());
                for child in self.children(id) {
                    out.push(' ');
                    self.write_sexp(*child, out);
                }
                out.push(')');
            }
        }
    }

    /// Label tree for external renderers
    pub fn render(&self) -> Option<RenderNode> {
        self.root().map(|root| self.render_node(root))
    }

    fn render_node(&self, id: NodeId) -> RenderNode {
        RenderNode {
            label: self.label(id).display_label(),
            children: self
                .children(id)
                .iter()
                .map(|child| self.render_node(*child))
                .collect(),
        }
    }
}
