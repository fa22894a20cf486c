//! Tree rendering
//!
//! A [`RenderNode`] is the plain label tree handed to renderers; the only
//! built-in renderer writes Graphviz DOT text.

mod dot;
mod options;

pub use dot::to_dot;
pub use options::RenderOptions;

/// Label tree produced from a derivation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct RenderNode {
    pub label: String,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(RenderNode::size).sum::<usize>()
    }

    #[cfg(feature = "interchange")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
