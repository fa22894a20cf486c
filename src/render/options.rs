//! Rendering options

use crate::base::constants::DEFAULT_TREE_STEM;

/// Options for DOT output
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Name of the emitted `digraph`
    pub graph_name: String,
    /// Spaces before each statement
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_TREE_STEM.to_string(),
            indent: 4,
        }
    }
}

impl RenderOptions {
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    pub(crate) fn indentation(&self) -> String {
        " ".repeat(self.indent)
    }
}
