//! Graphviz DOT writer

use std::fmt::Write;

use super::{RenderNode, RenderOptions};

/// Render `root` as a DOT digraph. Nodes are named `n0`, `n1`, ... in
/// depth-first order; labels keep their text with `"` escaped.
pub fn to_dot(root: &RenderNode, options: &RenderOptions) -> String {
    let indent = options.indentation();
    let mut out = String::new();
    let _ = writeln!(out, "digraph {} {{", quote(&options.graph_name));
    let mut next_id = 0;
    write_node(root, &indent, &mut next_id, &mut out);
    out.push_str("}\n");
    out
}

fn write_node(node: &RenderNode, indent: &str, next_id: &mut usize, out: &mut String) -> usize {
    let id = *next_id;
    *next_id += 1;
    let _ = writeln!(out, "{}n{} [label={}];", indent, id, quote(&node.label));
    for child in &node.children {
        let child_id = write_node(child, indent, next_id, out);
        let _ = writeln!(out, "{}n{} -> n{};", indent, id, child_id);
    }
    id
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_numbers_nodes_depth_first() {
        let tree = RenderNode {
            label: "S".to_string(),
            children: vec![
                RenderNode::leaf("\\\\neg"),
                RenderNode {
                    label: "S".to_string(),
                    children: vec![RenderNode::leaf("x")],
                },
            ],
        };
        let dot = to_dot(&tree, &RenderOptions::default());
        let expected = "digraph \"parse_tree\" {\n    n0 [label=\"S\"];\n    n1 [label=\"\\\\neg\"];\n    n0 -> n1;\n    n2 [label=\"S\"];\n    n3 [label=\"x\"];\n    n2 -> n3;\n    n0 -> n2;\n}\n";
        assert_eq!(dot, expected);
        assert_eq!(tree.size(), 4);
    }

    #[test]
    fn test_dot_escapes_quotes_and_uses_options() {
        let options = RenderOptions {
            graph_name: "file".to_string(),
            indent: 0,
        };
        let dot = to_dot(&RenderNode::leaf("a\"b"), &options);
        assert_eq!(dot, "digraph \"file\" {\nn0 [label=\"a\\\"b\"];\n}\n");
    }
}
