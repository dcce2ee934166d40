use std::io;

use crate::huffman_tree::{HuffmanTree, Node};

fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if c == '\\' || c == '"' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Graphviz digraph of the tree, nodes declared breadth-first.
///
/// Leaves are labelled `symbol - weight`, internal nodes with their weight,
/// and edges with the bit they stand for.
pub fn write_dot<W: io::Write>(out: &mut W, tree: Option<&HuffmanTree>) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;

    if let Some(tree) = tree {
        for id in tree.levels().into_iter().flatten() {
            match *tree.node(id) {
                Node::Leaf { symbol, weight } => {
                    let label = escape_label(&format!("{} - {}", symbol, weight));
                    writeln!(out, "    node{} [label=\"{}\"];", id, label)?;
                }
                Node::Internal {
                    weight,
                    left,
                    right,
                } => {
                    writeln!(out, "    node{} [label=\"{}\"];", id, weight)?;
                    writeln!(out, "    node{} -> node{} [label=\"0\"];", id, left)?;
                    writeln!(out, "    node{} -> node{} [label=\"1\"];", id, right)?;
                }
            }
        }
    }

    writeln!(out, "}}")
}
