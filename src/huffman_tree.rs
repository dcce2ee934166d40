//! Huffman tree construction.
//!
//! The tree lives in an arena: nodes refer to their children by index, and
//! every child is pushed before its parent, so the root is always the last
//! node. Dropping the tree frees the whole arena at once.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::frequency::FrequencyTable;

/// Index of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
}

impl HuffmanTree {
    /// Build the tree for `table`, or `None` when the table is empty.
    ///
    /// The two lightest nodes are merged until one remains; the first one
    /// popped becomes the left child. Equal weights pop in creation order,
    /// and leaves are created in ascending symbol order, so the same table
    /// always yields the same tree.
    pub fn build(table: &FrequencyTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * table.len() - 1);
        let mut heap = BinaryHeap::with_capacity(table.len());

        for (symbol, weight) in table.iter() {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Leaf { symbol, weight });
        }

        while heap.len() > 1 {
            let Reverse((left_weight, left)) = heap.pop()?;
            let Reverse((right_weight, right)) = heap.pop()?;

            let weight = left_weight + right_weight;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Internal {
                weight,
                left,
                right,
            });
        }

        let tree = Self { nodes };
        log::debug!(
            "built huffman tree: {} leaves, {} nodes, depth {}",
            tree.leaf_count(),
            tree.len(),
            tree.depth()
        );
        Some(tree)
    }

    pub fn root(&self) -> NodeId {
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total weight, i.e. the number of symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.node(self.root()).weight()
    }

    /// Number of nodes, leaves and internal nodes alike.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Iterate `(id, node)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Length in edges of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        deepest
    }

    /// Node ids grouped by depth, breadth-first, left before right.
    pub fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels = Vec::new();
        let mut current = vec![self.root()];
        while !current.is_empty() {
            let next = current
                .iter()
                .filter_map(|&id| match self.nodes[id] {
                    Node::Internal { left, right, .. } => Some([left, right]),
                    Node::Leaf { .. } => None,
                })
                .flatten()
                .collect();
            levels.push(current);
            current = next;
        }
        levels
    }
}
