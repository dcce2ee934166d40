use std::collections::BTreeMap;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::frequency::FrequencyTable;
use crate::huffman_tree::{HuffmanTree, Node, NodeId};

/// A code word, most significant (first emitted) bit first.
pub type Code = BitVec<u8, Msb0>;

/// Symbol -> code word, derived from a [`HuffmanTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Assign each leaf the path leading to it: `0` for left, `1` for right.
    ///
    /// A missing tree gives an empty table; a tree that is a single leaf maps
    /// its symbol to the empty code.
    pub fn generate(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = BTreeMap::new();

        if let Some(tree) = tree {
            let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::new())];
            while let Some((id, prefix)) = stack.pop() {
                match *tree.node(id) {
                    Node::Leaf { symbol, .. } => {
                        codes.insert(symbol, prefix);
                    }
                    Node::Internal { left, right, .. } => {
                        let mut right_code = prefix.clone();
                        right_code.push(true);
                        stack.push((right, right_code));

                        let mut left_code = prefix;
                        left_code.push(false);
                        stack.push((left, left_code));
                    }
                }
            }
        }

        log::debug!("generated {} codes", codes.len());
        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// True when no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        // a prefix sorts directly before the codes it starts
        self.codes
            .values()
            .sorted()
            .tuple_windows()
            .all(|(shorter, longer)| !longer.starts_with(shorter.as_bitslice()))
    }

    /// Sum of `count * code length` over every symbol of `frequencies`.
    ///
    /// This is the size in bits of the text `frequencies` was counted from.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum()
    }

    /// Average code length in bits per symbol, 0.0 for an empty text.
    pub fn average_length(&self, frequencies: &FrequencyTable) -> f64 {
        match frequencies.total() {
            0 => 0.0,
            total => self.weighted_length(frequencies) as f64 / total as f64,
        }
    }
}

/// Render a code as a string of `0` and `1`.
pub fn code_string(code: &BitSlice<u8, Msb0>) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_for(text: &str) -> (FrequencyTable, CodeTable) {
        let frequencies = FrequencyTable::count(text.chars());
        let tree = HuffmanTree::build(&frequencies);
        let codes = CodeTable::generate(tree.as_ref());
        (frequencies, codes)
    }

    fn code_of(codes: &CodeTable, symbol: char) -> String {
        code_string(codes.get(symbol).unwrap())
    }

    #[test]
    fn test_empty_tree() {
        let codes = CodeTable::generate(None);
        assert!(codes.is_empty());
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_single_symbol_gets_empty_code() {
        let (frequencies, codes) = codes_for("qqqqq");
        assert_eq!(codes.len(), 1);
        assert!(codes.get('q').unwrap().is_empty());
        assert_eq!(codes.weighted_length(&frequencies), 0);
        assert_eq!(codes.average_length(&frequencies), 0.0);
    }

    #[test]
    fn test_aaabbc() {
        let (frequencies, codes) = codes_for("aaabbc");
        assert_eq!(codes.len(), 3);
        assert!(codes.is_prefix_free());

        assert_eq!(code_of(&codes, 'a'), "0");
        assert_eq!(code_of(&codes, 'c'), "10");
        assert_eq!(code_of(&codes, 'b'), "11");

        assert_eq!(codes.weighted_length(&frequencies), 9);
        assert!((codes.average_length(&frequencies) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_entry_per_symbol() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit";
        let (frequencies, codes) = codes_for(text);
        assert_eq!(codes.len(), frequencies.len());
        assert!(codes.is_prefix_free());
        for (symbol, _) in frequencies.iter() {
            assert!(codes.get(symbol).is_some());
        }
    }

    #[test]
    fn test_average_length_bounded_by_entropy() {
        let (frequencies, codes) = codes_for("abracadabra alakazam");
        let entropy = frequencies.entropy();
        let average = codes.average_length(&frequencies);
        assert!(average >= entropy);
        assert!(average < entropy + 1.0);
    }

    #[test]
    fn test_prefix_free_detection() {
        let mut codes = BTreeMap::new();
        codes.insert('a', bitvec![u8, Msb0; 0]);
        codes.insert('b', bitvec![u8, Msb0; 0, 1]);
        assert!(!CodeTable { codes }.is_prefix_free());

        let mut codes = BTreeMap::new();
        codes.insert('a', bitvec![u8, Msb0; 1, 0]);
        codes.insert('b', bitvec![u8, Msb0; 1, 0]);
        assert!(!CodeTable { codes }.is_prefix_free());
    }

    #[test]
    fn test_code_string() {
        assert_eq!(code_string(bits![u8, Msb0; 1, 0, 1, 1]), "1011");
        assert_eq!(code_string(&Code::new()), "");
    }
}
