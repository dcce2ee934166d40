use crate::frequency::{printable, FrequencyTable};
use crate::huffman::CodeTable;
use crate::huffman_encoder::{encode, EncodedStream, EncodingStats};
use crate::huffman_tree::HuffmanTree;

/// Everything computed for one input text, from counts to sizes.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub frequencies: FrequencyTable,
    /// `None` when the text has no printable symbols.
    pub tree: Option<HuffmanTree>,
    pub codes: CodeTable,
    pub stream: EncodedStream,
    pub stats: EncodingStats,
}

impl Analysis {
    /// Run the whole pipeline over `text`.
    ///
    /// `original_bytes` is the size the input had on disk, which can differ
    /// from `text.len()` once non-printable symbols are filtered out.
    pub fn of_text(text: &str, original_bytes: u64) -> Self {
        let frequencies = FrequencyTable::count(text.chars());
        let tree = HuffmanTree::build(&frequencies);
        let codes = CodeTable::generate(tree.as_ref());
        let stream = encode(printable(text), &codes);
        let stats = EncodingStats::measure(original_bytes, &stream);

        Self {
            frequencies,
            tree,
            codes,
            stream,
            stats,
        }
    }
}
