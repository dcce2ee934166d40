//! Huffman codes for text files.
//!
//! Counts the printable characters of a text, builds the Huffman tree for
//! those counts, derives a prefix-free code per character and measures the
//! size of the encoded text. The [`report`] module turns the result into a
//! code listing, a CSV table and a Graphviz drawing of the tree.
//!
//! ```
//! use huffman_report::Analysis;
//!
//! let analysis = Analysis::of_text("aaabbc", 6);
//! assert_eq!(analysis.stats.encoded_bits, 9);
//! assert!(analysis.codes.is_prefix_free());
//! ```

pub mod analysis;
pub mod frequency;
pub mod huffman;
pub mod huffman_encoder;
pub mod huffman_tree;
pub mod report;

pub use analysis::Analysis;
pub use frequency::FrequencyTable;
pub use huffman::{code_string, Code, CodeTable};
pub use huffman_encoder::{
    compression_ratio, encode, size_in_bytes, CompressionRatio, EncodedStream, EncodingStats,
    HuffmanEncoder,
};
pub use huffman_tree::{HuffmanTree, Node, NodeId};
