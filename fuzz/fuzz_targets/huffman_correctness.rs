#![no_main]

use huffman_report::frequency::printable;
use huffman_report::huffman_encoder::encode;
use huffman_report::{Analysis, CodeTable, FrequencyTable, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let frequencies = FrequencyTable::count(text.chars());
    let tree = HuffmanTree::build(&frequencies);
    let codes = CodeTable::generate(tree.as_ref());

    assert_eq!(codes.len(), frequencies.len());
    assert!(codes.is_prefix_free());
    if let Some(tree) = &tree {
        assert_eq!(tree.leaf_count(), frequencies.len());
        assert!(tree.depth() < frequencies.len().max(1));
    }

    let stream = encode(printable(text), &codes);
    assert_eq!(stream.dropped(), 0);
    assert_eq!(stream.bit_count(), codes.weighted_length(&frequencies));

    let analysis = Analysis::of_text(text, data.len() as u64);
    assert_eq!(analysis.stats.encoded_bits, stream.bit_count());
});
