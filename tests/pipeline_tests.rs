//! End-to-end scenarios through the library pipeline and the report writers.

use huffman_report::report::{self, ReportConfig};
use huffman_report::{
    code_string, compression_ratio, size_in_bytes, Analysis, CompressionRatio, HuffmanTree, Node,
};

#[test]
fn aaabbc_scenario() {
    let analysis = Analysis::of_text("aaabbc", 6);

    let tree = analysis.tree.as_ref().expect("non-empty input has a tree");
    assert_eq!(tree.leaf_count(), 3);
    assert!(analysis.codes.is_prefix_free());

    let len = |symbol| analysis.codes.get(symbol).unwrap().len() as u64;
    assert_eq!(len('a'), 1);
    assert_eq!(len('b'), 2);
    assert_eq!(len('c'), 2);

    let b = code_string(analysis.codes.get('b').unwrap());
    let c = code_string(analysis.codes.get('c').unwrap());
    assert_eq!(b[..1], c[..1]);
    assert_ne!(b, c);

    assert_eq!(analysis.stats.encoded_bits, 3 * len('a') + 2 * len('b') + len('c'));
    assert_eq!(analysis.stats.encoded_bits, 9);
}

#[test]
fn empty_input_scenario() {
    let analysis = Analysis::of_text("", 0);
    assert!(analysis.tree.is_none());
    assert!(analysis.codes.is_empty());
    assert_eq!(analysis.stream.bit_count(), 0);
    assert_eq!(analysis.stats.ratio, CompressionRatio::Undefined);
    assert_eq!(analysis.stats.ratio.to_string(), "undefined");
}

#[test]
fn only_non_printable_input() {
    let analysis = Analysis::of_text("\n\n\t\r\n", 5);
    assert!(analysis.tree.is_none());
    assert_eq!(analysis.stats.encoded_bytes, 0);
    assert_eq!(analysis.stats.ratio, CompressionRatio::Percent(0.0));
}

#[test]
fn single_symbol_scenario() {
    let analysis = Analysis::of_text("xxxxxxxxxxxxxxxx", 16);
    let tree = analysis.tree.as_ref().unwrap();
    assert!(matches!(
        *tree.node(tree.root()),
        Node::Leaf {
            symbol: 'x',
            weight: 16
        }
    ));
    assert_eq!(analysis.codes.get('x').map(|code| code.len()), Some(0));
    assert_eq!(analysis.stats.encoded_bits, 0);
    assert_eq!(size_in_bytes(analysis.stats.encoded_bits), 0);
}

#[test]
fn zero_original_size_is_never_nan() {
    for encoded in [0, 1, 100] {
        let ratio = compression_ratio(0, encoded);
        assert_eq!(ratio, CompressionRatio::Undefined);
        assert!(ratio.percent().is_none());
    }
}

#[test]
fn multibyte_text() {
    let text = "ação é coração";
    let analysis = Analysis::of_text(text, text.len() as u64);
    assert!(analysis.codes.get('ç').is_some());
    assert!(analysis.codes.is_prefix_free());
    assert_eq!(
        analysis.stats.encoded_bits,
        analysis.codes.weighted_length(&analysis.frequencies)
    );
    // fewer bits than the UTF-8 encoding
    assert!(analysis.stats.encoded_bytes < analysis.stats.original_bytes);
}

#[test]
fn reports_written_for_lipsum() {
    let text = lipsum::lipsum(500);
    let analysis = Analysis::of_text(&text, text.len() as u64);

    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        csv_path: dir.path().join("codes.csv"),
        dot_path: dir.path().join("tree.dot"),
        render: None,
    };
    report::export(&config, &analysis).unwrap();

    let csv = std::fs::read_to_string(&config.csv_path).unwrap();
    let rows = csv.lines().take_while(|line| !line.is_empty()).count();
    assert_eq!(rows, 1 + analysis.codes.len());

    let dot = std::fs::read_to_string(&config.dot_path).unwrap();
    let tree: &HuffmanTree = analysis.tree.as_ref().unwrap();
    let declarations = dot
        .lines()
        .filter(|line| line.contains("[label=\"") && !line.contains("->"))
        .count();
    let edges = dot.lines().filter(|line| line.contains("->")).count();
    assert_eq!(declarations, tree.len());
    assert_eq!(edges, tree.len() - 1);
}
