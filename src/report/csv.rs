use std::{borrow::Cow, io};

use crate::frequency::FrequencyTable;
use crate::huffman::{code_string, CodeTable};
use crate::huffman_encoder::EncodingStats;

/// Quote a field when it would otherwise be misread.
fn escape_field(field: &str) -> Cow<'_, str> {
    let needs_quotes = field.contains([',', '"', '\n', '\r'])
        || field.starts_with(char::is_whitespace)
        || field.ends_with(char::is_whitespace);
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Code table followed by the size summary.
pub fn write_csv<W: io::Write>(
    out: &mut W,
    codes: &CodeTable,
    frequencies: &FrequencyTable,
    stats: &EncodingStats,
) -> io::Result<()> {
    writeln!(out, "Symbol,Frequency,Code")?;
    let mut buf = [0u8; 4];
    for (symbol, code) in codes.iter() {
        writeln!(
            out,
            "{},{},{}",
            escape_field(symbol.encode_utf8(&mut buf)),
            frequencies.get(symbol),
            code_string(code)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Original size (bytes),{}", stats.original_bytes)?;
    writeln!(out, "Encoded size (bytes),{}", stats.encoded_bytes)?;
    match stats.ratio.percent() {
        Some(percent) => writeln!(out, "Ratio (%),{:.2}", percent),
        None => writeln!(out, "Ratio (%),{}", stats.ratio),
    }
}
