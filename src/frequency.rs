//! Symbol frequency counting.
//!
//! Only printable characters take part in coding: anything else is dropped
//! before it is counted and never reaches the encoder.

use std::collections::BTreeMap;

/// Upper bound (exclusive) of the symbol alphabet: the Basic Multilingual Plane.
pub const ALPHABET_END: u32 = 0x1_0000;

/// Whether `symbol` takes part in coding.
///
/// Approximates `iswprint` in a UTF-8 locale: code points below
/// [`ALPHABET_END`] that are not control characters (general category Cc).
/// Space is printable; tabs and line breaks are not.
pub fn is_printable(symbol: char) -> bool {
    (symbol as u32) < ALPHABET_END && !symbol.is_control()
}

/// Yields the printable characters of `text`, in order.
pub fn printable(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| is_printable(*c))
}

/// Sparse symbol -> count mapping. Every stored count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every printable symbol of `symbols`. Non-printable symbols are skipped.
    pub fn count<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut table = Self::new();
        for symbol in symbols.into_iter().filter(|c| is_printable(*c)) {
            *table.counts.entry(symbol).or_insert(0) += 1;
            table.total += 1;
        }
        table
    }

    pub fn get(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(symbol, count)` pairs in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    /// Shannon entropy of the distribution, in bits per symbol.
    ///
    /// Returns 0.0 for an empty or single-symbol table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        // p * log2(1/p) keeps every term non-negative, so no -0.0 can appear
        self.counts.values().fold(0.0, |sum, &count| {
            let p = count as f64 / total;
            sum + p * (total / count as f64).log2()
        })
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::count(iter)
    }
}
