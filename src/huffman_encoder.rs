use std::fmt;

use bitvec::prelude::*;

use crate::huffman::CodeTable;

/// Number of bytes needed to store `bit_count` bits.
pub fn size_in_bytes(bit_count: u64) -> u64 {
    bit_count.div_ceil(8)
}

/// Encoded size as a percentage of the original size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompressionRatio {
    Percent(f64),
    /// The original was empty, so there is nothing to compare against.
    Undefined,
}

impl CompressionRatio {
    pub fn percent(&self) -> Option<f64> {
        match self {
            CompressionRatio::Percent(p) => Some(*p),
            CompressionRatio::Undefined => None,
        }
    }
}

impl fmt::Display for CompressionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionRatio::Percent(p) => write!(f, "{:.2}%", p),
            CompressionRatio::Undefined => write!(f, "undefined"),
        }
    }
}

pub fn compression_ratio(original_bytes: u64, encoded_bytes: u64) -> CompressionRatio {
    if original_bytes == 0 {
        return CompressionRatio::Undefined;
    }
    CompressionRatio::Percent(encoded_bytes as f64 / original_bytes as f64 * 100.0)
}

/// The bits of an encoded text. Never written anywhere; only measured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream {
    bits: BitVec<u8, Msb0>,
    dropped: u64,
}

impl EncodedStream {
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn bit_count(&self) -> u64 {
        self.bits.len() as u64
    }

    pub fn byte_count(&self) -> u64 {
        size_in_bytes(self.bit_count())
    }

    /// Symbols that had no code and were left out.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

pub struct HuffmanEncoder<'a> {
    codes: &'a CodeTable,
    compressed: BitVec<u8, Msb0>,
    dropped: u64,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(codes: &'a CodeTable) -> Self {
        Self {
            codes,
            compressed: BitVec::new(),
            dropped: 0,
        }
    }

    /// Append the code of every symbol. Symbols without a code are counted and skipped.
    pub fn pack<I: IntoIterator<Item = char>>(&mut self, symbols: I) {
        for symbol in symbols {
            match self.codes.get(symbol) {
                Some(code) => self.compressed.extend_from_bitslice(code.as_bitslice()),
                None => self.dropped += 1,
            }
        }
    }

    pub fn finish(self) -> EncodedStream {
        EncodedStream {
            bits: self.compressed,
            dropped: self.dropped,
        }
    }
}

pub fn encode<I: IntoIterator<Item = char>>(symbols: I, codes: &CodeTable) -> EncodedStream {
    let mut encoder = HuffmanEncoder::new(codes);
    encoder.pack(symbols);
    encoder.finish()
}

/// Size figures for one encoded input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingStats {
    pub original_bytes: u64,
    pub encoded_bits: u64,
    pub encoded_bytes: u64,
    pub dropped: u64,
    pub ratio: CompressionRatio,
}

impl EncodingStats {
    pub fn measure(original_bytes: u64, stream: &EncodedStream) -> Self {
        let encoded_bytes = stream.byte_count();
        Self {
            original_bytes,
            encoded_bits: stream.bit_count(),
            encoded_bytes,
            dropped: stream.dropped(),
            ratio: compression_ratio(original_bytes, encoded_bytes),
        }
    }
}
