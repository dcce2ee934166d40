//! Human readable and serialized views of a finished [`Analysis`].
//!
//! [`Analysis`]: crate::analysis::Analysis

mod csv;
mod dot;
mod render;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitStatus,
};

use thiserror::Error;

use crate::analysis::Analysis;
use crate::frequency::FrequencyTable;
use crate::huffman::{code_string, CodeTable};
use crate::huffman_tree::{HuffmanTree, Node};

pub use self::csv::write_csv;
pub use self::dot::write_dot;
pub use self::render::{render, RenderConfig};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to run `{program}`: {source}")]
    RenderSpawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with {status}")]
    RenderFailed { program: String, status: ExitStatus },
}

/// Where the report files go and how the tree gets drawn.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub csv_path: PathBuf,
    pub dot_path: PathBuf,
    /// `None` skips drawing the tree.
    pub render: Option<RenderConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("Huffman_Codes.csv"),
            dot_path: PathBuf::from("huffman_tree.dot"),
            render: Some(RenderConfig::default()),
        }
    }
}

/// Write the CSV and DOT files. Rendering is left to the caller, since a
/// missing Graphviz install should not cost the files already written.
pub fn export(config: &ReportConfig, analysis: &Analysis) -> Result<(), ReportError> {
    let mut csv = BufWriter::new(File::create(&config.csv_path)?);
    write_csv(
        &mut csv,
        &analysis.codes,
        &analysis.frequencies,
        &analysis.stats,
    )?;
    csv.flush()?;
    log::info!("wrote {}", config.csv_path.display());

    let mut dot = BufWriter::new(File::create(&config.dot_path)?);
    write_dot(&mut dot, analysis.tree.as_ref())?;
    dot.flush()?;
    log::info!("wrote {}", config.dot_path.display());

    Ok(())
}

/// One line per tree level, listing the leaves found there as `symbol (weight)`.
pub fn write_leaf_levels<W: Write>(out: &mut W, tree: Option<&HuffmanTree>) -> io::Result<()> {
    let Some(tree) = tree else {
        return Ok(());
    };
    for level in tree.levels() {
        for id in level {
            if let Node::Leaf { symbol, weight } = *tree.node(id) {
                write!(out, "{} ({}) ", symbol, weight)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_code_listing<W: Write>(
    out: &mut W,
    codes: &CodeTable,
    frequencies: &FrequencyTable,
) -> io::Result<()> {
    writeln!(out, "Symbol - Frequency - Code")?;
    for (symbol, code) in codes.iter() {
        writeln!(
            out,
            "{} - {} - {}",
            symbol,
            frequencies.get(symbol),
            code_string(code)
        )?;
    }
    Ok(())
}
