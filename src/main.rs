use std::{
    borrow::Cow,
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use huffman_report::{
    report::{self, RenderConfig, ReportConfig, ReportError},
    Analysis,
};

/// Build the Huffman code of a text file and report codes, sizes and the tree.
#[derive(Parser, Debug)]
#[command(name = "huffman-report")]
#[command(version)]
struct Cli {
    /// Text file to analyse (UTF-8)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Code table output
    #[arg(long, default_value = "Huffman_Codes.csv")]
    csv: PathBuf,

    /// Graphviz description of the tree
    #[arg(long, default_value = "huffman_tree.dot")]
    dot: PathBuf,

    /// Output format handed to the renderer as -T<format>
    #[arg(short = 'T', long, default_value = "x11")]
    format: String,

    /// Graphviz layout program used to draw the tree
    #[arg(long, default_value = "dot")]
    renderer: String,

    /// Write the DOT file without drawing it
    #[arg(long)]
    no_render: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            csv_path: self.csv.clone(),
            dot_path: self.dot.clone(),
            render: (!self.no_render).then(|| RenderConfig {
                program: self.renderer.clone(),
                format: self.format.clone(),
            }),
        }
    }
}

fn run(cli: &Cli) -> Result<(), ReportError> {
    let bytes = fs::read(&cli.input)?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!(
            "{} is not valid UTF-8, invalid sequences were replaced",
            cli.input.display()
        );
    }

    let analysis = Analysis::of_text(&text, bytes.len() as u64);
    if analysis.stats.dropped > 0 {
        log::warn!("{} symbols had no code", analysis.stats.dropped);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Huffman tree (leaves by level):")?;
    report::write_leaf_levels(&mut out, analysis.tree.as_ref())?;
    writeln!(out)?;
    report::write_code_listing(&mut out, &analysis.codes, &analysis.frequencies)?;
    writeln!(out)?;

    let stats = &analysis.stats;
    writeln!(out, "Original size: {} bytes", stats.original_bytes)?;
    writeln!(
        out,
        "Encoded size: {} bytes ({} bits)",
        stats.encoded_bytes, stats.encoded_bits
    )?;
    writeln!(out, "Ratio: {}", stats.ratio)?;
    writeln!(
        out,
        "Entropy: {:.4} bits/symbol, average code length: {:.4} bits/symbol",
        analysis.frequencies.entropy(),
        analysis.codes.average_length(&analysis.frequencies)
    )?;
    out.flush()?;

    let config = cli.report_config();
    report::export(&config, &analysis)?;

    match (&config.render, &analysis.tree) {
        (Some(render), Some(_)) => {
            if let Err(e) = report::render(render, &config.dot_path) {
                log::warn!("could not draw the tree: {}", e);
            }
        }
        (Some(_), None) => log::info!("empty tree, nothing to draw"),
        (None, _) => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
