//! Termsheet CLI - extract financial-contract entities from a DOCX term
//! sheet and emit the `{lines, entities}` result as JSON.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use termsheet_backend::Extractor;

#[derive(Parser, Debug)]
#[command(
    name = "termsheet",
    version,
    about = "Extract financial-contract entities from DOCX term sheets"
)]
struct Cli {
    /// Path to the .docx document to extract
    input: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write JSON to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let is_docx = cli
        .input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
    if !is_docx {
        bail!("invalid file format: only .docx files are supported");
    }

    let extraction = Extractor::new()
        .extract_file(&cli.input)
        .with_context(|| format!("failed to extract {}", cli.input.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&extraction)?
    } else {
        serde_json::to_string(&extraction)?
    };

    match cli.output {
        Some(path) => fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
