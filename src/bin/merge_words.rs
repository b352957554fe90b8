//! Merge a JSON glyph dump into words and lines
//!
//! Reads a document of the form
//! `{"elements": [...], "rulings": [...], "config": {...}}`
//! and prints one text line per output line.
//!
//! Usage:
//!   cargo run --release --bin merge_words -- glyphs.json
//!   cargo run --release --bin merge_words -- glyphs.json --json
//!   RUST_LOG=trace cargo run --bin merge_words -- glyphs.json

use pdf_wordseg::layout::group_by_lines;
use pdf_wordseg::{MergeConfig, Result, Ruling, TextElement, WordMerger};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Deserialize)]
struct MergeInput {
    elements: Vec<TextElement>,
    #[serde(default)]
    rulings: Vec<Ruling>,
    #[serde(default)]
    config: MergeConfig,
}

struct ToolConfig {
    input: PathBuf,
    json: bool,
}

impl ToolConfig {
    fn from_args() -> Option<Self> {
        let mut input = None;
        let mut json = false;

        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--json" => json = true,
                _ => input = Some(PathBuf::from(arg)),
            }
        }

        input.map(|input| Self { input, json })
    }
}

fn run(tool: &ToolConfig) -> Result<()> {
    let data = fs::read_to_string(&tool.input)?;
    let input: MergeInput = serde_json::from_str(&data)?;

    // Only vertical rulings separate columns
    let rulings: Vec<Ruling> = input
        .rulings
        .into_iter()
        .filter(Ruling::is_vertical)
        .collect();

    let merger = WordMerger::new(input.config);
    let start = Instant::now();
    let chunks = merger.merge(&input.elements, &rulings);
    log::info!(
        "Merged {} glyphs into {} chunks in {:?}",
        input.elements.len(),
        chunks.len(),
        start.elapsed()
    );

    if tool.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        for line in group_by_lines(chunks, merger.config().line_variance) {
            println!("{}", line.text());
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let Some(tool) = ToolConfig::from_args() else {
        eprintln!("Usage: merge_words <glyphs.json> [--json]");
        std::process::exit(2);
    };

    if let Err(e) = run(&tool) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
