// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Meshspell CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meshspell::cli::{load_document, save_document, Reporter};
use meshspell::document::BlockRef;
use meshspell::spells;
use meshspell::DEFAULT_UV_TOLERANCE;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "meshspell")]
#[command(about = "Meshspell - mesh vertex compaction and topology remapping", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the spell registry
    List,

    /// Cast a spell on a block of a document
    Cast {
        /// Spell name, as printed by `list`
        spell: String,

        /// Document JSON file
        input: PathBuf,

        /// Target block number
        #[arg(short, long, default_value_t = 0)]
        block: usize,

        /// Output file (rewrites the input when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a vertex snapshot from a mesh block
    Export {
        /// Document JSON file
        input: PathBuf,

        /// Target block number
        #[arg(short, long, default_value_t = 0)]
        block: usize,

        /// Snapshot file to write (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a vertex snapshot into a mesh block by UV matching
    Import {
        /// Document JSON file
        input: PathBuf,

        /// Snapshot file to read
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Target block number
        #[arg(short, long, default_value_t = 0)]
        block: usize,

        /// UV match tolerance
        #[arg(short, long, default_value_t = DEFAULT_UV_TOLERANCE)]
        tolerance: f32,

        /// Output file (rewrites the input when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the block table of a document
    Info {
        /// Document JSON file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            Reporter::report_registry(&spells::registry());
            Ok(())
        }
        Commands::Cast {
            spell,
            input,
            block,
            output,
        } => cast(&spell, &input, block, output.as_deref()),
        Commands::Export {
            input,
            block,
            output,
        } => export(&input, block, output.as_deref()),
        Commands::Import {
            input,
            snapshot,
            block,
            tolerance,
            output,
        } => import(&input, &snapshot, block, tolerance, output.as_deref()),
        Commands::Info { input } => info(&input),
    }
}

fn cast(spell: &str, input: &Path, block: usize, output: Option<&Path>) -> Result<()> {
    let mut document = load_document(input)?;

    match spells::cast_by_name(&mut document, spell, BlockRef(block)) {
        Ok(outcome) => {
            Reporter::report_outcome(spell, &outcome);
            save_document(&document, output.unwrap_or(input))
        }
        Err(error) => {
            Reporter::report_error(spell, &error);
            Err(error).context("Spell failed; the document was not modified")
        }
    }
}

fn export(input: &Path, block: usize, output: Option<&Path>) -> Result<()> {
    let document = load_document(input)?;
    let text = spells::export_snapshot(&document, BlockRef(block))
        .context("Failed to export vertex snapshot")?;

    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn import(
    input: &Path,
    snapshot: &Path,
    block: usize,
    tolerance: f32,
    output: Option<&Path>,
) -> Result<()> {
    let mut document = load_document(input)?;
    let text = std::fs::read_to_string(snapshot)
        .with_context(|| format!("Failed to read {}", snapshot.display()))?;

    match spells::import_snapshot(&mut document, BlockRef(block), &text, tolerance) {
        Ok(report) => {
            Reporter::report_transplant(&report);
            save_document(&document, output.unwrap_or(input))
        }
        Err(error) => {
            Reporter::report_error("import", &error);
            Err(error).context("Import failed; the document was not modified")
        }
    }
}

fn info(input: &Path) -> Result<()> {
    let document = load_document(input)?;

    for (block, data) in document.iter() {
        let arrays: Vec<String> = data
            .arrays
            .iter()
            .map(|(name, array)| format!("{name}[{}]", array.len()))
            .collect();
        println!("{} {} {}", block, data.block_type, arrays.join(" "));
    }
    Ok(())
}
