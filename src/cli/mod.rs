//! Command-line interface for seq-prospector.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: find library genomes containing a DNA fragment
//! - **relate**: rank library genomes by relatedness to a query genome
//! - **library**: list the genomes in library files
//!
//! ## Usage
//!
//! ```text
//! # Which genomes contain this fragment, and where?
//! seq-prospector search library.fa --fragment ACGTACGTAA
//!
//! # Tolerate one mismatching base after the first
//! seq-prospector search library.fa --fragment ACGTACGTAA --fuzzy
//!
//! # Rank the library against a query genome
//! seq-prospector relate library.fa --query sample.fa --threshold 20
//!
//! # JSON output for scripting
//! seq-prospector search library.fa.gz --fragment ACGTACGTAA --format json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::matching::engine::GenomeMatcher;
use crate::parsing::fasta::parse_genome_file;

pub mod library;
pub mod relate;
pub mod search;

#[derive(Parser)]
#[command(name = "seq-prospector")]
#[command(version)]
#[command(about = "Search a library of DNA genomes for fragments and related genomes")]
#[command(
    long_about = "seq-prospector indexes a library of named DNA sequences for approximate substring search.\n\nIt answers two questions:\n- Which library genomes contain this DNA fragment, and at what position? (optionally with one-mismatch tolerance)\n- Which library genomes are related to this query genome, and how closely?"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find library genomes containing a DNA fragment
    Search(search::SearchArgs),

    /// Rank library genomes by relatedness to a query genome
    Relate(relate::RelateArgs),

    /// List the genomes in library files
    Library(library::LibraryArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load every library file into a fresh matcher.
pub(crate) fn load_matcher(
    paths: &[PathBuf],
    seed_length: usize,
    verbose: bool,
) -> anyhow::Result<GenomeMatcher> {
    let mut matcher = GenomeMatcher::new(seed_length);
    let mut total = 0usize;
    for path in paths {
        let genomes = parse_genome_file(path)
            .with_context(|| format!("failed to load genome file {}", path.display()))?;
        total += genomes.len();
        for genome in genomes {
            matcher.add_genome(genome);
        }
    }
    if verbose {
        eprintln!("Loaded {total} genomes from {} file(s)", paths.len());
    }
    Ok(matcher)
}
