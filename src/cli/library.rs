use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::genome::Genome;
use crate::parsing::fasta::parse_genome_file;

#[derive(Args)]
pub struct LibraryArgs {
    /// Genome library files (FASTA-like, optionally gzipped)
    #[arg(required = true)]
    pub library: Vec<PathBuf>,
}

#[derive(Serialize)]
struct LibraryEntry<'a> {
    name: &'a str,
    length: usize,
}

/// Execute library subcommand
///
/// # Errors
///
/// Returns an error if a library file cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LibraryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut genomes: Vec<Genome> = Vec::new();
    for path in &args.library {
        let mut parsed = parse_genome_file(path)?;
        if verbose {
            eprintln!("{}: {} genome(s)", path.display(), parsed.len());
        }
        genomes.append(&mut parsed);
    }

    match format {
        OutputFormat::Text => {
            println!("{:<30} {:>10}", "GENOME", "BASES");
            for genome in &genomes {
                println!("{:<30} {:>10}", genome.name(), genome.len());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<LibraryEntry<'_>> = genomes
                .iter()
                .map(|genome| LibraryEntry {
                    name: genome.name(),
                    length: genome.len(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
