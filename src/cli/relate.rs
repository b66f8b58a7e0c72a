use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::GenomeMatch;
use crate::parsing::fasta::parse_genome_file;

#[derive(Args)]
pub struct RelateArgs {
    /// Genome library files (FASTA-like, optionally gzipped)
    #[arg(required = true)]
    pub library: Vec<PathBuf>,

    /// Query genome file; the first record is the query
    #[arg(short, long)]
    pub query: PathBuf,

    /// Seed width used to index the library
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub seed_length: u32,

    /// Window length the query is cut into
    #[arg(short = 'w', long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..))]
    pub fragment_length: u32,

    /// Report genomes whose match percentage strictly exceeds this (0-100)
    #[arg(short, long, default_value = "20.0")]
    pub threshold: f64,

    /// Allow one mismatching base per window after its first
    #[arg(long)]
    pub fuzzy: bool,
}

/// Execute relate subcommand
///
/// # Errors
///
/// Returns an error if a file cannot be parsed, the query file holds no
/// genomes, or the threshold is out of range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RelateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !(0.0..=100.0).contains(&args.threshold) {
        anyhow::bail!("--threshold must be between 0 and 100, got {}", args.threshold);
    }

    let matcher = super::load_matcher(&args.library, args.seed_length as usize, verbose)?;

    let mut query_genomes = parse_genome_file(&args.query)?;
    if query_genomes.is_empty() {
        anyhow::bail!("query file {} contains no genomes", args.query.display());
    }
    if query_genomes.len() > 1 {
        eprintln!(
            "Warning: query file has {} genomes; using the first ({})",
            query_genomes.len(),
            query_genomes[0].name()
        );
    }
    let query = query_genomes.swap_remove(0);

    if verbose {
        eprintln!(
            "Relating {} ({} bases) to {} library genomes in {}-base windows",
            query.name(),
            query.len(),
            matcher.genomes().len(),
            args.fragment_length,
        );
    }

    let results = matcher.find_related_genomes(
        &query,
        args.fragment_length as usize,
        !args.fuzzy,
        args.threshold,
    );

    if results.is_empty() {
        eprintln!("No related genomes found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results)?,
    }

    Ok(())
}

fn print_text_results(results: &[GenomeMatch]) {
    println!("{:<30} {:>8}", "GENOME", "MATCH");
    for r in results {
        println!("{:<30} {:>7.2}%", r.genome_name, r.percent_match);
    }
}

fn print_json_results(results: &[GenomeMatch]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
