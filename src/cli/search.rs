use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::DnaMatch;

#[derive(Args)]
pub struct SearchArgs {
    /// Genome library files (FASTA-like, optionally gzipped)
    #[arg(required = true)]
    pub library: Vec<PathBuf>,

    /// DNA fragment to search for
    #[arg(short = 'd', long)]
    pub fragment: String,

    /// Seed width used to index the library
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub seed_length: u32,

    /// Shortest run worth reporting; defaults to the fragment length
    #[arg(short = 'l', long)]
    pub min_length: Option<usize>,

    /// Allow one mismatching base after the first
    #[arg(long)]
    pub fuzzy: bool,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if a library file cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let matcher = super::load_matcher(&args.library, args.seed_length as usize, verbose)?;

    let fragment = args.fragment.to_ascii_uppercase();
    let minimum_length = args.min_length.unwrap_or(fragment.len());

    if verbose {
        eprintln!(
            "Searching {} genomes for a {}-base fragment (minimum run {minimum_length})",
            matcher.genomes().len(),
            fragment.len(),
        );
    }

    let matches = matcher.find_genomes_with_this_dna(&fragment, minimum_length, !args.fuzzy);

    if matches.is_empty() {
        eprintln!("No matching genomes found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&matches),
        OutputFormat::Json => print_json_results(&matches)?,
    }

    Ok(())
}

fn print_text_results(matches: &[DnaMatch]) {
    println!("{:<30} {:>8} {:>10}", "GENOME", "LENGTH", "POSITION");
    for m in matches {
        println!("{:<30} {:>8} {:>10}", m.genome_name, m.length, m.position);
    }
}

fn print_json_results(matches: &[DnaMatch]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(matches)?);
    Ok(())
}
