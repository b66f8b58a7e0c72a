//! # seq-prospector
//!
//! A library for searching a collection of named DNA sequences for
//! approximate substring matches.
//!
//! Genomes over the alphabet {A, C, G, T, N} are indexed by every
//! fixed-length substring they contain, keyed in a trie with the genome and
//! offset each substring came from. Two queries are answered on top of that
//! index:
//!
//! - **Fragment search**: which library genomes contain this DNA fragment,
//!   and at what position? Seeds found in the trie are extended rightward
//!   under a one-mismatch budget, and the single longest run per genome is
//!   reported.
//! - **Relatedness**: which library genomes are related to this query
//!   genome? The query is cut into fixed-length windows, each window is
//!   searched, and per-genome hit percentages above a threshold are
//!   reported in ranked order.
//!
//! ## Example
//!
//! ```rust
//! use seq_prospector::{Genome, GenomeMatcher};
//!
//! let mut matcher = GenomeMatcher::new(4);
//! matcher.add_genome(Genome::new("phix", "ACGTACGT"));
//!
//! // Exact search: the full fragment is present at offset 0.
//! let matches = matcher.find_genomes_with_this_dna("ACGTACGT", 4, true);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].genome_name, "phix");
//! assert_eq!(matches[0].length, 8);
//!
//! // Fuzzy search tolerates one mismatching base after the first.
//! let matches = matcher.find_genomes_with_this_dna("ACGTTCGT", 6, false);
//! assert_eq!(matches[0].length, 8);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: genome and result types
//! - [`index`]: the seed trie
//! - [`matching`]: the search engine
//! - [`parsing`]: the genome library file loader
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::genome::Genome;
pub use crate::core::types::{DnaMatch, GenomeId, GenomeMatch};
pub use crate::index::trie::Trie;
pub use crate::matching::engine::GenomeMatcher;
pub use crate::parsing::fasta::{parse_genome_file, parse_genome_reader, ParseError};
