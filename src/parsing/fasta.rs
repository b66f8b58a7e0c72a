//! Loader for genome library files.
//!
//! The format is FASTA-like: each record is a `>` name line followed by one
//! or more base lines over {A, C, G, T, N} in either case (stored
//! uppercase). Parsing is strict and all-or-nothing: a malformed line
//! rejects the whole stream and no partial library is produced. Rejected
//! streams are:
//!
//! - a stream whose first line is not a `>` name line
//! - a name line with an empty name
//! - a name line followed by no base line (another name line, or end of
//!   stream)
//! - any blank line
//! - a base line containing a byte outside the alphabet
//!
//! An empty stream parses to an empty library, and end-of-stream cleanly
//! terminates a record that has at least one base. Files ending in `.gz`
//! are read through a gzip decoder.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::genome::Genome;
use crate::utils::validation::is_valid_base;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected a '>' name line before any base line")]
    MissingHeader { line: usize },

    #[error("line {line}: name line has no name")]
    EmptyName { line: usize },

    #[error("line {line}: blank line")]
    BlankLine { line: usize },

    #[error("line {line}: invalid base {symbol:?}")]
    InvalidBase { line: usize, symbol: char },

    #[error("genome {name:?} has no base lines")]
    MissingSequence { name: String },
}

/// Parse a genome library file. `.gz` paths are decompressed on the fly.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the rejection
/// the stream triggered (see the module docs for the rules).
pub fn parse_genome_file(path: &Path) -> Result<Vec<Genome>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        parse_genome_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_genome_reader(BufReader::new(file))
    }
}

#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Parse a genome library from any buffered reader.
///
/// Carriage returns before the newline are stripped, so CRLF input parses
/// the same as LF input.
///
/// # Errors
///
/// Returns `ParseError::Io` on a read failure, or the rejection the stream
/// triggered (see the module docs for the rules).
pub fn parse_genome_reader<R: BufRead>(reader: R) -> Result<Vec<Genome>, ParseError> {
    let mut genomes = Vec::new();
    let mut current: Option<(String, String)> = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let number = number + 1;

        if line.is_empty() {
            return Err(ParseError::BlankLine { line: number });
        }

        if let Some(name) = line.strip_prefix('>') {
            if name.is_empty() {
                return Err(ParseError::EmptyName { line: number });
            }
            if let Some(genome) = finish_record(current.take())? {
                genomes.push(genome);
            }
            current = Some((name.to_string(), String::new()));
        } else {
            let Some((_, sequence)) = current.as_mut() else {
                return Err(ParseError::MissingHeader { line: number });
            };
            for symbol in line.chars() {
                if !symbol.is_ascii() || !is_valid_base((symbol as u8).to_ascii_uppercase()) {
                    return Err(ParseError::InvalidBase {
                        line: number,
                        symbol,
                    });
                }
            }
            sequence.push_str(line);
        }
    }

    if let Some(genome) = finish_record(current)? {
        genomes.push(genome);
    }

    debug!(genomes = genomes.len(), "parsed genome library stream");
    Ok(genomes)
}

/// Close out the record in progress, rejecting a name with no bases.
fn finish_record(record: Option<(String, String)>) -> Result<Option<Genome>, ParseError> {
    match record {
        None => Ok(None),
        Some((name, sequence)) => {
            if sequence.is_empty() {
                return Err(ParseError::MissingSequence { name });
            }
            Ok(Some(Genome::new(name, sequence)))
        }
    }
}
