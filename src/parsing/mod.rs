//! Parsers for genome library files.

pub mod fasta;
