//! Robustness tests for the genome library loader: every rejection rule,
//! compressed input, and line-ending quirks.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;

use seq_prospector::{parse_genome_file, parse_genome_reader, ParseError};

fn parse(input: &str) -> Result<Vec<seq_prospector::Genome>, ParseError> {
    parse_genome_reader(std::io::Cursor::new(input))
}

#[test]
fn test_parse_plain_file_from_disk() {
    let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
    temp.write_all(b">alpha\nACGTACGT\nACGT\n>beta\nGGNN\n")
        .unwrap();
    temp.flush().unwrap();

    let genomes = parse_genome_file(temp.path()).unwrap();
    assert_eq!(genomes.len(), 2);
    assert_eq!(genomes[0].name(), "alpha");
    assert_eq!(genomes[0].len(), 12);
    assert_eq!(genomes[1].sequence(), "GGNN");
}

#[test]
fn test_parse_gzipped_file_from_disk() {
    let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b">zipped\nacgtn\n").unwrap();
    temp.write_all(&encoder.finish().unwrap()).unwrap();
    temp.flush().unwrap();

    let genomes = parse_genome_file(temp.path()).unwrap();
    assert_eq!(genomes.len(), 1);
    assert_eq!(genomes[0].name(), "zipped");
    assert_eq!(genomes[0].sequence(), "ACGTN");
}

#[test]
fn test_missing_file_reports_io_error() {
    let result = parse_genome_file(std::path::Path::new("/no/such/file.fa"));
    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn test_record_names_keep_their_whole_line() {
    let genomes = parse(">Escherichia coli K-12 | plasmid 1\nACGT\n").unwrap();
    assert_eq!(genomes[0].name(), "Escherichia coli K-12 | plasmid 1");
}

#[test]
fn test_every_rejection_rule_rejects_the_whole_stream() {
    // (input, expected failure) - no case may yield a partial library
    let cases: Vec<(&str, fn(&ParseError) -> bool)> = vec![
        ("ACGT\n", |e| matches!(e, ParseError::MissingHeader { line: 1 })),
        (">\nACGT\n", |e| matches!(e, ParseError::EmptyName { line: 1 })),
        (">g\n\nACGT\n", |e| matches!(e, ParseError::BlankLine { line: 2 })),
        (">g\nACGT\n\nACGT\n", |e| {
            matches!(e, ParseError::BlankLine { line: 3 })
        }),
        (">g\nACGT\n\n>h\nACGT\n", |e| {
            matches!(e, ParseError::BlankLine { line: 3 })
        }),
        (">g\n>h\nACGT\n", |e| matches!(e, ParseError::MissingSequence { .. })),
        (">g\nACGT\n>h\n", |e| matches!(e, ParseError::MissingSequence { .. })),
        (">g\nACGTQ\n", |e| {
            matches!(
                e,
                ParseError::InvalidBase {
                    line: 2,
                    symbol: 'Q'
                }
            )
        }),
        (">good\nACGT\n>bad\nAC-GT\n", |e| {
            matches!(e, ParseError::InvalidBase { line: 4, .. })
        }),
    ];

    for (input, expected) in cases {
        match parse(input) {
            Err(error) => assert!(expected(&error), "input {input:?} gave {error}"),
            Ok(genomes) => panic!("input {input:?} parsed into {} genomes", genomes.len()),
        }
    }
}

#[test]
fn test_eof_closes_an_open_record() {
    let genomes = parse(">g\nACGT").unwrap();
    assert_eq!(genomes.len(), 1);
    assert_eq!(genomes[0].sequence(), "ACGT");
}

#[test]
fn test_crlf_and_lf_parse_identically() {
    let lf = parse(">g\nACGT\nGGTT\n").unwrap();
    let crlf = parse(">g\r\nACGT\r\nGGTT\r\n").unwrap();
    assert_eq!(lf, crlf);
}

#[test]
fn test_empty_stream_is_an_empty_library() {
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn test_loaded_genomes_feed_straight_into_the_matcher() {
    let genomes = parse(">left\nAAACCC\n>right\naaattt\n").unwrap();

    let mut matcher = seq_prospector::GenomeMatcher::new(3);
    for genome in genomes {
        matcher.add_genome(genome);
    }

    let matches = matcher.find_genomes_with_this_dna("AAA", 3, true);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].genome_name, "left");
    assert_eq!(matches[1].genome_name, "right");
}
