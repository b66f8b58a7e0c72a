use serde::{Deserialize, Serialize};

/// An immutable named DNA sequence over the alphabet {A, C, G, T, N}.
///
/// The sequence is stored normalised to uppercase. Construction performs no
/// validation; the file loader in [`crate::parsing`] is responsible for
/// rejecting malformed input. Offsets are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    name: String,
    sequence: String,
}

impl Genome {
    /// Create a genome. `sequence` is normalised to uppercase.
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        let mut sequence = sequence.into();
        sequence.make_ascii_uppercase();
        Self {
            name: name.into(),
            sequence,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bases in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The full sequence, uppercase.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Extract `length` bases starting at `position`.
    ///
    /// Returns `None` when the requested range runs past the end of the
    /// sequence; there is no partial extraction.
    #[must_use]
    pub fn extract(&self, position: usize, length: usize) -> Option<&str> {
        self.sequence.get(position..position.checked_add(length)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_normalised_to_uppercase() {
        let genome = Genome::new("phix", "acgtN");
        assert_eq!(genome.sequence(), "ACGTN");
        assert_eq!(genome.len(), 5);
    }

    #[test]
    fn test_extract_in_bounds() {
        let genome = Genome::new("g", "ACGTACGT");
        assert_eq!(genome.extract(0, 4), Some("ACGT"));
        assert_eq!(genome.extract(4, 4), Some("ACGT"));
        assert_eq!(genome.extract(7, 1), Some("T"));
        assert_eq!(genome.extract(0, 0), Some(""));
        assert_eq!(genome.extract(8, 0), Some(""));
    }

    #[test]
    fn test_extract_past_the_end_fails() {
        let genome = Genome::new("g", "ACGTACGT");
        assert_eq!(genome.extract(5, 4), None);
        assert_eq!(genome.extract(8, 1), None);
        assert_eq!(genome.extract(100, 1), None);
        assert_eq!(genome.extract(0, usize::MAX), None);
    }

    #[test]
    fn test_genomes_compare_by_name_and_sequence() {
        let a = Genome::new("g", "ACGT");
        let b = Genome::new("g", "acgt");
        let c = Genome::new("h", "ACGT");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }
}
