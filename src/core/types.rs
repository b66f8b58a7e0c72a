use serde::{Deserialize, Serialize};

/// Identifier of a genome in a matcher's library.
///
/// Ids are 0-based, assigned in insertion order, and stable for the lifetime
/// of the matcher. The id is an index into the library, used consistently
/// everywhere (the index and the result maps never mix numbering schemes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GenomeId(pub usize);

impl GenomeId {
    /// Position of this genome in the library.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for GenomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One contiguous run in a library genome that matches a query fragment,
/// with at most one base mismatch after the first base of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaMatch {
    /// Name of the library genome the run was found in.
    pub genome_name: String,

    /// Number of bases in the run.
    pub length: usize,

    /// 0-based offset of the run in the library genome.
    pub position: usize,
}

/// A library genome's aggregate similarity to a query genome: the percentage
/// of query windows with at least one hit in that genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeMatch {
    /// Name of the library genome.
    pub genome_name: String,

    /// Percentage of matching windows, in `[0, 100]`.
    pub percent_match: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_id_display_and_index() {
        let id = GenomeId(3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(id.index(), 3);
    }

    #[test]
    fn test_dna_match_serialises_to_json() {
        let m = DnaMatch {
            genome_name: "phix".to_string(),
            length: 12,
            position: 40,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"genome_name\":\"phix\""));
        assert!(json.contains("\"length\":12"));
        assert!(json.contains("\"position\":40"));
    }
}
