use std::collections::HashMap;

use tracing::debug;

use crate::core::genome::Genome;
use crate::core::types::{DnaMatch, GenomeId, GenomeMatch};
use crate::index::trie::Trie;

/// Safely convert usize to f64 for percentage calculations
///
/// This function explicitly handles the precision loss that occurs when
/// converting usize to f64 on 64-bit platforms. Window counts are well
/// within the safe range of f64 mantissa precision.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// A seed hit recorded in the index: a fixed-length substring of one library
/// genome, identified by the genome and the offset it starts at.
#[derive(Debug, Clone, Copy)]
struct SeedHit {
    genome: GenomeId,
    position: usize,
}

/// The longest admissible run reached from any seed of one genome.
#[derive(Debug, Clone, Copy)]
struct BestRun {
    length: usize,
    position: usize,
}

/// The search engine: a genome library plus a trie of fixed-length seeds.
///
/// Every k-length substring of every library genome is indexed under its own
/// bases together with the genome id and offset it came from, where k is the
/// minimum search length fixed at construction. A fragment query looks its
/// first k bases up in the trie, extends each seed hit rightward under a
/// one-mismatch budget, and keeps the best run per genome. A relatedness
/// query chops the query genome into disjoint windows and aggregates hit
/// frequencies per library genome.
///
/// Genomes are only ever added; the library and the index grow
/// monotonically for the lifetime of the matcher.
pub struct GenomeMatcher {
    min_search_length: usize,
    library: Vec<Genome>,
    seed_index: Trie<SeedHit>,
}

impl GenomeMatcher {
    /// Create a matcher that indexes seeds of width `min_search_length`
    /// (must be at least 1; fixed for the matcher's lifetime).
    #[must_use]
    pub fn new(min_search_length: usize) -> Self {
        Self {
            min_search_length,
            library: Vec::new(),
            seed_index: Trie::new(),
        }
    }

    /// The seed width `k` this matcher was constructed with.
    #[must_use]
    pub fn minimum_search_length(&self) -> usize {
        self.min_search_length
    }

    /// The genome library, in insertion order. [`GenomeId`]s index into it.
    #[must_use]
    pub fn genomes(&self) -> &[Genome] {
        &self.library
    }

    /// Register `genome` and index every k-length substring of it.
    ///
    /// A genome shorter than k still enters the library but contributes no
    /// seeds, so no fragment query can reach it. Identical substrings at
    /// different offsets each get their own seed; nothing is deduplicated.
    pub fn add_genome(&mut self, genome: Genome) {
        let id = GenomeId(self.library.len());
        let sequence = genome.sequence().as_bytes();
        let seed_count = (genome.len() + 1).saturating_sub(self.min_search_length);
        for position in 0..seed_count {
            self.seed_index.insert(
                &sequence[position..position + self.min_search_length],
                SeedHit {
                    genome: id,
                    position,
                },
            );
        }
        debug!(genome = genome.name(), seeds = seed_count, "indexed genome");
        self.library.push(genome);
    }

    /// Find the library genomes containing `fragment`, reporting the single
    /// longest run per genome.
    ///
    /// `minimum_length` is the shortest run worth reporting and must be at
    /// least the seed width; `fragment` must be at least `minimum_length`
    /// long. A failed precondition, like a fragment with no hits, yields an
    /// empty vector. With `exact_only` false, a run may contain one
    /// mismatching base anywhere past its first base.
    ///
    /// Results are sorted by genome name, then position. When several runs
    /// in one genome share the maximal length, the smallest position wins.
    #[must_use]
    pub fn find_genomes_with_this_dna(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_only: bool,
    ) -> Vec<DnaMatch> {
        let mut matches: Vec<DnaMatch> = self
            .best_matches(fragment.as_bytes(), minimum_length, exact_only)
            .into_iter()
            .map(|(id, run)| DnaMatch {
                genome_name: self.library[id.index()].name().to_string(),
                length: run.length,
                position: run.position,
            })
            .collect();
        matches.sort_by(|a, b| {
            a.genome_name
                .cmp(&b.genome_name)
                .then(a.position.cmp(&b.position))
        });
        matches
    }

    /// Rank the library genomes by how much of `query` they contain.
    ///
    /// The query is cut into `query.len() / fragment_match_length` disjoint
    /// windows from the start (a shorter tail is ignored). Each window is
    /// searched like [`Self::find_genomes_with_this_dna`] with
    /// `minimum_length` equal to the window length, and every genome with a
    /// hit in a window scores that window once. A genome is reported when
    /// its percentage of scored windows strictly exceeds
    /// `match_percent_threshold`.
    ///
    /// Results are sorted by percentage descending, then genome name
    /// ascending. `fragment_match_length` below the seed width, or a query
    /// too short for even one window, yields an empty vector.
    #[must_use]
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
        exact_only: bool,
        match_percent_threshold: f64,
    ) -> Vec<GenomeMatch> {
        if fragment_match_length < self.min_search_length {
            return Vec::new();
        }
        let windows = query.len() / fragment_match_length;
        if windows == 0 {
            return Vec::new();
        }

        let mut hits: HashMap<GenomeId, usize> = HashMap::new();
        for window in 0..windows {
            let Some(piece) = query.extract(window * fragment_match_length, fragment_match_length)
            else {
                break;
            };
            for id in self
                .best_matches(piece.as_bytes(), fragment_match_length, exact_only)
                .into_keys()
            {
                *hits.entry(id).or_default() += 1;
            }
        }

        let mut results: Vec<GenomeMatch> = self
            .library
            .iter()
            .enumerate()
            .filter_map(|(index, genome)| {
                let count = hits.get(&GenomeId(index)).copied().unwrap_or(0);
                let percent = 100.0 * count_to_f64(count) / count_to_f64(windows);
                (percent > match_percent_threshold).then(|| GenomeMatch {
                    genome_name: genome.name().to_string(),
                    percent_match: percent,
                })
            })
            .collect();
        results.sort_by(|a, b| {
            b.percent_match
                .partial_cmp(&a.percent_match)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.genome_name.cmp(&b.genome_name))
        });
        // Same-named genomes with equal scores would repeat one line.
        results.dedup_by(|a, b| {
            a.genome_name == b.genome_name && a.percent_match == b.percent_match
        });
        results
    }

    /// Seed, extend, and keep the best run per genome.
    fn best_matches(
        &self,
        fragment: &[u8],
        minimum_length: usize,
        exact_only: bool,
    ) -> HashMap<GenomeId, BestRun> {
        let mut best: HashMap<GenomeId, BestRun> = HashMap::new();
        if fragment.len() < minimum_length || minimum_length < self.min_search_length {
            return best;
        }

        let seed_key = &fragment[..self.min_search_length];
        for &seed in self.seed_index.find(seed_key, exact_only) {
            let length = self.extend_seed(seed, fragment, exact_only);
            if length < minimum_length {
                continue;
            }
            best.entry(seed.genome)
                .and_modify(|run| {
                    if length > run.length
                        || (length == run.length && seed.position < run.position)
                    {
                        *run = BestRun {
                            length,
                            position: seed.position,
                        };
                    }
                })
                .or_insert(BestRun {
                    length,
                    position: seed.position,
                });
        }
        best
    }

    /// Grow a seed hit rightward against `fragment` one base at a time and
    /// return the length of the longest admissible run.
    ///
    /// A mismatching base joins the run when the budget is free and ends the
    /// run when it is spent; running off the end of the library genome ends
    /// the run at the last base that exists. The budget starts unspent for a
    /// fuzzy query even when the trie lookup itself matched the seed with a
    /// mismatch; the seed lookup and the extension keep separate budgets.
    fn extend_seed(&self, seed: SeedHit, fragment: &[u8], exact_only: bool) -> usize {
        let sequence = self.library[seed.genome.index()].sequence().as_bytes();
        let mut spent = exact_only;
        let mut length = self.min_search_length;
        while length < fragment.len() {
            let Some(&base) = sequence.get(seed.position + length) else {
                break;
            };
            if base != fragment[length] {
                if spent {
                    break;
                }
                spent = true;
            }
            length += 1;
        }
        length
    }
}
