//! The seed index.
//!
//! [`trie::Trie`] stores every fixed-length seed of the genome library under
//! its own bases, and answers exact and one-mismatch lookups.

pub mod trie;
