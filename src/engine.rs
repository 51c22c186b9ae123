// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: corpus ownership, structural validation, and
//! prefix-range lookup over the sorted dictionary.
//!
//! An engine is built once from the four [`Artifacts`] and is immutable for
//! its entire lifetime. Queries borrow it, so a single instance can serve
//! any number of readers without synchronization.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DICTIONARY_SORTED**: `words` is strictly ascending. Binary search
//!    and the contiguity of prefix matches both depend on it.
//! 2. **POSTINGS_IN_RANGE**: every posting id is `< documents.len()`.
//!
//! Both are checked in [`SearchEngine::new`]; a corpus that fails either
//! check never produces an engine, partial or otherwise.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::types::{Artifacts, DocId};

/// Error type for corpus validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// Dictionary entries are not strictly ascending at `position`.
    /// Covers both out-of-order entries and duplicates.
    DictionaryUnsorted { position: usize },
    /// A posting list references a document id outside the corpus.
    PostingOutOfRange {
        term: String,
        doc_id: u32,
        doc_count: usize,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::DictionaryUnsorted { position } => {
                write!(f, "dictionary not strictly ascending at position {}", position)
            }
            CorpusError::PostingOutOfRange {
                term,
                doc_id,
                doc_count,
            } => {
                write!(
                    f,
                    "posting for '{}' references document {} but corpus has {} documents",
                    term, doc_id, doc_count
                )
            }
        }
    }
}

impl std::error::Error for CorpusError {}

/// An immutable, queryable view over a precomputed corpus.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    /// Sorted dictionary. DICTIONARY_SORTED holds after construction.
    words: Vec<String>,
    /// Word → occurrence count; absent means 0.
    frequencies: HashMap<String, u64>,
    /// Word → documents containing it. POSTINGS_IN_RANGE holds after
    /// construction.
    postings: HashMap<String, Vec<DocId>>,
    /// Display names indexed by document id.
    documents: Vec<String>,
}

impl SearchEngine {
    /// Validate the artifacts and build an engine.
    ///
    /// Fails on the first structural violation; no partial engine is ever
    /// produced.
    pub fn new(artifacts: Artifacts) -> Result<Self, CorpusError> {
        let Artifacts {
            words,
            frequencies,
            postings,
            documents,
        } = artifacts;

        for (i, pair) in words.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(CorpusError::DictionaryUnsorted { position: i + 1 });
            }
        }

        let doc_count = documents.len();
        for (term, list) in &postings {
            if let Some(&doc_id) = list.iter().find(|&&id| id as usize >= doc_count) {
                return Err(CorpusError::PostingOutOfRange {
                    term: term.clone(),
                    doc_id,
                    doc_count,
                });
            }
        }

        // Ids are in range now, so the DocId wrapping below cannot lie.
        let postings = postings
            .into_iter()
            .map(|(term, list)| (term, list.into_iter().map(DocId).collect()))
            .collect();

        Ok(SearchEngine {
            words,
            frequencies,
            postings,
            documents,
        })
    }

    /// Binary search for the lowest dictionary index whose entry starts with
    /// `prefix`, ASCII case-insensitive.
    ///
    /// A probe that hits a prefix match records it and keeps searching the
    /// left half, so the first matching index wins. Returns `None` when no
    /// entry has the prefix. O(log N).
    pub fn find_first_match(&self, prefix: &str) -> Option<usize> {
        let mut lo = 0usize;
        let mut hi = self.words.len();
        let mut first = None;

        while lo < hi {
            let mid = (lo + hi) / 2;
            match compare_prefix(&self.words[mid], prefix) {
                Ordering::Equal => {
                    first = Some(mid);
                    hi = mid;
                }
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }

        first
    }

    /// All dictionary entries starting with `prefix`, in dictionary order,
    /// capped at `limit`.
    ///
    /// Matches are contiguous because the dictionary is sorted, so this is
    /// one binary search plus a forward scan: O(log N + k). Empty for an
    /// empty or unmatched prefix.
    pub fn matching_words(&self, prefix: &str, limit: usize) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let Some(first) = self.find_first_match(prefix) else {
            return Vec::new();
        };

        self.words[first..]
            .iter()
            .take_while(|word| compare_prefix(word, prefix) == Ordering::Equal)
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// The documents containing `word`. Empty for words with no occurrences.
    pub fn postings(&self, word: &str) -> &[DocId] {
        self.postings.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The corpus-wide occurrence count for `word`; 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// The display name for a document id.
    pub fn document(&self, id: DocId) -> Option<&str> {
        self.documents.get(id.as_usize()).map(String::as_str)
    }

    /// Number of documents in the corpus.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of dictionary words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Total posting entries across all words.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    /// The full sorted dictionary.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Compare a dictionary word against a prefix, ASCII case-insensitive.
///
/// `Equal` means the word starts with the prefix; otherwise the result is
/// the lexicographic order of the (folded) word relative to the prefix,
/// which is what steers the binary search.
fn compare_prefix(word: &str, prefix: &str) -> Ordering {
    let mut w = word.bytes().map(|b| b.to_ascii_lowercase());
    let mut p = prefix.bytes().map(|b| b.to_ascii_lowercase());

    loop {
        match (w.next(), p.next()) {
            // Prefix exhausted: the word starts with it.
            (_, None) => return Ordering::Equal,
            // Word exhausted first: it sorts before anything extending it.
            (None, Some(_)) => return Ordering::Less,
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}
