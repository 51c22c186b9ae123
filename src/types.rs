// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! Four precomputed artifacts make up a corpus: the sorted word dictionary,
//! the per-word frequency table, the per-word posting index, and the document
//! name list. They are bundled as [`Artifacts`] for engine construction and
//! never mutated afterwards.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Artifacts**: `words` is strictly ascending (binary search depends on
//!   it); every posting id is `< documents.len()`. Both are checked when the
//!   engine is built, not trusted.
//! - **DocId**: an index into `documents`. Constructed ids always satisfy
//!   `id < documents.len()` because out-of-range postings are rejected at
//!   load time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type-safe document identifier (0-based index into the document corpus).
///
/// Prevents accidentally passing a dictionary position where a document id is
/// expected. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, doc_count: usize) -> Option<Self> {
        if (id as usize) < doc_count {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

/// The four corpus artifacts, fully loaded and ready for validation.
///
/// Posting lists use raw `u32` ids here; they become [`DocId`]s once the
/// engine has checked them against `documents.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    /// Unique words, case-normalized, lexicographically sorted.
    pub words: Vec<String>,
    /// Word → occurrence count across the corpus.
    pub frequencies: HashMap<String, u64>,
    /// Word → ids of the documents containing it.
    pub postings: HashMap<String, Vec<u32>>,
    /// Display names, indexed by document id.
    pub documents: Vec<String>,
}

/// A ranked completion for the word under the caret.
///
/// `range_start..range_end` is the character range of the fragment being
/// completed, so a caller can splice `word` into its input buffer in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The dictionary word completing the fragment.
    pub word: String,
    /// Aggregate prefix frequency: summed counts of every dictionary word
    /// this completion would itself expand to.
    pub score: u64,
    /// Character offset where the fragment starts.
    pub range_start: usize,
    /// Character offset one past the fragment's end.
    pub range_end: usize,
}

/// A resolved query: the matching documents plus timing diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Ids of every document containing all query tokens as prefixes,
    /// ascending.
    pub document_ids: Vec<DocId>,
    /// Wall-clock resolution time in milliseconds.
    pub elapsed_ms: f64,
}
