//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical test fixtures from talpa::testing
pub use talpa::testing::{
    corpus_from_texts, engine_from_texts, make_artifacts, make_engine, pet_corpus,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate word-like strings for building corpus documents.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{2,8}").unwrap()
}

/// Generate random document text (multiple words).
pub fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..10).prop_map(|words| words.join(" "))
}

/// Generate a corpus of documents.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 1..8)
}

/// Generate a short letters-only prefix for searching.
pub fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,3}").unwrap()
}

/// Generate a fragment long enough to trigger typeahead.
pub fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,4}").unwrap()
}
