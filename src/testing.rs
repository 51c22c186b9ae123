//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test fixtures to avoid
//! duplication.

#![doc(hidden)]

use std::collections::HashMap;

use crate::engine::SearchEngine;
use crate::types::Artifacts;

/// Build artifacts from `(word, frequency, posting ids)` rows plus document
/// names. Rows are kept in the given order so tests can construct invalid
/// dictionaries on purpose.
pub fn make_artifacts(rows: &[(&str, u64, &[u32])], documents: &[&str]) -> Artifacts {
    let mut words = Vec::with_capacity(rows.len());
    let mut frequencies = HashMap::new();
    let mut postings = HashMap::new();

    for (word, frequency, docs) in rows {
        words.push((*word).to_string());
        frequencies.insert((*word).to_string(), *frequency);
        if !docs.is_empty() {
            postings.insert((*word).to_string(), docs.to_vec());
        }
    }

    Artifacts {
        words,
        frequencies,
        postings,
        documents: documents.iter().map(|d| (*d).to_string()).collect(),
    }
}

/// Build a validated engine from rows that are expected to pass validation.
pub fn make_engine(rows: &[(&str, u64, &[u32])], documents: &[&str]) -> SearchEngine {
    SearchEngine::new(make_artifacts(rows, documents)).expect("test corpus should validate")
}

/// The worked example corpus: cat/catalog/dog over documents A, B, C.
pub fn pet_corpus() -> SearchEngine {
    make_engine(
        &[
            ("cat", 5, &[0, 1]),
            ("catalog", 3, &[1]),
            ("dog", 2, &[2]),
        ],
        &["A", "B", "C"],
    )
}

/// Derive a corpus from raw document texts, tokenized the same way queries
/// are. Frequencies count every occurrence; posting lists hold each document
/// once, ascending.
pub fn corpus_from_texts(texts: &[String]) -> Artifacts {
    let mut frequencies: HashMap<String, u64> = HashMap::new();
    let mut postings: HashMap<String, Vec<u32>> = HashMap::new();

    for (doc_id, text) in texts.iter().enumerate() {
        for token in crate::tokenize::tokenize(text) {
            *frequencies.entry(token.clone()).or_insert(0) += 1;
            let list = postings.entry(token).or_default();
            if list.last() != Some(&(doc_id as u32)) {
                list.push(doc_id as u32);
            }
        }
    }

    let mut words: Vec<String> = frequencies.keys().cloned().collect();
    words.sort();

    Artifacts {
        words,
        frequencies,
        postings,
        documents: texts
            .iter()
            .enumerate()
            .map(|(i, _)| format!("Document {}", i))
            .collect(),
    }
}

/// Engine over [`corpus_from_texts`] output.
pub fn engine_from_texts(texts: &[String]) -> SearchEngine {
    SearchEngine::new(corpus_from_texts(texts)).expect("derived corpus should validate")
}
