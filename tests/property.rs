//! Property-based tests using proptest.
//!
//! These verify the dictionary-lookup, resolution, and ranking invariants
//! over randomly generated corpora, with naive linear scans as oracles for
//! the binary-search paths.

mod common;

use std::collections::HashSet;

use common::{
    corpus_strategy, engine_from_texts, fragment_strategy, prefix_strategy,
};
use proptest::prelude::*;
use talpa::{
    search, suggest, tokenize, DocId, SearchError, SearchEngine, MIN_FRAGMENT_LEN,
    SUGGESTION_LIMIT,
};

/// Oracle: the documents a single token should reach, by scanning the whole
/// dictionary instead of binary searching it.
fn union_of_prefix_postings(engine: &SearchEngine, token: &str) -> Vec<DocId> {
    let mut ids: HashSet<DocId> = HashSet::new();
    for word in engine.words() {
        if word.starts_with(token) {
            ids.extend(engine.postings(word));
        }
    }
    let mut ids: Vec<DocId> = ids.into_iter().collect();
    ids.sort_unstable();
    ids
}

// ============================================================================
// PREFIX INDEX PROPERTIES
// ============================================================================

proptest! {
    /// Property: matching_words returns exactly the dictionary subsequence
    /// with the prefix, in dictionary order.
    #[test]
    fn prop_matching_words_equals_dictionary_filter(
        corpus in corpus_strategy(),
        prefix in prefix_strategy()
    ) {
        let engine = engine_from_texts(&corpus);

        let expected: Vec<&str> = engine
            .words()
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .map(String::as_str)
            .collect();

        prop_assert_eq!(engine.matching_words(&prefix, usize::MAX), expected);
    }

    /// Property: find_first_match is None exactly when matching_words is
    /// empty.
    #[test]
    fn prop_first_match_agrees_with_matching_words(
        corpus in corpus_strategy(),
        prefix in prefix_strategy()
    ) {
        let engine = engine_from_texts(&corpus);
        prop_assert_eq!(
            engine.find_first_match(&prefix).is_none(),
            engine.matching_words(&prefix, usize::MAX).is_empty()
        );
    }

    /// Property: a derived corpus always passes engine validation.
    #[test]
    fn prop_derived_corpus_validates(corpus in corpus_strategy()) {
        let engine = engine_from_texts(&corpus);
        prop_assert!(engine.word_count() > 0);
        prop_assert_eq!(engine.document_count(), corpus.len());
    }
}

// ============================================================================
// RESOLVER PROPERTIES
// ============================================================================

proptest! {
    /// Property: a single-token query equals the union of postings across
    /// the token's prefix matches.
    #[test]
    fn prop_single_token_equals_posting_union(
        corpus in corpus_strategy(),
        token in prefix_strategy()
    ) {
        let engine = engine_from_texts(&corpus);
        let expected = union_of_prefix_postings(&engine, &token);

        match search(&engine, &token) {
            Ok(response) => prop_assert_eq!(response.document_ids, expected),
            Err(SearchError::NoMatch(_)) => {
                prop_assert!(engine.matching_words(&token, usize::MAX).is_empty());
            }
            Err(SearchError::NoResults) => prop_assert!(expected.is_empty()),
            Err(SearchError::EmptyQuery) => prop_assert!(token.is_empty()),
        }
    }

    /// Property: adding a term never grows the result set (monotonic
    /// narrowing under conjunction).
    #[test]
    fn prop_conjunction_narrows(
        corpus in corpus_strategy(),
        first in prefix_strategy(),
        second in prefix_strategy()
    ) {
        let engine = engine_from_texts(&corpus);
        let combined = format!("{} {}", first, second);

        if let Ok(both) = search(&engine, &combined) {
            let single = search(&engine, &first).unwrap();
            let single_set: HashSet<DocId> = single.document_ids.iter().copied().collect();
            for id in &both.document_ids {
                prop_assert!(
                    single_set.contains(id),
                    "doc {:?} matched \"{}\" but not \"{}\"",
                    id, combined, first
                );
            }
        }
    }

    /// Property: identical queries give identical document sequences.
    #[test]
    fn prop_search_is_deterministic(
        corpus in corpus_strategy(),
        token in prefix_strategy()
    ) {
        let engine = engine_from_texts(&corpus);
        let first = search(&engine, &token);
        let second = search(&engine, &token);

        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.document_ids, b.document_ids),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverging outcomes: {:?} vs {:?}", a, b),
        }
    }

    /// Property: results are strictly ascending (sorted, no duplicates).
    #[test]
    fn prop_results_strictly_ascending(
        corpus in corpus_strategy(),
        token in prefix_strategy()
    ) {
        let engine = engine_from_texts(&corpus);
        if let Ok(response) = search(&engine, &token) {
            prop_assert!(response.document_ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

// ============================================================================
// TOKENIZER PROPERTIES
// ============================================================================

proptest! {
    /// Property: letter tokens always precede digit tokens, and every token
    /// is one homogeneous class.
    #[test]
    fn prop_letters_before_digits(text in "\\PC{0,60}") {
        let tokens = tokenize(&text);

        let mut seen_digits = false;
        for token in &tokens {
            prop_assert!(!token.is_empty());
            let is_digits = token.chars().all(|c| c.is_ascii_digit());
            let is_letters = token.chars().all(|c| c.is_ascii_lowercase());
            prop_assert!(is_digits || is_letters, "mixed token {:?}", token);
            if is_digits {
                seen_digits = true;
            } else {
                prop_assert!(!seen_digits, "letter token {:?} after digits", token);
            }
        }
    }

    /// Property: re-tokenizing the space-joined output reproduces it.
    #[test]
    fn prop_tokenize_idempotent(text in "\\PC{0,60}") {
        let tokens = tokenize(&text);
        let rejoined = tokens.join(" ");
        prop_assert_eq!(tokenize(&rejoined), tokens);
    }
}

// ============================================================================
// TYPEAHEAD PROPERTIES
// ============================================================================

proptest! {
    /// Property: every suggestion extends the fragment, scores never
    /// increase, and the list respects the cap.
    #[test]
    fn prop_suggestions_well_formed(
        corpus in corpus_strategy(),
        fragment in fragment_strategy()
    ) {
        let engine = engine_from_texts(&corpus);
        let caret = fragment.chars().count();
        let suggestions = suggest(&engine, &fragment, caret);

        prop_assert!(suggestions.len() <= SUGGESTION_LIMIT);
        for suggestion in &suggestions {
            prop_assert!(
                suggestion.word.starts_with(&fragment),
                "{:?} does not extend {:?}",
                suggestion.word, fragment
            );
            prop_assert_eq!(suggestion.range_start, 0);
            prop_assert_eq!(suggestion.range_end, caret);
        }
        prop_assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// Property: fragments below the minimum length yield nothing.
    #[test]
    fn prop_short_fragments_yield_nothing(
        corpus in corpus_strategy(),
        c in "[a-z]"
    ) {
        prop_assert!(MIN_FRAGMENT_LEN > 1);
        let engine = engine_from_texts(&corpus);
        prop_assert!(suggest(&engine, &c, 1).is_empty());
    }
}
