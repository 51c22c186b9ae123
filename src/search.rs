//! Query resolution: conjunctive prefix search over the corpus.
//!
//! Every query token is expanded to its prefix-matching dictionary words,
//! the matched words' posting lists are unioned into one document set per
//! token, and the per-token sets are intersected. A document survives only
//! if it matches *every* token. Results come back ascending by document id,
//! so pagination over repeated identical queries is stable.

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use crate::engine::SearchEngine;
use crate::tokenize::tokenize;
use crate::types::{DocId, SearchResponse};

/// Cap on dictionary expansion per query term.
pub const TERM_EXPANSION_LIMIT: usize = 1000;

/// Error type for query resolution.
///
/// All variants are recoverable: the engine stays fully usable after any of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query tokenized to nothing.
    EmptyQuery,
    /// A query term has no dictionary word starting with it, so the
    /// conjunction cannot be satisfied. Carries the offending token.
    NoMatch(String),
    /// Every term resolved, but no document contains all of them.
    NoResults,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "query contains no searchable tokens"),
            SearchError::NoMatch(token) => {
                write!(f, "no words found starting with \"{}\"", token)
            }
            SearchError::NoResults => write!(f, "no documents match all search terms"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Resolve a free-text query to the set of documents containing every token
/// as a prefix match.
///
/// Expansion happens for all tokens before intersection, so a term with zero
/// dictionary matches always reports [`SearchError::NoMatch`] even when an
/// earlier intersection already came up empty.
pub fn search(engine: &SearchEngine, text: &str) -> Result<SearchResponse, SearchError> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let started = Instant::now();

    // One document set per token: the union of postings across the token's
    // prefix matches.
    let mut per_token: Vec<HashSet<DocId>> = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let words = engine.matching_words(token, TERM_EXPANSION_LIMIT);
        if words.is_empty() {
            return Err(SearchError::NoMatch(token.clone()));
        }

        let mut docs = HashSet::new();
        for word in words {
            docs.extend(engine.postings(word));
        }
        per_token.push(docs);
    }

    // AND semantics: intersect the per-token sets.
    let mut sets = per_token.into_iter();
    let mut matched = sets.next().unwrap_or_default();
    for docs in sets {
        matched.retain(|id| docs.contains(id));
        if matched.is_empty() {
            break;
        }
    }

    if matched.is_empty() {
        return Err(SearchError::NoResults);
    }

    let mut document_ids: Vec<DocId> = matched.into_iter().collect();
    document_ids.sort_unstable();

    Ok(SearchResponse {
        document_ids,
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pet_corpus;

    #[test]
    fn single_token_unions_all_prefix_matches() {
        let engine = pet_corpus();
        let response = search(&engine, "cat").unwrap();
        // cat → [0, 1], catalog → [1]; union is {0, 1}.
        assert_eq!(response.document_ids, vec![DocId(0), DocId(1)]);
    }

    #[test]
    fn conjunction_with_disjoint_terms_reports_no_results() {
        let engine = pet_corpus();
        assert_eq!(search(&engine, "cat dog").unwrap_err(), SearchError::NoResults);
    }

    #[test]
    fn blank_query_is_rejected() {
        let engine = pet_corpus();
        assert_eq!(search(&engine, "").unwrap_err(), SearchError::EmptyQuery);
        assert_eq!(search(&engine, "  !? ").unwrap_err(), SearchError::EmptyQuery);
    }

    #[test]
    fn unmatched_term_reports_the_token() {
        let engine = pet_corpus();
        assert_eq!(
            search(&engine, "zebra").unwrap_err(),
            SearchError::NoMatch("zebra".to_string())
        );
    }

    #[test]
    fn no_match_wins_over_no_results() {
        // "cat dog" alone is NoResults; adding an unknown term must still
        // surface NoMatch for it.
        let engine = pet_corpus();
        assert_eq!(
            search(&engine, "cat dog zebra").unwrap_err(),
            SearchError::NoMatch("zebra".to_string())
        );
    }

    #[test]
    fn results_are_ascending_and_repeatable() {
        let engine = pet_corpus();
        let first = search(&engine, "ca").unwrap();
        let second = search(&engine, "ca").unwrap();

        assert!(first.document_ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(first.document_ids, second.document_ids);
    }

    #[test]
    fn engine_survives_query_errors() {
        let engine = pet_corpus();
        let _ = search(&engine, "zebra");
        let _ = search(&engine, "");
        assert!(search(&engine, "dog").is_ok());
    }

    #[test]
    fn query_case_and_accents_are_normalized() {
        let engine = pet_corpus();
        let response = search(&engine, "CÁT").unwrap();
        assert_eq!(response.document_ids, vec![DocId(0), DocId(1)]);
    }
}
