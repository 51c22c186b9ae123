//! Frequency-ranked typeahead over the dictionary.
//!
//! Given the text being typed and the caret position, find the word under
//! the caret, expand it to its dictionary completions, and rank those by
//! **aggregate prefix frequency**: each candidate is treated as a fresh
//! prefix and scored by the summed frequencies of everything *it* would
//! expand to. A short, general completion is therefore scored by the entire
//! subtree of words behind it, not just its own count, and can outrank a
//! longer exact match. That asymmetry is the intended ranking policy.

use crate::engine::SearchEngine;
use crate::tokenize::{fragment_at, tokenize};
use crate::types::Suggestion;

/// Maximum completions surfaced per call, and the candidate pool drawn from
/// the dictionary before ranking.
pub const SUGGESTION_LIMIT: usize = 20;

/// Cap on re-expanding a candidate when summing its completions' frequencies.
pub const EXPANSION_LIMIT: usize = 10_000;

/// Fragments shorter than this yield no suggestions. One-character prefixes
/// expand to lists too broad to be worth ranking.
pub const MIN_FRAGMENT_LEN: usize = 2;

/// Rank completions for the word under the caret.
///
/// Returns at most [`SUGGESTION_LIMIT`] suggestions, scores non-increasing,
/// ties in dictionary order. Empty when the caret touches no word, the
/// fragment normalizes to nothing, or the fragment is shorter than
/// [`MIN_FRAGMENT_LEN`].
pub fn suggest(engine: &SearchEngine, text: &str, caret: usize) -> Vec<Suggestion> {
    let Some(range) = fragment_at(text, caret) else {
        return Vec::new();
    };
    let fragment: String = text
        .chars()
        .skip(range.start)
        .take(range.end - range.start)
        .collect();

    let tokens = tokenize(&fragment);
    let Some(token) = tokens.first() else {
        return Vec::new();
    };
    if token.chars().count() < MIN_FRAGMENT_LEN {
        return Vec::new();
    }

    let mut ranked: Vec<Suggestion> = engine
        .matching_words(token, SUGGESTION_LIMIT)
        .into_iter()
        .map(|word| Suggestion {
            word: word.to_string(),
            score: aggregate_prefix_frequency(engine, word),
            range_start: range.start,
            range_end: range.end,
        })
        .collect();

    // Stable sort over dictionary-ordered candidates: ties keep dictionary
    // order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(SUGGESTION_LIMIT);
    ranked
}

/// Sum of standalone frequencies across every dictionary word that `word`
/// itself prefix-matches, capped at [`EXPANSION_LIMIT`] entries.
pub fn aggregate_prefix_frequency(engine: &SearchEngine, word: &str) -> u64 {
    engine
        .matching_words(word, EXPANSION_LIMIT)
        .into_iter()
        .map(|w| engine.frequency(w))
        .sum()
}
