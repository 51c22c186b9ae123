//! In-memory prefix search with frequency-ranked typeahead.
//!
//! This crate answers two questions about a fixed, precomputed corpus:
//! which documents contain *all* of these words as prefixes, and what is
//! the user most likely typing right now. Both run on every keystroke, so
//! prefix resolution is a binary search over the sorted dictionary rather
//! than a scan.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenize.rs │────▶│  engine.rs   │◀────│  loader.rs   │
//! │ (normalize, │     │ (SearchEngine│     │ (load_dir,   │
//! │  tokenize)  │     │  prefix b-s) │     │  validation) │
//! └──────┬──────┘     └──────┬───────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ suggest.rs  │     │  search.rs   │────▶│   page.rs    │
//! │ (typeahead  │     │ (conjunctive │     │ (pagination  │
//! │  ranking)   │     │  resolution) │     │  windows)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The engine is built once from four artifacts (sorted dictionary,
//! frequency table, posting index, document names) and never mutated;
//! every query borrows it.
//!
//! # Usage
//!
//! ```ignore
//! use talpa::{load_dir, search, suggest};
//!
//! let engine = load_dir("corpus/")?;
//!
//! let response = search(&engine, "data visual")?;
//! for id in &response.document_ids {
//!     println!("{}", engine.document(*id).unwrap_or("?"));
//! }
//!
//! let completions = suggest(&engine, "visu", 4);
//! ```

// Module declarations
mod engine;
mod loader;
mod page;
mod search;
mod suggest;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use engine::{CorpusError, SearchEngine};
pub use loader::{
    load_dir, LoadError, DOCUMENTS_FILE, FREQUENCIES_FILE, POSTINGS_FILE, WORDS_FILE,
};
pub use page::{button_window, page_bounds, total_pages, MAX_PAGE_BUTTONS, RESULTS_PER_PAGE};
pub use search::{search, SearchError, TERM_EXPANSION_LIMIT};
pub use suggest::{
    aggregate_prefix_frequency, suggest, EXPANSION_LIMIT, MIN_FRAGMENT_LEN, SUGGESTION_LIMIT,
};
pub use tokenize::{fragment_at, normalize, tokenize};
pub use types::{Artifacts, DocId, SearchResponse, Suggestion};
