//! Loading the four corpus artifacts from disk.
//!
//! A corpus directory holds four JSON files, one per artifact. The loader
//! reads and deserializes each, then hands the bundle to
//! [`SearchEngine::new`] for structural validation. Any failure — missing
//! file, malformed JSON, or a validation error — aborts construction; there
//! is no degraded engine.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::engine::{CorpusError, SearchEngine};
use crate::types::Artifacts;

/// Sorted dictionary: a JSON array of strings.
pub const WORDS_FILE: &str = "words.json";

/// Frequency table: a JSON object mapping word → count.
pub const FREQUENCIES_FILE: &str = "word_freq.json";

/// Posting index: a JSON object mapping word → array of document ids.
pub const POSTINGS_FILE: &str = "word_index.json";

/// Document corpus: a JSON array of display names.
pub const DOCUMENTS_FILE: &str = "projects.json";

/// Error type for corpus loading.
#[derive(Debug)]
pub enum LoadError {
    /// An artifact file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// An artifact file is not valid JSON of the expected shape.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifacts parsed but failed structural validation.
    Corpus(CorpusError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::Corpus(source) => write!(f, "corpus validation failed: {}", source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
            LoadError::Corpus(source) => Some(source),
        }
    }
}

impl From<CorpusError> for LoadError {
    fn from(source: CorpusError) -> Self {
        LoadError::Corpus(source)
    }
}

/// Read and deserialize one artifact file.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load all four artifacts from `dir` and build a validated engine.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<SearchEngine, LoadError> {
    let dir = dir.as_ref();
    let words: Vec<String> = read_json(&dir.join(WORDS_FILE))?;
    let frequencies: HashMap<String, u64> = read_json(&dir.join(FREQUENCIES_FILE))?;
    let postings: HashMap<String, Vec<u32>> = read_json(&dir.join(POSTINGS_FILE))?;
    let documents: Vec<String> = read_json(&dir.join(DOCUMENTS_FILE))?;

    let engine = SearchEngine::new(Artifacts {
        words,
        frequencies,
        postings,
        documents,
    })?;
    Ok(engine)
}
