// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the talpa command-line interface.
//!
//! Three subcommands: `search` to resolve a query against a corpus
//! directory, `suggest` to show typeahead completions for a partial query,
//! and `inspect` to print corpus statistics.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "talpa",
    about = "Prefix search over precomputed word indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find documents containing every query term as a prefix match
    Search {
        /// Corpus directory (words.json, word_freq.json, word_index.json,
        /// projects.json)
        dir: String,

        /// Free-text query
        query: String,

        /// 1-based result page to display
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show ranked typeahead completions for the word under the caret
    Suggest {
        /// Corpus directory
        dir: String,

        /// Partial query text
        text: String,

        /// Caret position in characters (defaults to the end of the text)
        #[arg(short, long)]
        caret: Option<usize>,
    },

    /// Print corpus statistics
    Inspect {
        /// Corpus directory
        dir: String,
    },
}
