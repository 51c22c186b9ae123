use std::process::ExitCode;

use clap::Parser;

use talpa::{load_dir, page_bounds, search, suggest, total_pages, SearchEngine, SearchError};

mod cli;
use cli::display::{pagination_line, styled, BOLD, DIM};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { dir, query, page } => run_search(&dir, &query, page),
        Commands::Suggest { dir, text, caret } => run_suggest(&dir, &text, caret),
        Commands::Inspect { dir } => run_inspect(&dir),
    }
}

fn load_engine(dir: &str) -> Result<SearchEngine, ExitCode> {
    load_dir(dir).map_err(|e| {
        eprintln!("error loading corpus: {}", e);
        ExitCode::FAILURE
    })
}

fn run_search(dir: &str, query: &str, page: usize) -> ExitCode {
    let engine = match load_engine(dir) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let response = match search(&engine, query) {
        Ok(response) => response,
        Err(SearchError::EmptyQuery) => {
            eprintln!("Please enter valid search terms (words or numbers).");
            return ExitCode::FAILURE;
        }
        Err(SearchError::NoMatch(token)) => {
            eprintln!("No words found starting with \"{}\".", token);
            return ExitCode::FAILURE;
        }
        Err(SearchError::NoResults) => {
            eprintln!("No documents found matching all search terms.");
            return ExitCode::FAILURE;
        }
    };

    let total = response.document_ids.len();
    let pages = total_pages(total);
    let Some(bounds) = page_bounds(page, total) else {
        eprintln!("Page {} is out of range (1..={}).", page, pages);
        return ExitCode::FAILURE;
    };

    println!(
        "Found {} documents in {:.2}ms. Showing {}-{} of {}.",
        styled(&total.to_string(), BOLD),
        response.elapsed_ms,
        bounds.start + 1,
        bounds.end,
        total
    );
    for id in &response.document_ids[bounds] {
        let name = engine.document(*id).unwrap_or("<unknown>");
        println!("{}  {}", styled(&format!("{:>8}", id.get()), DIM), name);
    }
    if pages > 1 {
        println!("{}", styled(&pagination_line(page, pages), DIM));
    }

    ExitCode::SUCCESS
}

fn run_suggest(dir: &str, text: &str, caret: Option<usize>) -> ExitCode {
    let engine = match load_engine(dir) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let caret = caret.unwrap_or_else(|| text.chars().count());
    let suggestions = suggest(&engine, text, caret);
    if suggestions.is_empty() {
        println!("No suggestions.");
        return ExitCode::SUCCESS;
    }

    println!(
        "Completing characters {}-{} of {:?}:",
        suggestions[0].range_start, suggestions[0].range_end, text
    );
    for suggestion in &suggestions {
        println!(
            "{}  {}",
            styled(&format!("{:>10}", suggestion.score), DIM),
            suggestion.word
        );
    }

    ExitCode::SUCCESS
}

fn run_inspect(dir: &str) -> ExitCode {
    let engine = match load_engine(dir) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    println!(
        "Ready! Loaded {} unique words and {} documents.",
        styled(&engine.word_count().to_string(), BOLD),
        styled(&engine.document_count().to_string(), BOLD),
    );
    println!("{} posting entries across the dictionary.", engine.posting_count());

    ExitCode::SUCCESS
}
