// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output helpers for the talpa CLI.
//!
//! Minimal ANSI styling, applied only when stdout is a terminal. Respects
//! pipelines by emitting plain text when stdout is redirected.

use talpa::button_window;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Wrap `text` in an ANSI style when stdout is a TTY.
pub fn styled(text: &str, style: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// Render the page-navigation row: a window of page numbers around the
/// current page, the current one bracketed, with the first and last pages
/// pinned behind ellipses when the window excludes them.
///
/// `pagination_line(5, 12)` → `"1 ... 2 3 4 [5] 6 7 8 ... 12"`
pub fn pagination_line(current: usize, total: usize) -> String {
    let (first, last) = button_window(current, total);
    let mut parts: Vec<String> = Vec::new();

    if first > 1 {
        parts.push("1".to_string());
        if first > 2 {
            parts.push("...".to_string());
        }
    }

    for page in first..=last {
        if page == current {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }

    if last < total {
        if last < total - 1 {
            parts.push("...".to_string());
        }
        parts.push(total.to_string());
    }

    parts.join(" ")
}
