//! Minify JavaScript code.
//!
//! Fallback used when no external minifier produces usable output. Only
//! comments and redundant whitespace are removed; the program text is
//! otherwise left untouched. Comment markers inside string literals are not
//! recognized, an accepted limitation of the fallback path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Full-line `//` comments.
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*//.*$").unwrap());

/// Block comments.
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Runs of blank lines.
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Runs of spaces and tabs.
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Minify a string of JavaScript code.
pub fn minify_js(input: impl AsRef<str>) -> String {
    let input = input.as_ref();

    let output = LINE_COMMENT.replace_all(input, "");
    let output = BLOCK_COMMENT.replace_all(&output, "");
    let output = BLANK_LINES.replace_all(&output, "\n");
    let output = SPACE_RUNS.replace_all(&output, " ");

    output.trim().to_owned()
}
