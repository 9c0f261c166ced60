//! Minify CSS code.
//!
//! Comments and redundant whitespace are removed with regular expressions; no
//! semantic analysis is performed. Comment-like tokens inside string literals
//! are not recognized, an accepted limitation for hand-written page styles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block comments.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Runs of whitespace.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Whitespace around structural punctuation.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([{}:;,>+])\s*").unwrap());

/// Minify a CSS string.
pub fn minify_css(input: impl AsRef<str>) -> String {
    let input = input.as_ref();

    let output = COMMENT.replace_all(input, "");
    let output = WHITESPACE.replace_all(&output, " ");
    let output = PUNCTUATION.replace_all(&output, "$1");
    let output = output.replace(";}", "}");

    output.trim().to_owned()
}
