//! Assemble the built document.
//!
//! The source document contains at most one `<style>` and one `<script>`
//! region. Each region is located by non-greedy, case-insensitive delimiter
//! search; the inner text is handed to a transformation and substituted back.
//! Absent regions are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

/// The single style region.
static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style>(.*?)</style>").unwrap());

/// The single script region.
static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script>(.*?)</script>").unwrap());

/// The script-closing sequence.
static SCRIPT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</script>").unwrap());

/// Whitespace between two tag boundaries.
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").unwrap());

/// Runs of newlines.
static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Transform the style region of a document.
///
/// The closure receives the inner text of the first style region and returns
/// its replacement. Documents without a style region are returned unchanged.
pub fn transform_style(document: &str, f: impl FnOnce(&str) -> String) -> String {
    transform_region(&STYLE, "style", document, f)
}

/// Transform the script region of a document.
///
/// The closure receives the inner text of the first script region and returns
/// its replacement. Documents without a script region are returned unchanged.
pub fn transform_script(document: &str, f: impl FnOnce(&str) -> String) -> String {
    transform_region(&SCRIPT, "script", document, f)
}

/// Substitute the first region matched by `region` with transformed content.
fn transform_region(
    region: &Regex,
    tag: &str,
    document: &str,
    f: impl FnOnce(&str) -> String,
) -> String {
    let Some(captures) = region.captures(document) else {
        return document.to_owned();
    };

    let (Some(all), Some(inner)) = (captures.get(0), captures.get(1)) else {
        return document.to_owned();
    };

    let content = f(inner.as_str());

    format!(
        "{}<{tag}>{content}</{tag}>{}",
        &document[..all.start()],
        &document[all.end()..]
    )
}

/// Escape literal script-closing sequences in script text.
///
/// An unescaped `</script>` inside the substituted script would prematurely
/// terminate the enclosing tag.
pub fn escape_script_close(script: &str) -> String {
    SCRIPT_CLOSE.replace_all(script, r"<\/script>").into_owned()
}

/// Collapse inter-tag whitespace in an assembled document.
pub fn collapse_whitespace(document: &str) -> String {
    let output = BETWEEN_TAGS.replace_all(document, "><");
    let output = NEWLINES.replace_all(&output, "\n");

    output.trim().to_owned()
}
