//! Strip debug regions.
//!
//! A debug region is a span delimited by paired `debug:start` / `debug:end`
//! markers, in HTML comment form or block comment form. Regions are meant for
//! development only and are removed from the document before any other
//! transform.

use once_cell::sync::Lazy;
use regex::Regex;

/// HTML comment form: `<!-- debug:start -->` to `<!-- debug:end -->`.
static HTML_REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<!--\s*debug:start\s*-->.*?<!--\s*debug:end\s*-->").unwrap());

/// Block comment form: `/* debug:start */` to `/* debug:end */`.
static BLOCK_REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)/\*\s*debug:start\s*\*/.*?/\*\s*debug:end\s*\*/").unwrap());

/// Remove every debug region from a document.
pub fn strip(document: &str) -> String {
    let output = HTML_REGION.replace_all(document, "");
    let output = BLOCK_REGION.replace_all(&output, "");

    output.into_owned()
}
