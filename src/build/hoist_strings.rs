//! Hoist common string literals.
//!
//! A configured literal occurring more than twice (in either quote form) is
//! replaced by a single-letter variable declared immediately inside the
//! outermost immediately-invoked function wrapper. Letters already used as
//! identifiers in the script are skipped. Absence of the wrapper, or of any
//! literal crossing the threshold, degrades to a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

use super::mangle::occurs;

/// Outermost IIFE wrapper openings: `(function(){` or `(()=>{`.
static WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(?:function\s*\(\s*\)\s*\{|\(\s*\)\s*=>\s*\{)").unwrap());

/// Pool of hoist variable names.
const LETTERS: [&str; 8] = ["q", "j", "k", "z", "w", "y", "v", "u"];

/// Hoist configured string literals in a script.
pub fn hoist(script: &str, literals: &[String]) -> String {
    if WRAPPER.find(script).is_none() {
        return script.to_owned();
    }

    let mut letters = LETTERS
        .into_iter()
        .filter(|letter| !occurs(script, letter));
    let mut output = script.to_owned();
    let mut declarations = Vec::new();

    for literal in literals {
        let single = format!("'{literal}'");
        let double = format!("\"{literal}\"");

        let count = output.matches(&single).count() + output.matches(&double).count();
        if count <= 2 {
            continue;
        }

        let Some(letter) = letters.next() else {
            break;
        };

        output = output.replace(&single, letter).replace(&double, letter);
        declarations.push(format!("{letter}=\"{literal}\""));
    }

    if declarations.is_empty() {
        return output;
    }

    // The wrapper text holds no quotes, so it survived the replacements.
    let Some(wrapper) = WRAPPER.find(&output) else {
        return output;
    };

    format!(
        "{}var {};{}",
        &output[..wrapper.end()],
        declarations.join(","),
        &output[wrapper.end()..]
    )
}
