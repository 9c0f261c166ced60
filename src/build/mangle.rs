//! Shrink a fixed vocabulary of property names.
//!
//! The mangler performs a closed-world rename: every whole-word occurrence of
//! a configured candidate name is replaced by a short generated token, and all
//! other identifiers are left untouched. Behavioral equivalence relies on the
//! vocabulary never colliding with a reserved word, an external API member, or
//! a user-visible string; the configuration layer enforces the vocabulary
//! shape, not this module.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MangleConfig;

/// Token alphabet: 63 symbols.
const ALPHABET: &[u8; 63] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Maximal runs of JavaScript identifier characters.
static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_$]+").unwrap());

/// Build the rename mapping for a script.
///
/// Candidates are ranked by whole-word occurrence count descending, ties
/// broken by name ascending, then assigned tokens in rank order. Candidates
/// that never occur are dropped. The same script and vocabulary always
/// produce the same mapping.
pub fn rename_map(script: &str, config: &MangleConfig) -> Vec<(String, String)> {
    let mut counts: HashMap<&str, usize> = config
        .properties
        .iter()
        .map(|name| (name.as_str(), 0))
        .collect();

    for ident in IDENT.find_iter(script) {
        if let Some(count) = counts.get_mut(ident.as_str()) {
            *count += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (name, _))| (name.to_owned(), short_token(config.sigil, rank)))
        .collect()
}

/// Replace every whole-word candidate occurrence with its token.
///
/// Tokens are sigil-prefixed while candidates cannot start with the sigil, so
/// a single substitution pass cannot rename a token a second time.
pub fn mangle(script: &str, config: &MangleConfig) -> String {
    let map: HashMap<String, String> = rename_map(script, config).into_iter().collect();

    if map.is_empty() {
        return script.to_owned();
    }

    IDENT
        .replace_all(script, |captures: &regex::Captures| {
            let ident = &captures[0];
            map.get(ident).cloned().unwrap_or_else(|| ident.to_owned())
        })
        .into_owned()
}

/// Generate the short token for a rank index.
///
/// Tokens are the bijective base-63 representation of `index + 1`, prefixed
/// with the sigil. Token lengths are non-decreasing in the index and no two
/// indices share a token.
pub fn short_token(sigil: char, index: usize) -> String {
    let mut digits = Vec::new();
    let mut n = index + 1;

    while n > 0 {
        n -= 1;
        digits.push(ALPHABET[n % ALPHABET.len()] as char);
        n /= ALPHABET.len();
    }

    let mut token = String::with_capacity(1 + digits.len());
    token.push(sigil);
    token.extend(digits.into_iter().rev());
    token
}

/// Check if a name occurs as a whole identifier in a script.
pub(crate) fn occurs(script: &str, name: &str) -> bool {
    IDENT.find_iter(script).any(|m| m.as_str() == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{mangle, occurs, rename_map, short_token};
    use crate::config::MangleConfig;

    fn config(properties: &[&str]) -> MangleConfig {
        MangleConfig {
            properties: properties.iter().map(|name| name.to_string()).collect(),
            ..MangleConfig::default()
        }
    }

    #[test]
    fn ranking_is_deterministic() {
        const SCRIPT: &str = "a.speed=a.speed+a.angle;b.speed=0;b.phase=a.angle;";
        let config = config(&["speed", "angle", "phase", "unused"]);

        let first = rename_map(SCRIPT, &config);
        let second = rename_map(SCRIPT, &config);

        assert_eq!(first, second);
        assert_eq!(
            first,
            [
                ("speed".to_owned(), "$a".to_owned()),
                ("angle".to_owned(), "$b".to_owned()),
                ("phase".to_owned(), "$c".to_owned()),
            ]
        );
    }

    #[test]
    fn ties_break_lexicographically() {
        const SCRIPT: &str = "o.zeta=o.alpha;o.alpha=o.zeta;";

        let map = rename_map(SCRIPT, &config(&["zeta", "alpha"]));

        assert_eq!(
            map,
            [
                ("alpha".to_owned(), "$a".to_owned()),
                ("zeta".to_owned(), "$b".to_owned()),
            ]
        );
    }

    #[test]
    fn matches_whole_words_only() {
        const SCRIPT: &str = "a.speed=1;a.speedy=2;hi$speed=3;";
        let config = config(&["speed"]);

        assert_eq!(
            rename_map(SCRIPT, &config),
            [("speed".to_owned(), "$a".to_owned())]
        );
        assert_eq!(mangle(SCRIPT, &config), "a.$a=1;a.speedy=2;hi$speed=3;");
    }

    #[test]
    fn mangling_twice_is_stable() {
        const SCRIPT: &str = "p.phase=p.phase+p.drift;";
        let config = config(&["phase", "drift"]);

        let once = mangle(SCRIPT, &config);
        let twice = mangle(&once, &config);

        assert_eq!(once, "p.$a=p.$a+p.$b;");
        assert_eq!(once, twice);
    }

    #[test]
    fn tokens_are_injective_and_non_decreasing() {
        let mut seen = HashSet::new();
        let mut last_len = 0;

        for index in 0..4096 {
            let token = short_token('$', index);

            assert!(token.len() >= last_len);
            last_len = token.len();
            assert!(seen.insert(token));
        }
    }

    #[test]
    fn first_tokens() {
        assert_eq!(short_token('$', 0), "$a");
        assert_eq!(short_token('$', 25), "$z");
        assert_eq!(short_token('$', 62), "$_");
        assert_eq!(short_token('$', 63), "$aa");
    }

    #[test]
    fn occurrence_check_is_whole_word() {
        assert!(occurs("let q=1;", "q"));
        assert!(!occurs("let quit=1;", "q"));
    }
}
