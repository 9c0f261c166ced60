//! Alias 2D canvas context methods.
//!
//! A page drawing on a `<canvas>` calls a handful of context methods many
//! times. This pass finds the single assignment that obtains the 2D drawing
//! context, introduces a sigil-prefixed alias for each method with at least
//! two call sites, rewrites those call sites, and splices the alias bindings
//! into the original assignment as comma continuations, so no new statement
//! is introduced. Absence of the assignment pattern degrades to a no-op.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::mangle::occurs;

/// Method names eligible for aliasing, with their alias suffixes.
const METHODS: [(&str, &str); 18] = [
    ("beginPath", "bp"),
    ("moveTo", "mt"),
    ("lineTo", "lt"),
    ("fill", "fi"),
    ("stroke", "st"),
    ("save", "sv"),
    ("restore", "re"),
    ("arc", "ar"),
    ("fillRect", "fr"),
    ("strokeRect", "sr"),
    ("translate", "tr"),
    ("rotate", "ro"),
    ("scale", "sc"),
    ("setTransform", "tf"),
    ("createLinearGradient", "lg"),
    ("createRadialGradient", "rg"),
    ("fillText", "ft"),
    ("strokeText", "sx"),
];

/// The assignment that obtains a 2D drawing context.
static CONTEXT_ASSIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*[A-Za-z0-9_$.]+\.getContext\(\s*['"]2d['"]\s*\)"#)
        .unwrap()
});

/// A method call of the form `object.method(`.
static METHOD_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_$]+\.[A-Za-z0-9_$]+\(").unwrap());

/// Alias context method calls in a script.
///
/// Only the first matching context assignment is considered; its variable is
/// the only one ever touched.
pub fn alias(script: &str, sigil: char) -> String {
    let Some(captures) = CONTEXT_ASSIGN.captures(script) else {
        return script.to_owned();
    };

    let (Some(assignment), Some(context)) = (captures.get(0), captures.get(1)) else {
        return script.to_owned();
    };

    let context = context.as_str();

    let mut counts: HashMap<&str, usize> = HashMap::new();

    for (object, method, _) in call_sites(script) {
        if object != context {
            continue;
        }
        if let Some(&(name, _)) = METHODS.iter().find(|&&(name, _)| name == method) {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    let aliases: HashMap<&str, String> = METHODS
        .iter()
        .filter(|&&(name, _)| counts.get(name).is_some_and(|count| *count >= 2))
        .map(|&(name, suffix)| (name, format!("{sigil}{suffix}")))
        .filter(|(_, alias_name)| !occurs(script, alias_name))
        .collect();

    if aliases.is_empty() {
        return script.to_owned();
    }

    // Bind the aliases as comma continuations of the context assignment.
    let bindings: String = METHODS
        .iter()
        .filter_map(|&(name, _)| aliases.get(name).map(|alias_name| (name, alias_name)))
        .map(|(name, alias_name)| format!(",{alias_name}={context}.{name}.bind({context})"))
        .collect();

    let spliced = format!(
        "{}{}{}",
        &script[..assignment.end()],
        bindings,
        &script[assignment.end()..]
    );

    let mut output = String::with_capacity(spliced.len());
    let mut last = 0;

    for (object, method, range) in call_sites(&spliced) {
        if object != context {
            continue;
        }
        let Some(alias_name) = aliases.get(method) else {
            continue;
        };
        output.push_str(&spliced[last..range.start]);
        output.push_str(alias_name);
        output.push('(');
        last = range.end;
    }

    output.push_str(&spliced[last..]);
    output
}

/// Iterate over `object.method(` call sites in a script.
///
/// Property chains (`a.b.method(`) yield only their last two segments, which
/// is enough to reject them: the object segment is then preceded by a dot and
/// skipped.
fn call_sites(script: &str) -> impl Iterator<Item = (&str, &str, std::ops::Range<usize>)> + '_ {
    METHOD_CALL.find_iter(script).filter_map(move |m| {
        if m.start() > 0 && script.as_bytes()[m.start() - 1] == b'.' {
            return None;
        }

        let call = &m.as_str()[..m.as_str().len() - 1];
        let (object, method) = call.split_once('.')?;

        Some((object, method, m.range()))
    })
}

#[cfg(test)]
mod tests {
    use super::alias;

    #[test]
    fn aliases_repeated_context_calls() {
        const SCRIPT: &str = concat!(
            "const g=cv.getContext('2d');",
            "g.beginPath();g.moveTo(0,0);g.lineTo(1,1);g.lineTo(2,0);g.stroke();",
            "g.beginPath();g.stroke();",
        );

        let result = alias(SCRIPT, '$');

        assert!(result.contains(",$bp=g.beginPath.bind(g)"));
        assert!(result.contains(",$lt=g.lineTo.bind(g)"));
        assert!(result.contains(",$st=g.stroke.bind(g)"));
        assert!(result.contains("$bp();"));
        assert!(result.contains("$lt(1,1);$lt(2,0);"));
        // One call site is not worth a binding
        assert!(result.contains("g.moveTo(0,0)"));
        assert!(!result.contains("$mt"));
    }

    #[test]
    fn bindings_extend_the_assignment() {
        const SCRIPT: &str = "const g=cv.getContext('2d');g.fill();g.fill();";

        let result = alias(SCRIPT, '$');

        assert!(result.starts_with("const g=cv.getContext('2d'),$fi=g.fill.bind(g);"));
        assert!(result.ends_with("$fi();$fi();"));
    }

    #[test]
    fn leaves_other_objects_alone() {
        const SCRIPT: &str =
            "const g=el.getContext('2d');g.arc(0,0,1,0,7);g.arc(1,1,1,0,7);h.arc(2);o.g.arc(3);";

        let result = alias(SCRIPT, '$');

        assert!(result.contains("$ar(0,0,1,0,7);$ar(1,1,1,0,7);"));
        assert!(result.contains("h.arc(2);"));
        assert!(result.contains("o.g.arc(3);"));
    }

    #[test]
    fn no_op_without_context_assignment() {
        const SCRIPT: &str = "g.beginPath();g.beginPath();";

        assert_eq!(alias(SCRIPT, '$'), SCRIPT);
    }

    #[test]
    fn no_op_without_repeated_calls() {
        const SCRIPT: &str = "const g=cv.getContext('2d');g.beginPath();";

        assert_eq!(alias(SCRIPT, '$'), SCRIPT);
    }
}
