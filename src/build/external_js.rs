//! Invoke an external JavaScript minifier.
//!
//! The invocation strategy is injected configuration: a list of tiers, each a
//! command with argument templates, tried in order inside a scoped temporary
//! workspace. A tier fails when its process cannot be spawned, exits
//! non-zero, or leaves a missing or empty output file; failure falls through
//! to the next tier and is never fatal. When every tier fails, the
//! pattern-based minifier takes over.

use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::{ExternalConfig, Tier};

use super::minify_js::minify_js;

/// Minify a script through the configured external tiers.
///
/// The returned text has the same observable program behavior as the input,
/// modulo identifier names. Falls back to [`minify_js`] when no tier produces
/// usable output.
pub fn minify(script: &str, config: &ExternalConfig) -> String {
    match minify_external(script, &config.tiers) {
        Some(output) => output,
        None => minify_js(script),
    }
}

/// Try each tier in order, returning the first usable output.
///
/// The temporary workspace is removed when this returns, on every path.
fn minify_external(script: &str, tiers: &[Tier]) -> Option<String> {
    if tiers.is_empty() {
        return None;
    }

    let temp_dir = match tempfile::Builder::new().prefix("patine-").tempdir() {
        Ok(temp_dir) => temp_dir,
        Err(error) => {
            warn!("Failed to create a workspace for the external minifier: {error}");
            return None;
        }
    };

    let input_path = temp_dir.path().join("in.js");

    if let Err(error) = std::fs::write(&input_path, script) {
        warn!("Failed to stage the script for the external minifier: {error}");
        return None;
    }

    for (index, tier) in tiers.iter().enumerate() {
        let output_path = temp_dir.path().join(format!("out-{index}.js"));

        match run_tier(tier, &input_path, &output_path) {
            Some(output) => return Some(output),
            None => debug!("External minifier tier {index} produced no usable output"),
        }
    }

    None
}

/// Run one tier; `None` when it produces no usable output.
fn run_tier(tier: &Tier, input_path: &Path, output_path: &Path) -> Option<String> {
    let args: Vec<String> = tier
        .args
        .iter()
        .map(|arg| {
            arg.replace("{input}", &input_path.to_string_lossy())
                .replace("{output}", &output_path.to_string_lossy())
        })
        .collect();

    let status = Command::new(&tier.command)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .ok()?;

    if !status.success() {
        return None;
    }

    let output = std::fs::read_to_string(output_path).ok()?;
    let output = output.trim();

    (!output.is_empty()).then(|| output.to_owned())
}
