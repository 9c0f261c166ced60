//! Configure the page builder.

pub mod toml;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::cli::Opts;

/// Configuration for the page builder.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path of the source document.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Path of the built document.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Identifier mangling configuration.
    #[serde(default)]
    pub mangle: MangleConfig,

    /// External minifier configuration.
    #[serde(default)]
    pub external: ExternalConfig,
}

/// Configuration for the identifier mangler.
#[derive(Debug, Deserialize)]
pub struct MangleConfig {
    /// Sigil prepended to every generated token.
    #[serde(default = "default_sigil")]
    pub sigil: char,

    /// Candidate vocabulary of property names eligible for renaming.
    #[serde(default)]
    pub properties: Vec<String>,

    /// String literals eligible for hoisting.
    #[serde(default)]
    pub hoisted_strings: Vec<String>,
}

/// Configuration for the external minifier.
#[derive(Debug, Deserialize)]
pub struct ExternalConfig {
    /// Invocation tiers, tried in order.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<Tier>,
}

/// One external minifier invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Tier {
    /// Program to invoke.
    pub command: String,

    /// Arguments; `{input}` and `{output}` expand to file paths inside the
    /// temporary workspace.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Config {
    /// Create a configuration from an [`Opts`] object.
    ///
    /// Reads the configuration file when present, then applies command line
    /// overrides.
    pub fn from_opts(opts: &Opts) -> Result<Self> {
        let config_path = opts
            .config
            .clone()
            .or_else(|| Some(PathBuf::from("patine.toml")).filter(|path| path.exists()));

        let config = match config_path {
            Some(path) => self::toml::read_file(&path)
                .with_context(|| format!("reading configuration file {:?}", path))?,
            None => Self::default(),
        };

        let config = Self {
            input_path: opts.input.clone().unwrap_or(config.input_path),
            output_path: opts.output.clone().unwrap_or(config.output_path),
            ..config
        };

        config.check()?;

        Ok(config)
    }

    /// Check if configuration is valid.
    pub fn check(&self) -> Result<()> {
        if self.input_path == self.output_path {
            return Err(anyhow!("`output_path` must differ from `input_path`"));
        }

        let sigil = self.mangle.sigil;

        if !(sigil == '$' || sigil == '_' || sigil.is_ascii_alphabetic()) {
            return Err(anyhow!(
                "`mangle.sigil` {:?} cannot start a JavaScript identifier",
                sigil
            ));
        }

        for name in &self.mangle.properties {
            if !is_plain_identifier(name) {
                return Err(anyhow!(
                    "`mangle.properties` entry {:?} is not a plain identifier",
                    name
                ));
            }

            if name.starts_with(sigil) {
                return Err(anyhow!(
                    "`mangle.properties` entry {:?} must not start with the sigil {:?}",
                    name,
                    sigil
                ));
            }
        }

        for literal in &self.mangle.hoisted_strings {
            if literal.contains(['"', '\'', '\\']) {
                return Err(anyhow!(
                    "`mangle.hoisted_strings` entry {:?} must not contain quotes or backslashes",
                    literal
                ));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            mangle: MangleConfig::default(),
            external: ExternalConfig::default(),
        }
    }
}

impl Default for MangleConfig {
    fn default() -> Self {
        Self {
            sigil: default_sigil(),
            properties: Vec::new(),
            hoisted_strings: Vec::new(),
        }
    }
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

/// Default path of the source document.
fn default_input_path() -> PathBuf {
    PathBuf::from("index.html")
}

/// Default path of the built document.
fn default_output_path() -> PathBuf {
    PathBuf::from("dist/index.min.html")
}

/// Default token sigil.
fn default_sigil() -> char {
    '$'
}

/// Default external minifier tiers.
///
/// Tier 1 runs the Bun build minifier, which typically produces the smaller
/// output. Tier 2 runs the Bun transpiler API.
fn default_tiers() -> Vec<Tier> {
    vec![
        Tier {
            command: "bun".to_owned(),
            args: [
                "build",
                "{input}",
                "--minify",
                "--target=browser",
                "--format=iife",
                "--outfile",
                "{output}",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        Tier {
            command: "bun".to_owned(),
            args: [
                "-e",
                concat!(
                    "const [i,o]=process.argv.slice(1);",
                    "const s=await Bun.file(i).text();",
                    "const t=new Bun.Transpiler({loader:'js',minifyWhitespace:true,",
                    "minifyIdentifiers:true,minifySyntax:true});",
                    "await Bun.write(o,t.transformSync(s));",
                ),
                "--",
                "{input}",
                "{output}",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
    ]
}

/// Check if a name is a bare identifier without sigil characters.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
