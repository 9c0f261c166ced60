//! Command line utilities.

use std::path::PathBuf;

use anyhow::{Context, Result};
pub use clap::Parser;
use clap::{Args, Subcommand};
use log::info;

use crate::Config;

/// Command line usage description.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Command line options.
    #[command(flatten)]
    pub opts: Opts,
}

/// List of commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the minified document
    Build,

    /// Report raw and compressed sizes of the source and built documents
    Report,
}

/// Command line options.
#[derive(Debug, Args, Clone)]
pub struct Opts {
    /// Configuration file [default: "patine.toml"]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source document [default: "index.html"]
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Built document [default: "dist/index.min.html"]
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

/// Run the `build` command.
pub fn build(opts: &Opts) -> Result<()> {
    let config = Config::from_opts(opts).context("loading configuration")?;

    info!("Building...");

    crate::build(&config)?;

    Ok(())
}

/// Run the `report` command.
pub fn report(opts: &Opts) -> Result<()> {
    let config = Config::from_opts(opts).context("loading configuration")?;

    crate::report(&config)?;

    Ok(())
}
