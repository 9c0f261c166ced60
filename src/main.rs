//! Single-file HTML page minifier.

use anyhow::Result;
use log::LevelFilter;
use patine::cli::{Cli, Command, Parser};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => patine::cli::build(&cli.opts)?,
        Command::Report => patine::cli::report(&cli.opts)?,
    }

    Ok(())
}
