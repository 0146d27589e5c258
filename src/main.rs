//! Stem Sort - move a tree of .png files into one folder per file stem
//!
//! With no arguments: everything under `pokemon/` goes to `organized/`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stem_sort::cli::Cli;
use stem_sort::{OrganizeConfig, Reorganizer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout only ever carries "Done")
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(EnvFilter::from_default_env().add_directive(format!("stem_sort={level}").parse()?))
        .init();

    let config = OrganizeConfig::from_cli(&cli);
    let source = config.source.clone();

    Reorganizer::new(config)?
        .run()
        .with_context(|| format!("Reorganizing {} failed", source.display()))?;

    println!("Done");
    Ok(())
}
