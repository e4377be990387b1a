//! Club membership registration prompt.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the member store.
//! - Run one interactive session and close the store on every exit path.

mod command;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use club_core::{init_logging, MemberRegistry};
use config::CliArgs;
use session::Session;
use std::io;

fn main() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let settings = CliArgs::parse().resolve(&cwd);

    // Logging is diagnostic only; the prompt still works without it.
    if let Err(err) = init_logging(&settings.log_level, &settings.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let registry = MemberRegistry::initialize(&settings.store)
        .with_context(|| format!("failed to open member store at {}", settings.store.location))?;

    let outcome = Session::new(&registry, io::stdin().lock(), io::stdout().lock()).run();
    let closed = registry.close().context("failed to close member store");

    outcome?;
    closed
}
