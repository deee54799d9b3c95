//! # mkpatchlist CLI
//!
//! This is the binary entry point for the `mkpatchlist` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The core logic lives in the `mkpatchlist` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
