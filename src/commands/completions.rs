//! # Completions Command Implementation
//!
//! This module implements the `completions` subcommand, which generates
//! shell completion scripts via `clap_complete`.
//!
//! ## Example
//!
//! ```bash
//! # Generate and install bash completions
//! mkpatchlist completions bash > ~/.local/share/bash-completion/completions/mkpatchlist
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
///
/// Writes the completion script for the requested shell to stdout; redirect
/// it to the appropriate location for your shell configuration.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "mkpatchlist", &mut io::stdout());
    Ok(())
}
