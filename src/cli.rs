//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// mkpatchlist - Resolve patch series dependency trees into an ordered patch list
#[derive(Parser, Debug)]
#[command(name = "mkpatchlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the series catalog into the ordered patch list
    List(commands::list::ListArgs),

    /// Display the series dependency tree
    Tree(commands::tree::TreeArgs),

    /// Validate the series catalog without expanding it
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Logging goes to stderr through env_logger; RUST_LOG overrides the
        // --log-level flag. The patch list on stdout stays clean.
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .format_timestamp(None)
        .try_init()
        .ok();

        match self.command {
            Commands::List(args) => commands::list::execute(args),
            Commands::Tree(args) => commands::tree::execute(args),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
