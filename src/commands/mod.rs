//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `mkpatchlist` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! Each command module contains an `Args` struct defining the
//! command-specific options, derived using `clap`, and an `execute`
//! function that performs the command's logic by calling into the
//! `mkpatchlist` library.

pub mod completions;
pub mod list;
pub mod tree;
pub mod validate;
