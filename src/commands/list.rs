//! # List Command Implementation
//!
//! This module implements the `list` subcommand, the core operation of the
//! tool: load the series catalog, walk the dependency tree depth-first, and
//! print the flat, provenance-annotated patch list to stdout.
//!
//! The output is consumed by downstream patch-application pipelines, so it
//! is never decorated and diagnostics go to stderr via the log facade. A
//! run either completes fully or aborts with a non-zero exit; the output of
//! an aborted run must be treated as unusable.

use anyhow::Result;
use clap::Args;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

use mkpatchlist::catalog;
use mkpatchlist::defaults::{DEFAULT_CATALOG_DIR, DEFAULT_PATCHES_ROOT};
use mkpatchlist::expand::Walker;

/// Resolve the series catalog into the ordered patch list
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing the series catalog documents (*.yml).
    ///
    /// Can also be set with the `MKPATCHLIST_CATALOG` environment variable.
    #[arg(
        long,
        value_name = "DIR",
        env = "MKPATCHLIST_CATALOG",
        default_value = DEFAULT_CATALOG_DIR
    )]
    pub catalog_dir: PathBuf,

    /// Root directory under which the source directories live.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PATCHES_ROOT)]
    pub patches_root: PathBuf,
}

/// Execute the `list` command.
///
/// Loads and merges every catalog document, then expands the merged tree
/// against the patches root. An empty or missing catalog directory produces
/// an empty list, which is a successful run.
pub fn execute(args: ListArgs) -> Result<()> {
    let tree = catalog::load(&args.catalog_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load series catalog from {}: {}",
            args.catalog_dir.display(),
            e
        )
    })?;
    debug!(
        "loaded {} top-level series from {}",
        tree.len(),
        args.catalog_dir.display()
    );

    let walker = Walker::new(&args.patches_root);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    walker.walk(&tree, &mut out).map_err(|e| {
        anyhow::anyhow!(
            "Failed to expand patch series under {}: {}",
            args.patches_root.display(),
            e
        )
    })?;
    out.flush()?;

    Ok(())
}
