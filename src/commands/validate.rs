//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks the
//! series catalog without expanding it into a patch list.
//!
//! ## Functionality
//!
//! - **Document Validation**: parses every catalog document and reports
//!   per-document results.
//! - **Collision Detection**: surfaces top-level series keys defined by
//!   more than one document (the later document wins when expanding).
//! - **Source Directory Checks**: verifies that every referenced source
//!   directory exists under the patches root. A missing directory is a
//!   warning, not an error, since it legally expands to an empty patch
//!   list.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use mkpatchlist::catalog::{self, SeriesTree};
use mkpatchlist::defaults::{DEFAULT_CATALOG_DIR, DEFAULT_PATCHES_ROOT};
use mkpatchlist::output::{emoji, OutputConfig};
use mkpatchlist::suggestions;

/// Validate the series catalog without expanding it
#[derive(Args, Debug)]
pub struct ValidateArgs {
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

    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
///
/// Performs the full set of catalog checks and reports any issues. Errors
/// (malformed documents) always fail the run; warnings (key collisions,
/// missing source directories) fail it only under `--strict`.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating series catalog: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.catalog_dir.display()
    );

    if !args.catalog_dir.is_dir() {
        return Err(suggestions::catalog_dir_not_found(&args.catalog_dir));
    }

    let mut has_warnings = false;
    let mut has_errors = false;

    // Parse every document individually so one malformed file doesn't hide
    // the state of the others.
    let paths = catalog::document_paths(&args.catalog_dir)
        .map_err(|e| anyhow::anyhow!("Failed to scan catalog directory: {}", e))?;

    if paths.is_empty() {
        return Err(suggestions::no_catalog_documents(&args.catalog_dir));
    }

    let mut documents = Vec::new();
    for path in &paths {
        match catalog::from_file(path) {
            Ok(tree) => {
                println!(
                    "{} {}: {} top-level series",
                    emoji(&out, "✅", "[OK]"),
                    path.display(),
                    tree.len()
                );
                documents.push((path.clone(), tree));
            }
            Err(e) => {
                println!("{} {}", emoji(&out, "❌", "[ERR]"), e);
                has_errors = true;
            }
        }
    }

    // Top-level key collisions across documents. The merge resolves these
    // later-wins; validate makes them visible.
    println!(
        "\n{} Checking for series collisions...",
        emoji(&out, "🔄", "[CHECK]")
    );
    has_warnings |= report_collisions(&out, &documents);

    let merged = catalog::merge(documents);

    println!("\n{} Catalog Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Catalog documents: {}", paths.len());
    println!("   Top-level series: {}", merged.len());
    println!("   Series entries (with re-expansions): {}", merged.series_count());
    println!(
        "   Source directories referenced: {}",
        merged.source_directories().len()
    );

    // Source directory existence. Missing is only a warning: the glob for a
    // missing directory matches nothing and expansion emits an empty list.
    println!(
        "\n{} Checking source directories under {}...",
        emoji(&out, "🔍", "[SCAN]"),
        args.patches_root.display()
    );
    has_warnings |= report_missing_directories(&out, &merged, &args.patches_root);

    // Final result
    println!("\n{} Validation Result:", emoji(&out, "🎯", "[RESULT]"));

    if has_errors {
        println!(
            "{} Catalog has errors that must be fixed",
            emoji(&out, "❌", "[ERR]")
        );
        return Err(anyhow::anyhow!("Catalog validation failed"));
    }

    if has_warnings && args.strict {
        println!(
            "{} Catalog has warnings (strict mode enabled)",
            emoji(&out, "❌", "[ERR]")
        );
        return Err(anyhow::anyhow!("Catalog validation failed in strict mode"));
    }

    if has_warnings {
        println!(
            "{} Catalog is valid but has warnings",
            emoji(&out, "⚠️", "[WARN]")
        );
    } else {
        println!("{} Catalog is valid", emoji(&out, "✅", "[OK]"));
    }

    Ok(())
}

/// Report top-level keys defined by more than one document. Returns whether
/// any collision was found.
fn report_collisions(out: &OutputConfig, documents: &[(PathBuf, SeriesTree)]) -> bool {
    let mut first_seen: HashMap<&str, &Path> = HashMap::new();
    let mut found = false;

    for (path, tree) in documents {
        for (key, _) in tree.iter() {
            match first_seen.get(key) {
                Some(earlier) => {
                    println!(
                        "{} series '{}' redefined by {} (earlier definition in {}); \
                         the later definition wins",
                        emoji(out, "⚠️", "[WARN]"),
                        key,
                        path.display(),
                        earlier.display()
                    );
                    found = true;
                }
                None => {
                    first_seen.insert(key, path.as_path());
                }
            }
        }
    }

    if !found {
        println!("{} No series collisions detected", emoji(out, "✅", "[OK]"));
    }
    found
}

/// Report referenced source directories missing from the patches root.
/// Returns whether any were missing.
fn report_missing_directories(out: &OutputConfig, merged: &SeriesTree, patches_root: &Path) -> bool {
    let mut found = false;

    for directory in merged.source_directories() {
        if !patches_root.join(directory).is_dir() {
            println!(
                "{} source directory not found: {} (series expands to an empty patch list)",
                emoji(out, "⚠️", "[WARN]"),
                patches_root.join(directory).display()
            );
            found = true;
        }
    }

    if !found {
        println!(
            "{} All referenced source directories exist",
            emoji(out, "✅", "[OK]")
        );
    }
    found
}
