//! # Error Suggestions
//!
//! Helper functions for generating error messages with hints. Errors should
//! tell users what went wrong and how to fix it.

use std::path::Path;

use crate::defaults::{CATALOG_GLOB, DEFAULT_CATALOG_DIR};

/// Error for a catalog directory that does not exist.
pub fn catalog_dir_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Catalog directory not found: {path}\n\n\
         hint: Series catalogs live in {default} by default\n\
         hint: Use --catalog-dir to point at a different directory\n\
         hint: Set the MKPATCHLIST_CATALOG environment variable",
        path = path.display(),
        default = DEFAULT_CATALOG_DIR,
    )
}

/// Error for a catalog directory that contains no catalog documents.
pub fn no_catalog_documents(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "No catalog documents ({glob}) found in {path}\n\n\
         hint: Each document is a YAML mapping from series keys to wanted-by sub-trees\n\
         hint: A minimal document is a single line: `my-series: {{}}`",
        glob = CATALOG_GLOB,
        path = path.display(),
    )
}
