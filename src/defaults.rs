//! Default locations and file patterns for mkpatchlist.
//!
//! This module centralizes the fixed on-disk conventions used across
//! commands, ensuring consistency and avoiding duplication. The defaults
//! can be overridden per command with `--catalog-dir` and `--patches-root`.

/// Default directory containing the series catalog documents.
pub const DEFAULT_CATALOG_DIR: &str = "docs/patches";

/// Default root directory under which source directories live.
pub const DEFAULT_PATCHES_ROOT: &str = "patches";

/// Glob matched against the catalog directory to discover documents.
pub const CATALOG_GLOB: &str = "*.yml";

/// Glob matched against a source directory to discover patch files.
pub const PATCH_GLOB: &str = "*.patch";

/// Name of the optional per-directory metadata file.
pub const DEFINITION_FILENAME: &str = "definition";
