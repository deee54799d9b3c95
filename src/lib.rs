//! # mkpatchlist Library
//!
//! This library resolves a declared dependency tree of patch series into a
//! flat, ordered list of patch files, suitable for sequential application.
//! It is designed to be used by the `mkpatchlist` command-line tool but can
//! also be embedded by anything that needs a deterministic patch ordering.
//!
//! ## Quick Example
//!
//! ```
//! use mkpatchlist::catalog;
//! use mkpatchlist::expand::Walker;
//!
//! // Parse a catalog document: series keys map to the series that
//! // depend on them ("wanted by").
//! let tree = catalog::parse("base:\n  feature: {}\n").unwrap();
//! assert_eq!(tree.len(), 1);
//!
//! // Expand the tree against a patches root into an ordered patch list.
//! let walker = Walker::new("patches");
//! let mut out = Vec::new();
//! walker.walk(&tree, &mut out).unwrap();
//! let listing = String::from_utf8(out).unwrap();
//! assert!(listing.starts_with("# expanded from patches/base/*.patch"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Catalog (`catalog`)**: loads every `*.yml` document from the catalog
//!   directory and merges them, later-wins, into one `SeriesTree`.
//! - **Expansion (`expand`)**: walks the tree depth-first and expands each
//!   series into provenance comments, definition-file descriptions, and a
//!   lexically sorted patch-file list.
//! - **Defaults (`defaults`)**: the fixed on-disk conventions (catalog
//!   directory, patches root, file globs).
//!
//! The whole pipeline is single-threaded and read-only: the catalog is
//! built once at startup, the filesystem is never mutated, and the process
//! either runs to completion or aborts on the first fatal error.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod expand;
pub mod output;
pub mod suggestions;
