//! # Error Handling
//!
//! Centralized error handling for the `mkpatchlist` library. The `Error`
//! enum, built with `thiserror`, covers every anticipated failure mode of
//! the catalog loader and the dependency walker.
//!
//! The taxonomy is deliberately small:
//!
//! - Catalog document problems (`CatalogParse`, `Yaml`) are always fatal and
//!   always occur before any patch-list output is produced, since the whole
//!   catalog is merged before the traversal begins.
//! - Filesystem problems (`Io`, `Glob`, `GlobRead`) are fatal wherever they
//!   occur. The one recoverable case, a source directory without a
//!   `definition` file, is handled in place by the walker and never becomes
//!   an `Error` value.
//!
//! The `Result<T>` alias is used throughout the library to keep signatures
//! short.

use thiserror::Error;

/// Main error type for mkpatchlist operations
#[derive(Error, Debug)]
pub enum Error {
    /// A catalog document does not have the expected shape.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Catalog parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    CatalogParse {
        message: String,
        /// Optional hint for how to fix the catalog document
        hint: Option<String>,
    },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A filesystem error raised while iterating glob matches, wrapped from
    /// `glob::GlobError`.
    #[error("Glob read error: {0}")]
    GlobRead(#[from] glob::GlobError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
