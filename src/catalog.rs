//! # Series Catalog Loading and Merging
//!
//! This module defines the data structure that represents the patch series
//! dependency tree, as well as the logic for loading it from a directory of
//! catalog documents.
//!
//! ## Key Components
//!
//! - **`SeriesTree`**: a recursive, insertion-ordered mapping from a series
//!   key to the sub-tree of series that depend on it ("wanted by"). An empty
//!   sub-tree denotes a leaf. A series key is a string of one or more
//!   whitespace-separated source-directory names.
//!
//! - **Loading (`load`, `load_documents`, `from_file`)**: every `*.yml`
//!   document in the catalog directory is parsed into a `SeriesTree` and the
//!   results are merged into one combined tree.
//!
//! ## Parsing
//!
//! Documents are deserialized directly into `SeriesTree` through a custom
//! `Deserialize` implementation that validates the shape as it goes: only
//! mappings from string keys to sub-trees are accepted. A YAML `null` value
//! (a bare `series-name:` line) is treated as an empty sub-tree, since that
//! is how hand-written catalogs naturally spell a leaf. Anything else, a
//! sequence, a scalar, a non-string key, fails the load with a descriptive
//! error. Malformed documents abort the whole load; there is no partial
//! catalog.
//!
//! ## Merge semantics
//!
//! Top-level keys collide across documents with later-wins semantics: the
//! later document's sub-tree replaces the earlier one, in place, so the key
//! keeps its original sibling position. Each collision is reported through
//! `log::warn!` naming the series and the winning document. Document
//! discovery goes through `glob`, which yields paths in sorted order, so the
//! merge outcome is deterministic by filename.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use log::warn;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::defaults::CATALOG_GLOB;
use crate::error::{Error, Result};

/// The patch series dependency tree.
///
/// Maps each series key to the sub-tree of series that want it applied
/// first. Entries iterate in insertion order, never sorted, since series
/// keys are semantically distinct names rather than a sortable set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTree {
    entries: Vec<(String, SeriesTree)>,
}

impl SeriesTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a series with its wanted-by sub-tree.
    ///
    /// If the key is already present its sub-tree is replaced in place, the
    /// key keeps its original position, and the previous sub-tree is
    /// returned.
    pub fn insert(&mut self, key: String, subtree: SeriesTree) -> Option<SeriesTree> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(existing, subtree))
        } else {
            self.entries.push((key, subtree));
            None
        }
    }

    /// Look up the wanted-by sub-tree for a series key.
    pub fn get(&self, key: &str) -> Option<&SeriesTree> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, subtree)| subtree)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesTree)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of series entries in the tree, counting every
    /// occurrence (a key appearing under multiple parents counts each time).
    pub fn series_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, subtree)| 1 + subtree.series_count())
            .sum()
    }

    /// All source-directory names referenced anywhere in the tree, unique,
    /// in first-traversal order.
    pub fn source_directories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut directories = Vec::new();
        self.collect_directories(&mut seen, &mut directories);
        directories
    }

    fn collect_directories<'a>(&'a self, seen: &mut HashSet<&'a str>, out: &mut Vec<&'a str>) {
        for (key, subtree) in self.iter() {
            for directory in key.split_whitespace() {
                if seen.insert(directory) {
                    out.push(directory);
                }
            }
            subtree.collect_directories(seen, out);
        }
    }

    /// Reject series keys that name no source directories at all.
    fn check_keys(&self) -> Result<()> {
        for (key, subtree) in self.iter() {
            if key.split_whitespace().next().is_none() {
                return Err(Error::CatalogParse {
                    message: format!("series key {:?} names no source directories", key),
                    hint: Some(
                        "a series key is one or more whitespace-separated source directory names"
                            .to_string(),
                    ),
                });
            }
            subtree.check_keys()?;
        }
        Ok(())
    }
}

impl IntoIterator for SeriesTree {
    type Item = (String, SeriesTree);
    type IntoIter = std::vec::IntoIter<(String, SeriesTree)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de> Deserialize<'de> for SeriesTree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TreeVisitor;

        impl<'de> Visitor<'de> for TreeVisitor {
            type Value = SeriesTree;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping from series keys to wanted-by sub-trees")
            }

            // A bare `series-name:` line parses as null; treat it as a leaf.
            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(SeriesTree::new())
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut tree = SeriesTree::new();
                while let Some((key, subtree)) = map.next_entry::<String, SeriesTree>()? {
                    if tree.insert(key.clone(), subtree).is_some() {
                        warn!(
                            "duplicate series key '{}' within one catalog document; \
                             the later definition wins",
                            key
                        );
                    }
                }
                Ok(tree)
            }
        }

        deserializer.deserialize_any(TreeVisitor)
    }
}

/// Parse a single catalog document into a `SeriesTree`.
pub fn parse(content: &str) -> Result<SeriesTree> {
    let tree: SeriesTree = serde_yaml::from_str(content)?;
    tree.check_keys()?;
    Ok(tree)
}

/// Parse a `SeriesTree` from a catalog document on disk.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SeriesTree> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content).map_err(|error| annotate(path, error))
}

/// Prefix a parse error with the offending document path.
fn annotate(path: &Path, error: Error) -> Error {
    match error {
        Error::CatalogParse { message, hint } => Error::CatalogParse {
            message: format!("{}: {}", path.display(), message),
            hint,
        },
        Error::Yaml(e) => Error::CatalogParse {
            message: format!("{}: {}", path.display(), e),
            hint: Some(
                "every catalog document must be a YAML mapping from series keys to \
                 (possibly empty) wanted-by sub-trees"
                    .to_string(),
            ),
        },
        other => other,
    }
}

/// Discover catalog documents (`*.yml`) in the catalog directory.
///
/// The `glob` crate yields entries in sorted order, so the result is
/// deterministic by filename. A missing catalog directory simply matches
/// nothing.
pub fn document_paths(catalog_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = catalog_dir.join(CATALOG_GLOB);
    let paths = glob::glob(&pattern.to_string_lossy())?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(paths)
}

/// Load every catalog document in the catalog directory, unmerged.
pub fn load_documents(catalog_dir: &Path) -> Result<Vec<(PathBuf, SeriesTree)>> {
    let mut documents = Vec::new();
    for path in document_paths(catalog_dir)? {
        let tree = from_file(&path)?;
        documents.push((path, tree));
    }
    Ok(documents)
}

/// Merge parsed documents into one combined tree, later-wins on top-level
/// key collision. Each collision is logged as a warning.
pub fn merge(documents: Vec<(PathBuf, SeriesTree)>) -> SeriesTree {
    let mut combined = SeriesTree::new();
    for (path, document) in documents {
        for (key, subtree) in document {
            if combined.insert(key.clone(), subtree).is_some() {
                warn!(
                    "series '{}' redefined by {}; the later definition wins",
                    key,
                    path.display()
                );
            }
        }
    }
    combined
}

/// Load and merge the whole series catalog from a directory.
pub fn load(catalog_dir: &Path) -> Result<SeriesTree> {
    Ok(merge(load_documents(catalog_dir)?))
}
