//! # Dependency Walking and Series Expansion
//!
//! This module turns a merged `SeriesTree` into the flat, ordered patch
//! list. It is a pre-order, depth-first traversal: each series key is
//! expanded into its constituent source directories, then the series'
//! wanted-by sub-tree is walked in full before the next sibling is visited.
//!
//! ## Expansion of one source directory
//!
//! For each whitespace-separated directory name in a series key, in order:
//!
//! 1. A provenance comment naming the glob pattern used for the directory's
//!    patch files (`# expanded from patches/<dir>/*.patch`).
//! 2. The directory's `definition` file, if present, emitted line by line as
//!    comments. Comment lines (`#`) and `Depends:` declarations are
//!    suppressed; free-form description lines pass through. A missing
//!    definition file emits nothing and is not an error.
//! 3. Every file matching the patch glob, sorted lexically, one path per
//!    line. An empty match emits zero lines, no placeholder.
//! 4. One blank separator line.
//!
//! The traversal is purely structural and visits every occurrence of a key:
//! a series appearing under multiple parents is re-expanded each time, with
//! no memoization across branches.
//!
//! Everything is written to a caller-supplied `io::Write` sink, so the
//! traversal can be exercised against an in-memory buffer; the `list`
//! command hands it a locked stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::catalog::SeriesTree;
use crate::defaults::{DEFINITION_FILENAME, PATCH_GLOB};
use crate::error::Result;

/// Walks a series dependency tree and expands it against a patches root.
pub struct Walker {
    patches_root: PathBuf,
}

impl Walker {
    pub fn new<P: Into<PathBuf>>(patches_root: P) -> Self {
        Self {
            patches_root: patches_root.into(),
        }
    }

    /// Walk the tree depth-first, expanding each series before its
    /// wanted-by sub-tree and each sub-tree before the next sibling.
    ///
    /// The tree is trusted to be acyclic; no cycle detection is performed.
    /// An owned `SeriesTree` cannot contain a cycle, so the recursion
    /// always terminates.
    pub fn walk<W: Write>(&self, tree: &SeriesTree, out: &mut W) -> Result<()> {
        for (series, wanted_by) in tree.iter() {
            self.expand_series(series, out)?;
            if !wanted_by.is_empty() {
                self.walk(wanted_by, out)?;
            }
        }
        Ok(())
    }

    /// Expand one series key: each of its source directories, in the order
    /// given by the key.
    pub fn expand_series<W: Write>(&self, series: &str, out: &mut W) -> Result<()> {
        for directory in series.split_whitespace() {
            self.expand_directory(directory, out)?;
        }
        Ok(())
    }

    fn expand_directory<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let directory = self.patches_root.join(name);
        let pattern = directory.join(PATCH_GLOB);
        let pattern = pattern.to_string_lossy();

        writeln!(out, "# expanded from {}", pattern)?;
        self.emit_definition(&directory, out)?;

        let mut patches: Vec<PathBuf> = glob::glob(&pattern)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        patches.sort();
        debug!("{}: {} patch file(s)", pattern, patches.len());

        for patch in &patches {
            writeln!(out, "{}", patch.display())?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Pass the directory's definition file through as comments, dropping
    /// comment lines and the `Depends:` declaration. Absence of the file is
    /// the expected case for most directories.
    fn emit_definition<W: Write>(&self, directory: &Path, out: &mut W) -> Result<()> {
        let definition = directory.join(DEFINITION_FILENAME);
        let content = match fs::read_to_string(&definition) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{}: no definition file", directory.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for line in content.lines() {
            if line.starts_with('#') || line.starts_with("Depends:") {
                continue;
            }
            writeln!(out, "# {}", line)?;
        }
        Ok(())
    }
}
