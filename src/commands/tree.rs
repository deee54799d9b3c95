//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the merged
//! series dependency tree in a hierarchical format.
//!
//! ## Functionality
//!
//! - **Dependency Tree Visualization**: each top-level series is printed
//!   with its wanted-by sub-tree nested beneath it
//! - **Depth Control**: supports a `--depth` flag to limit tree depth
//!
//! This command is a safe, read-only diagnostic; it never touches the
//! patches root.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::path::PathBuf;

use mkpatchlist::catalog::{self, SeriesTree};
use mkpatchlist::defaults::DEFAULT_CATALOG_DIR;

/// Display the series dependency tree
#[derive(Args, Debug)]
pub struct TreeArgs {
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

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the top-level series.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
///
/// Loads and merges the catalog, then prints each top-level series as the
/// root of its own sub-tree.
pub fn execute(args: TreeArgs) -> Result<()> {
    println!(
        "Series dependency tree from: {}",
        args.catalog_dir.display()
    );

    let tree = catalog::load(&args.catalog_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load series catalog from {}: {}",
            args.catalog_dir.display(),
            e
        )
    })?;

    if tree.is_empty() {
        println!("(no series defined)");
        return Ok(());
    }

    let max_depth = args.depth.unwrap_or(usize::MAX);
    for (series, wanted_by) in tree.iter() {
        let root = build_tree_node(series, wanted_by, max_depth, 0);
        print_tree(&root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    }

    Ok(())
}

/// Build a display node for one series and its wanted-by sub-tree
fn build_tree_node(
    series: &str,
    wanted_by: &SeriesTree,
    max_depth: usize,
    current_depth: usize,
) -> TreeNode {
    let label = series.to_string();

    if current_depth >= max_depth || wanted_by.is_empty() {
        TreeNode {
            label,
            children: vec![],
        }
    } else {
        let children = wanted_by
            .iter()
            .map(|(child, grandchildren)| {
                build_tree_node(child, grandchildren, max_depth, current_depth + 1)
            })
            .collect();
        TreeNode { label, children }
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
