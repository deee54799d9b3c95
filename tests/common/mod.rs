//! Shared test utilities for the E2E tests.
//!
//! Provides a workspace fixture laid out the way the tool expects by
//! default: catalog documents under `docs/patches/` and source directories
//! under `patches/`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = Workspace::new();
//!     fixture.catalog_doc("series.yml", "base: {}\n");
//!     fixture.cmd().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::Command;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::Workspace;
}

/// A temp directory laid out as a mkpatchlist workspace.
pub struct Workspace {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("docs/patches").create_dir_all().unwrap();
        temp.child("patches").create_dir_all().unwrap();
        Self { temp }
    }

    /// Write a catalog document under `docs/patches/`.
    pub fn catalog_doc(&self, name: &str, content: &str) {
        self.temp
            .child(format!("docs/patches/{}", name))
            .write_str(content)
            .unwrap();
    }

    /// Create an empty source directory under `patches/`.
    pub fn source_dir(&self, name: &str) {
        self.temp
            .child(format!("patches/{}", name))
            .create_dir_all()
            .unwrap();
    }

    /// Write a patch file into a source directory.
    pub fn patch(&self, dir: &str, file: &str) {
        self.temp
            .child(format!("patches/{}/{}", dir, file))
            .write_str("--- a\n+++ b\n")
            .unwrap();
    }

    /// Write a definition file into a source directory.
    pub fn definition(&self, dir: &str, content: &str) {
        self.temp
            .child(format!("patches/{}/definition", dir))
            .write_str(content)
            .unwrap();
    }

    /// A Command for the mkpatchlist binary, rooted in this workspace.
    ///
    /// Clears `RUST_LOG` so the --log-level default applies regardless of
    /// the invoking environment.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("mkpatchlist").unwrap();
        cmd.current_dir(self.temp.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
