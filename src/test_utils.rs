//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::TreeConfig;
use crate::tree::Tree;
use crate::votes::VoteTable;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory, including missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create an empty file, including missing parent directories.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, "").expect("Failed to write file");
        full_path
    }

    /// Create a symbolic link at `link` pointing to `target` (relative to the tree).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let full_link = self.dir.path().join(link);
        std::os::unix::fs::symlink(self.dir.path().join(target), &full_link)
            .expect("Failed to create symlink");
        full_link
    }

    /// Create a chain of nested directories `d/d/d/...`, `depth` levels deep.
    pub fn add_chain(&self, name: &str, depth: usize) -> PathBuf {
        let path = vec![name; depth].join("/");
        self.add_dir(&path)
    }

    /// Create `width` subdirectories in every directory down to `depth` levels.
    pub fn add_fanout(&self, width: usize, depth: usize) {
        fn fill(base: &Path, width: usize, depth: usize) {
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let child = base.join(format!("d{}", i));
                fs::create_dir_all(&child).expect("Failed to create dir");
                fill(&child, width, depth - 1);
            }
        }
        fill(self.dir.path(), width, depth);
    }

    /// Tree configuration rooted at this directory with default bounds.
    pub fn config(&self, name: &str) -> TreeConfig {
        TreeConfig {
            name: name.to_string(),
            dir: self.dir.path().to_string_lossy().to_string(),
            min_depth: 0,
            max_depth: 0,
            ignore: Vec::new(),
            include_root: false,
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a tree from `config` with an empty vote table.
pub fn build_tree(config: &TreeConfig) -> Tree {
    Tree::from_config(config, &mut VoteTable::new())
}
