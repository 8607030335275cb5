//! Directories eligible to be offered to the user

use std::fmt;
use std::path::PathBuf;

use crate::tree::Tree;

/// A directory found while scanning, tagged with its tree and the number of
/// votes it had when it was found.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub tree: &'a Tree,
    /// Path relative to the tree root, `/`-separated, `.` for the root.
    pub dir: String,
    pub votes: u64,
}

impl<'a> Candidate<'a> {
    pub fn new(tree: &'a Tree, dir: String) -> Self {
        let votes = tree.votes_for(&dir);
        Self { tree, dir, votes }
    }

    /// Absolute path of this directory.
    pub fn path(&self) -> PathBuf {
        self.tree.resolve(&self.dir)
    }

    pub fn matches(&self, name: &str, dir: &str) -> bool {
        self.tree.name == name && self.dir == dir
    }
}

/// Formats as `<tree name>: <dir>`, the line handed to the picker.
impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tree.name, self.dir)
    }
}
