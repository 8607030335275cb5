//! Configured root trees and their vote snapshots

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::{TreeConfig, expand_home};
use crate::votes::{TreeVotes, VoteTable};

/// Relative directory of a tree's root.
pub const ROOT_DIR: &str = ".";

/// A configured root directory plus its scan parameters.
///
/// `votes` is a snapshot of the vote table taken before scanning. Scanner
/// threads read it through shared references without locking; votes are only
/// written to the [`VoteTable`] after scanning, ranking and selection are done,
/// so no write can race with these reads.
#[derive(Debug, Clone)]
pub struct Tree {
    pub name: String,
    pub root: PathBuf,
    pub min_depth: usize,
    pub max_depth: usize,
    pub include_root: bool,
    ignore: HashSet<String>,
    votes: TreeVotes,
}

impl Tree {
    /// Build a tree from its configuration, seeding votes from `table`.
    ///
    /// Trees without votes get an empty entry in `table` so they are written
    /// out on the next save.
    pub fn from_config(config: &TreeConfig, table: &mut VoteTable) -> Self {
        Self {
            name: config.name.clone(),
            root: expand_home(&config.dir),
            min_depth: config.min_depth,
            max_depth: config.max_depth,
            include_root: config.include_root,
            ignore: config.ignore.iter().cloned().collect(),
            votes: table.tree_entry(&config.name).clone(),
        }
    }

    pub fn votes_for(&self, dir: &str) -> u64 {
        self.votes.get(dir).copied().unwrap_or(0)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }

    /// Absolute path of a directory relative to this tree's root.
    pub fn resolve(&self, dir: &str) -> PathBuf {
        if dir == ROOT_DIR {
            self.root.clone()
        } else {
            self.root.join(dir)
        }
    }
}

/// Build every configured tree.
pub fn prepare_trees(configs: &[TreeConfig], table: &mut VoteTable) -> Vec<Tree> {
    configs
        .iter()
        .map(|config| Tree::from_config(config, table))
        .collect()
}
