//! Persisted vote counts

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Vote counts of one tree, keyed by relative directory.
pub type TreeVotes = BTreeMap<String, u64>;

/// Vote counts of every tree, keyed by tree name.
///
/// Stored as YAML:
///
/// ```yaml
/// work:
///   a: 3
///   b/c: 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteTable(BTreeMap<String, TreeVotes>);

impl VoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from `path`. A missing file yields an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "votes file not found, starting empty");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(Error::VotesLoad {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        // An empty document parses as null
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }

        serde_yaml_ng::from_str(&contents).map_err(|e| Error::VotesLoad {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Rewrite the whole table to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let save_error = |e: Box<dyn std::error::Error + Send + Sync>| Error::VotesSave {
            path: path.to_path_buf(),
            source: e,
        };

        let contents = serde_yaml_ng::to_string(self).map_err(|e| save_error(Box::new(e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| save_error(Box::new(e)))?;
        }

        fs::write(path, contents).map_err(|e| save_error(Box::new(e)))?;

        tracing::debug!(path = %path.display(), "saved votes");
        Ok(())
    }

    /// Votes of `tree`, inserting an empty entry if the tree has none yet.
    pub fn tree_entry(&mut self, tree: &str) -> &TreeVotes {
        self.0.entry(tree.to_string()).or_default()
    }

    pub fn tree_votes(&self, tree: &str) -> Option<&TreeVotes> {
        self.0.get(tree)
    }

    pub fn get(&self, tree: &str, dir: &str) -> u64 {
        self.tree_votes(tree)
            .and_then(|votes| votes.get(dir))
            .copied()
            .unwrap_or(0)
    }

    /// Add one vote for `dir` in `tree`.
    pub fn increment(&mut self, tree: &str, dir: &str) -> u64 {
        let count = self
            .0
            .entry(tree.to_string())
            .or_default()
            .entry(dir.to_string())
            .or_insert(0);
        *count += 1;
        *count
    }
}
