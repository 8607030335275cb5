//! Configuration file loading

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration, read from a YAML file.
///
/// ```yaml
/// picker: [fzf, --prompt, "cd> "]
/// threads: 8
/// votes_path: ~/.local/share/favor/votes.yaml
/// ignore_global: [.git, node_modules]
/// trees:
///   - name: work
///     dir: ~/work
///     min_depth: 1
///     max_depth: 2
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Selector command; the first element is the executable.
    pub picker: Vec<String>,
    /// Maximum number of concurrently running scan tasks.
    pub threads: usize,
    pub votes_path: String,
    #[serde(default)]
    pub ignore_global: Vec<String>,
    pub trees: Vec<TreeConfig>,
}

/// One configured root tree.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    pub name: String,
    /// Root directory, may start with `~/`.
    pub dir: String,
    #[serde(default)]
    pub min_depth: usize,
    #[serde(default)]
    pub max_depth: usize,
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub include_root: bool,
}

impl Config {
    /// Read, parse and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            trees = config.trees.len(),
            threads = config.threads,
            "loaded configuration"
        );

        Ok(config)
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.picker.first().is_none_or(|exe| exe.is_empty()) {
            return Err(Error::InvalidConfig("picker command is empty".to_string()));
        }

        if self.trees.is_empty() {
            return Err(Error::InvalidConfig("no trees configured".to_string()));
        }

        let mut names = HashSet::new();
        for tree in &self.trees {
            if tree.name.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "tree with dir {:?} has no name",
                    tree.dir
                )));
            }
            if tree.dir.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "tree {:?} has no dir",
                    tree.name
                )));
            }
            if !names.insert(tree.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate tree name {:?}",
                    tree.name
                )));
            }
        }

        Ok(())
    }
}

/// Default configuration location: `~/.config/favor/favor.conf`.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("favor")
        .join("favor.conf")
}

/// Expand a leading `~/` to the current user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
