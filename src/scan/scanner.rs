//! Scanner - finds candidate directories in every tree

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rayon::Scope;

use crate::tree::{ROOT_DIR, Tree};

use super::candidate::Candidate;
use super::scheduler::Scheduler;
use super::utils::{child_dir, depth, read_child_dirs};

/// Walks trees through a [`Scheduler`] and collects candidates.
///
/// Candidates are appended under a single lock; their order depends on task
/// completion order and is only made deterministic by ranking.
pub struct Scanner<'a> {
    scheduler: &'a Scheduler,
    ignore: HashSet<String>,
    candidates: Mutex<Vec<Candidate<'a>>>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner skipping `ignore_global` names in every tree.
    pub fn new(scheduler: &'a Scheduler, ignore_global: &[String]) -> Self {
        Self {
            scheduler,
            ignore: ignore_global.iter().cloned().collect(),
            candidates: Mutex::new(Vec::new()),
        }
    }

    /// Scan every tree from its root and return all candidates once the
    /// scheduler reports that no work is left.
    pub fn scan_all(self, trees: &'a [Tree]) -> Vec<Candidate<'a>> {
        let scanner = &self;
        self.scheduler.run(|scope| {
            for tree in trees {
                scanner.schedule(scope, tree, ROOT_DIR.to_string());
            }
        });

        let candidates = self
            .candidates
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        tracing::debug!(
            candidates = candidates.len(),
            peak_workers = self.scheduler.peak(),
            max_workers = self.scheduler.max(),
            "scan finished"
        );

        candidates
    }

    fn schedule<'s>(&'s self, scope: &Scope<'s>, tree: &'a Tree, dir: String)
    where
        'a: 's,
    {
        self.scheduler
            .schedule(scope, move |scope| self.scan(scope, tree, &dir));
    }

    /// Record `dir` if it qualifies, then schedule each eligible child.
    fn scan<'s>(&'s self, scope: &Scope<'s>, tree: &'a Tree, dir: &str)
    where
        'a: 's,
    {
        let depth = depth(dir);
        let is_root = dir == ROOT_DIR;

        if depth >= tree.min_depth && (!is_root || tree.include_root) {
            self.record(tree, dir);
        }

        // Only ever show the root itself
        if tree.max_depth == 0 && tree.include_root {
            return;
        }

        // The root is always expanded, max_depth counts from its children
        if depth >= tree.max_depth && !is_root {
            return;
        }

        let path = tree.resolve(dir);
        let names = match read_child_dirs(&path) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unable to read directory");
                return;
            }
        };

        for name in names {
            if self.ignore.contains(&name) || tree.is_ignored(&name) {
                continue;
            }
            self.schedule(scope, tree, child_dir(dir, &name));
        }
    }

    fn record(&self, tree: &'a Tree, dir: &str) {
        let candidate = Candidate::new(tree, dir.to_string());
        self.candidates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(candidate);
    }
}
