//! Deterministic ordering of scan results

use std::cmp::Ordering;

use crate::scan::Candidate;

/// Most votes first, then tree name, then directory.
pub fn compare(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.votes
        .cmp(&a.votes)
        .then_with(|| a.tree.name.cmp(&b.tree.name))
        .then_with(|| a.dir.cmp(&b.dir))
}

/// Sort candidates for presentation.
///
/// The sort is stable: candidates equal on every key keep the (scan-dependent)
/// order they came in.
pub fn rank(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(compare);
    candidates
}
