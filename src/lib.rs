//! Favor - jump to your favorite directories, ranked by how often you pick them

pub mod config;
pub mod error;
pub mod logging;
pub mod picker;
pub mod rank;
pub mod scan;
pub mod tree;
pub mod votes;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, TreeConfig};
pub use error::{Error, Result};
pub use picker::Picker;
pub use rank::rank;
pub use scan::{Candidate, Scanner, Scheduler};
pub use tree::{Tree, prepare_trees};
pub use votes::VoteTable;
