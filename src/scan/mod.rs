//! Concurrent directory scanning
//!
//! This module finds candidate directories across every configured tree:
//!
//! - `Scheduler`: runs scan tasks on a bounded number of workers, falling back
//!   to inline (depth-first) recursion once the budget is exhausted
//! - `Scanner`: decides which directories become candidates and which ones are
//!   descended into

mod candidate;
mod scanner;
mod scheduler;
mod utils;

pub use candidate::Candidate;
pub use scanner::Scanner;
pub use scheduler::Scheduler;
pub use utils::{child_dir, depth, read_child_dirs};
