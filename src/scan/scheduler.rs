//! Bounded scheduler for recursive scan work
//!
//! Work is spawned onto a rayon scope while fewer than `max` spawned tasks are
//! running. Once the budget is used up, work runs inline on the caller's own
//! thread instead of being queued, so a saturated branch continues depth-first
//! and memory stays bounded by construction.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use rayon::{Scope, ThreadPool, ThreadPoolBuilder};

pub struct Scheduler {
    max: usize,
    running: AtomicUsize,
    peak: AtomicUsize,
    pool: Option<ThreadPool>,
}

/// A reserved slot, released on drop so a panicking task still frees it.
struct Slot<'a>(&'a Scheduler);

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        self.0.running.fetch_sub(1, Ordering::AcqRel);
    }
}

impl Scheduler {
    /// Create a scheduler that runs at most `max` spawned tasks at once.
    pub fn new(max: usize) -> Self {
        let pool = match ThreadPoolBuilder::new()
            .num_threads(pool_size(max))
            .thread_name(|i| format!("favor-scan-{}", i))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::warn!(error = %e, "unable to build scan thread pool, using global pool");
                None
            }
        };

        Self {
            max,
            running: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            pool,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of spawned tasks currently holding a slot.
    pub fn running(&self) -> usize {
        self.running.load(Ordering::Acquire)
    }

    /// Highest number of slots held at once since creation.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Acquire)
    }

    /// Run `op` and wait until every task it scheduled has finished,
    /// including tasks scheduled by those tasks.
    pub fn run<'scope, OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce(&Scope<'scope>) -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.scope(op),
            None => rayon::scope(op),
        }
    }

    /// Spawn `work` if a slot is free, otherwise run it on the current thread.
    pub fn schedule<'scope, F>(&'scope self, scope: &Scope<'scope>, work: F)
    where
        F: FnOnce(&Scope<'scope>) + Send + 'scope,
    {
        match self.try_reserve() {
            Some(slot) => scope.spawn(move |scope| {
                let _slot = slot;
                work(scope);
            }),
            None => work(scope),
        }
    }

    /// Check the budget and take a slot in one atomic step.
    fn try_reserve(&self) -> Option<Slot<'_>> {
        let previous = self
            .running
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |running| {
                (running < self.max).then_some(running + 1)
            })
            .ok()?;

        self.peak.fetch_max(previous + 1, Ordering::AcqRel);
        Some(Slot(self))
    }
}

/// Pool threads for a budget of `max`: one more than the budget, since the
/// thread inside `run` does its own inline work and must not starve spawned
/// tasks. Capped at the available parallelism; spawned tasks beyond that wait
/// in the pool queue while holding their slot, so the budget still holds.
fn pool_size(max: usize) -> usize {
    let cpus = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    max.min(cpus).saturating_add(1)
}
