//! Executor trait for abstracting how independent work items are run.
//!
//! Per-field evaluation (resolve, validate, format) has no shared state, so
//! the renderer hands a page's fields to an executor and replays the results
//! afterwards. Executors must return results in input order.

use std::fmt::Debug;

/// Runs a batch of independent work items, possibly in parallel.
///
/// # Implementations
///
/// - `SyncExecutor`: sequential, no threading (always available)
/// - `RayonExecutor`: work-stealing thread pool (`taxform-executor`, feature `rayon`)
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. The result vector is in the same order as
    /// `items`, however the work was scheduled.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// 1 for sequential executors, otherwise the worker count.
    fn parallelism(&self) -> usize;

    /// A human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Processes items one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
