//! Rayon-based parallel executor.

use rayon::prelude::*;
use taxform_traits::Executor;

/// Spreads work over rayon's global work-stealing pool.
///
/// Indexed parallel iterators collect in input order, so results line up
/// with the items that produced them. To change the worker count, configure
/// `rayon::ThreadPoolBuilder::build_global` before the first render.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_rayon_executor_keeps_input_order() {
        let executor = RayonExecutor::new();
        let items: Vec<usize> = (0..500).collect();
        let results = executor.execute_all(items, |x| x * 3);
        let expected: Vec<usize> = (0..500).map(|x| x * 3).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_rayon_executor_visits_every_item() {
        let executor = RayonExecutor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let _ = executor.execute_all((0..100).collect::<Vec<u32>>(), {
            let counter = counter.clone();
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(counter.load(Ordering::SeqCst), 100);
        assert!(executor.parallelism() > 0);
    }
}
