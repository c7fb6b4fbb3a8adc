use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::domain::{NumberWindow, WindowSnapshot};
use crate::ports::WindowStore;

/// In-memory window guarded by a mutex.
///
/// The lock covers only the admit and the snapshot read that follows it,
/// never an upstream fetch.
pub struct MemoryWindowStore {
    window: Mutex<NumberWindow>,
}

impl MemoryWindowStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            window: Mutex::new(NumberWindow::new(capacity)),
        }
    }

    pub fn with_default_size() -> Self {
        Self {
            window: Mutex::new(NumberWindow::with_default_size()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NumberWindow> {
        // No multi-step invariant can be left half-applied, so a poisoned
        // window is still consistent.
        self.window.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl WindowStore for MemoryWindowStore {
    fn admit(&self, values: &[i64]) -> WindowSnapshot {
        let mut window = self.lock();
        let inserted = window.admit_all(values);
        debug!(
            offered = values.len(),
            inserted,
            size = window.len(),
            "Admitted numbers into window"
        );
        window.snapshot()
    }

    fn snapshot(&self) -> WindowSnapshot {
        self.lock().snapshot()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_admit_returns_post_admit_snapshot() {
        let store = MemoryWindowStore::with_default_size();
        assert!(store.is_empty());

        let snapshot = store.admit(&[7]);
        assert_eq!(snapshot.current, vec![7]);
        assert!(snapshot.previous.is_empty());
        assert_eq!(snapshot.formatted_average(), "7.00");

        let snapshot = store.admit(&[9]);
        assert_eq!(snapshot.previous, vec![7]);
        assert_eq!(snapshot.current, vec![7, 9]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let store = MemoryWindowStore::new(3);
        store.admit(&[1, 2, 3]);
        assert_eq!(store.snapshot(), store.snapshot());
        assert_eq!(store.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_admits_keep_invariants() {
        let store = Arc::new(MemoryWindowStore::new(10));

        let tasks = (0..200i64).map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.admit(&[i % 37]) })
        });

        for result in futures::future::join_all(tasks).await {
            let snapshot = result.expect("admit task panicked");
            assert!(snapshot.current.len() <= 10);
            let unique: HashSet<_> = snapshot.current.iter().collect();
            assert_eq!(unique.len(), snapshot.current.len());
        }

        assert_eq!(store.len(), 10);
    }
}
