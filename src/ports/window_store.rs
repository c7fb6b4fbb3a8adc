use crate::domain::WindowSnapshot;

/// Port for the shared sliding window.
///
/// Implementations must make `admit` atomic with respect to other callers;
/// the returned snapshot reflects the window right after this admit.
#[allow(dead_code)]
pub trait WindowStore: Send + Sync {
    /// Admit fetched values in order and snapshot the result
    fn admit(&self, values: &[i64]) -> WindowSnapshot;

    /// Snapshot without mutating
    fn snapshot(&self) -> WindowSnapshot;

    /// Number of values currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
