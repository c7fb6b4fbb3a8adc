use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{NumberCategory, WindowSnapshot};
use crate::ports::{FetchError, NumberSource, WindowStore};

/// Fetches numbers per category and folds them into the shared window
pub struct AveragingService {
    number_source: Arc<dyn NumberSource>,
    window_store: Arc<dyn WindowStore>,
}

impl AveragingService {
    pub fn new(number_source: Arc<dyn NumberSource>, window_store: Arc<dyn WindowStore>) -> Self {
        Self {
            number_source,
            window_store,
        }
    }

    /// Fetch fresh numbers for `category`, admit them and return the
    /// resulting window. The window is left untouched when the fetch fails.
    pub async fn refresh(&self, category: NumberCategory) -> Result<WindowSnapshot, FetchError> {
        let numbers = match self.number_source.fetch(category).await {
            Ok(numbers) => numbers,
            Err(e) => {
                error!(%category, error = %e, "Error fetching number");
                return Err(e);
            }
        };

        let snapshot = self.window_store.admit(&numbers);
        info!(
            %category,
            fetched = ?numbers,
            window = snapshot.current.len(),
            avg = %snapshot.formatted_average(),
            "Window refreshed"
        );

        Ok(snapshot)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedSource;
    use super::*;
    use crate::adapters::MemoryWindowStore;

    fn service(source: Arc<ScriptedSource>, store: Arc<MemoryWindowStore>) -> AveragingService {
        AveragingService::new(source, store)
    }

    #[tokio::test]
    async fn test_refresh_admits_fetched_numbers() {
        let source = Arc::new(ScriptedSource::new([Ok(vec![7]), Ok(vec![7]), Ok(vec![3, 4])]));
        let store = Arc::new(MemoryWindowStore::with_default_size());
        let service = service(source.clone(), store.clone());

        let snapshot = service.refresh(NumberCategory::Prime).await.unwrap();
        assert_eq!(snapshot.current, vec![7]);
        assert_eq!(snapshot.formatted_average(), "7.00");

        let snapshot = service.refresh(NumberCategory::Prime).await.unwrap();
        assert_eq!(snapshot.current, vec![7]);
        assert_eq!(snapshot.formatted_average(), "7.00");

        let snapshot = service.refresh(NumberCategory::Even).await.unwrap();
        assert_eq!(snapshot.previous, vec![7, 3]);
        assert_eq!(snapshot.current, vec![7, 3, 4]);
        assert_eq!(snapshot.formatted_average(), "4.67");

        assert_eq!(
            source.calls(),
            vec![NumberCategory::Prime, NumberCategory::Prime, NumberCategory::Even]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_window_untouched() {
        let source = Arc::new(ScriptedSource::new([Ok(vec![1, 2]), Err(FetchError::Timeout)]));
        let store = Arc::new(MemoryWindowStore::with_default_size());
        let service = service(source, store.clone());

        service.refresh(NumberCategory::Random).await.unwrap();
        let before = store.snapshot();

        let err = service.refresh(NumberCategory::Random).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout);
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_fetch_keeps_window() {
        let source = Arc::new(ScriptedSource::new([Ok(vec![5]), Ok(vec![])]));
        let store = Arc::new(MemoryWindowStore::with_default_size());
        let service = service(source, store);

        service.refresh(NumberCategory::Fibonacci).await.unwrap();
        let snapshot = service.refresh(NumberCategory::Fibonacci).await.unwrap();
        assert_eq!(snapshot.current, vec![5]);
    }
}
