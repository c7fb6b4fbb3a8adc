use async_trait::async_trait;

use crate::domain::NumberCategory;

/// Why a fetch from the number provider failed.
///
/// Every variant surfaces to clients as the same generic failure; the
/// classification only feeds the logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("upstream timed out")]
    Timeout,

    #[error("could not connect to upstream: {0}")]
    Connect(String),

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("malformed upstream body: {0}")]
    Malformed(String),

    #[error("upstream request failed: {0}")]
    Request(String),
}

/// Port for fetching fresh numbers of a given category
#[async_trait]
pub trait NumberSource: Send + Sync {
    /// Fetch the numbers the provider currently offers for `category`
    async fn fetch(&self, category: NumberCategory) -> Result<Vec<i64>, FetchError>;
}
