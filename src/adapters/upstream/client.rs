use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::payload::UpstreamPayload;
use crate::domain::NumberCategory;
use crate::ports::{FetchError, NumberSource};

/// Number provider reached over HTTP with reqwest
pub struct HttpNumberSource {
    client: Client,
    base_url: String,
}

impl HttpNumberSource {
    /// `base_url` gets the category code appended, e.g.
    /// `http://localhost:9876/numbers/` + `p`.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, category: NumberCategory) -> String {
        format!("{}{}", self.base_url, category.code())
    }

    fn classify(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl NumberSource for HttpNumberSource {
    async fn fetch(&self, category: NumberCategory) -> Result<Vec<i64>, FetchError> {
        let url = self.url_for(category);
        debug!(%url, "Fetching numbers from upstream");

        let response = self.client.get(&url).send().await.map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(Self::classify)?;
        let payload: UpstreamPayload =
            serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(payload.into_numbers())
    }
}
