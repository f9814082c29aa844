//! HTTP client for the filings API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{Dataset, DatasetSummary, SummaryData, TickerDetail},
    Error,
};

/// HTTP client for the filings backend.
///
/// Every call hits the network: no retries, no caching. Each request builds a
/// fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:8000/api/v1`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the local development backend.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://localhost:8000/api/v1".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for the CLI's
    /// `--api-url` override and for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Builds `/{dataset}/{ticker}`, percent-encoding the ticker so reserved
    /// characters survive as a single path segment.
    fn detail_url(&self, dataset: Dataset, ticker: &str) -> Result<Url, Error> {
        let mut url = self.get_url(&format!("/{}", dataset))?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry path segments: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .push(ticker);
        Ok(url)
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one dataset's summary listing.
    pub async fn get_dataset_summary(&self, dataset: Dataset) -> Result<DatasetSummary, Error> {
        self.get::<DatasetSummary>(self.get_url(&format!("/{}", dataset))?)
            .await
    }

    /// Fetches both dataset summaries concurrently. Fails as a whole if
    /// either request fails; partial data is never returned.
    pub async fn get_summary(&self) -> Result<SummaryData, Error> {
        let (oddlots, spinoffs) = futures::try_join!(
            self.get_dataset_summary(Dataset::Oddlots),
            self.get_dataset_summary(Dataset::Spinoffs),
        )?;
        Ok(SummaryData { oddlots, spinoffs })
    }

    /// Fetches the detail record for one ticker in one dataset.
    pub async fn get_ticker_details(
        &self,
        dataset: Dataset,
        ticker: &str,
    ) -> Result<TickerDetail, Error> {
        self.get::<TickerDetail>(self.detail_url(dataset, ticker)?)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
