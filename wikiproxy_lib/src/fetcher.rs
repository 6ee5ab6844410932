//! Content Fetcher: renders a page through `action=parse`.

use wikipedia_api::types::ApiErrorBody;
use wikipedia_api::{Client, ParseQuery};

use crate::error::ProxyError;
use crate::retry::{with_retry_mapped, RetryConfig};

/// Outcome of fetching a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The rendered HTML fragment (`parse.text`).
    Success(String),
    /// The page does not exist upstream.
    MissingTitle(ApiErrorBody),
    /// Any other failure, carrying the upstream payload.
    OtherError(ApiErrorBody),
}

impl From<Result<String, ProxyError>> for FetchResult {
    fn from(result: Result<String, ProxyError>) -> Self {
        match result {
            Ok(html) => FetchResult::Success(html),
            Err(ProxyError::MissingTitle(body)) => FetchResult::MissingTitle(body),
            Err(other) => FetchResult::OtherError(other.body()),
        }
    }
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    /// Converts back into a `Result`, with `MissingTitle` and `OtherError`
    /// mapped to the 404 and 500 error classes respectively.
    pub fn into_result(self) -> Result<String, ProxyError> {
        match self {
            FetchResult::Success(html) => Ok(html),
            FetchResult::MissingTitle(body) => Err(ProxyError::MissingTitle(body)),
            FetchResult::OtherError(body) => Err(ProxyError::Upstream(body)),
        }
    }
}

/// Fetches rendered article HTML from the parse API.
#[derive(Clone)]
pub struct ContentFetcher {
    client: Client,
    retry: RetryConfig,
}

impl ContentFetcher {
    pub fn new(client: Client, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Fetches `page_title`, never failing: every outcome is a [`FetchResult`].
    pub async fn fetch(&self, page_title: &str) -> FetchResult {
        let result = self.try_fetch(page_title).await;
        match &result {
            Ok(html) => tracing::debug!("Fetched {} ({} bytes)", page_title, html.len()),
            Err(ProxyError::MissingTitle(e)) => {
                tracing::warn!("Page not found: {} ({}: {})", page_title, e.code, e.info)
            }
            Err(e) => tracing::error!("Failed to fetch {}: {}", page_title, e),
        }
        FetchResult::from(result)
    }

    /// Same as [`fetch`](Self::fetch) but keeps the transport/upstream
    /// distinction of [`ProxyError`].
    pub async fn try_fetch(&self, page_title: &str) -> Result<String, ProxyError> {
        let query = ParseQuery::new(page_title);
        let page = with_retry_mapped(&self.retry, "parse", || self.client.parse(&query)).await?;
        Ok(page.text.into_html())
    }
}
