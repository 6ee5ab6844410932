//! HTTP client for the MediaWiki action API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ParseQuery, Query, SearchQuery},
    types::{ApiErrorBody, ParseResponse, ParsedPage},
    user_agent::get_user_agent,
    Error,
};

/// Endpoint of the Japanese Wikipedia API.
pub const DEFAULT_API_URL: &str = "https://ja.wikipedia.org/w/api.php";

/// Default timeout for a single API call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings used to build a [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Full URL of the `api.php` endpoint.
    pub api_url: String,
    /// Per-request timeout, covering connect, send and body read.
    pub timeout: Duration,
    /// Overrides the default descriptive user agent.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

/// HTTP client for the MediaWiki action API.
///
/// Holds a single pooled `reqwest::Client`; cloning is cheap and clones
/// share the pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_url: Url,
}

impl Client {
    /// Creates a client with a custom endpoint. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig {
            api_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let api_url = Url::parse(&config.api_url).map_err(|e| {
            tracing::error!("Invalid API URL {}: {}", config.api_url, e);
            Error::RequestFailed(format!("invalid API URL: {}", e))
        })?;
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent(config.user_agent.as_deref()))
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self { http, api_url })
    }

    /// Sends the query and returns the decoded JSON body.
    ///
    /// Non-success statuses become [`Error::HttpStatus`] carrying the raw
    /// body, and a JSON `error` envelope becomes [`Error::Api`].
    async fn get_json(&self, query: &impl Query) -> Result<serde_json::Value, Error> {
        let url = query.add_to_url(&self.api_url);
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let value = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::InvalidResponse(e.to_string())
        })?;

        if let Some(raw) = value.get("error").filter(|e| e.is_object()).cloned() {
            let error = serde_json::from_value::<ApiErrorBody>(raw.clone()).unwrap_or_else(|e| {
                tracing::warn!("Malformed error envelope: {}", e);
                ApiErrorBody::default()
            });
            return Err(Error::Api { error, raw });
        }

        Ok(value)
    }

    async fn get<T: DeserializeOwned>(&self, query: &impl Query) -> Result<T, Error> {
        let value = self.get_json(query).await?;
        serde_json::from_value::<T>(value).map_err(|e| {
            tracing::error!("Unexpected response shape: {}", e);
            Error::InvalidResponse(e.to_string())
        })
    }

    /// Renders a page via `action=parse`.
    pub async fn parse(&self, query: &ParseQuery) -> Result<ParsedPage, Error> {
        self.get::<ParseResponse>(query).await.map(|r| r.parse)
    }

    /// Runs `action=query&list=search` and returns the response untouched.
    pub async fn search(&self, query: &SearchQuery) -> Result<serde_json::Value, Error> {
        self.get_json(query).await
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
