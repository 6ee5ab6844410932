//! Page Searcher: full-text search through `list=search`.

use serde_json::Value;
use wikipedia_api::{Client, Error, SearchQuery};

use crate::retry::{with_retry, RetryConfig};

/// Outcome of a search. Both variants carry upstream JSON unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Success(Value),
    Error(Value),
}

/// Optional paging for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPaging {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Clone)]
pub struct PageSearcher {
    client: Client,
    retry: RetryConfig,
}

impl PageSearcher {
    pub fn new(client: Client, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    pub async fn search(&self, term: &str, paging: SearchPaging) -> SearchResult {
        let mut query = SearchQuery::new(term);
        if let Some(limit) = paging.limit {
            query = query.with_limit(limit);
        }
        if let Some(offset) = paging.offset {
            query = query.with_offset(offset);
        }

        match with_retry(&self.retry, "search", || self.client.search(&query)).await {
            Ok(payload) => SearchResult::Success(payload),
            Err(e) => {
                tracing::error!("Search for {:?} failed: {}", term, e);
                SearchResult::Error(error_payload(e))
            }
        }
    }
}

/// The payload reported for a failed search: the raw `error` object, the raw
/// body of a failed HTTP exchange (as JSON when it parses), or a synthesized
/// `{code, info}` for failures that produced no body.
fn error_payload(err: Error) -> Value {
    match err {
        Error::Api { raw, .. } => raw,
        Error::HttpStatus { body, .. } => {
            serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body))
        }
        Error::RequestFailed(msg) => serde_json::json!({ "code": "request_failed", "info": msg }),
        Error::InvalidResponse(msg) => {
            serde_json::json!({ "code": "invalid_response", "info": msg })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_body_is_json_when_possible() {
        let payload = error_payload(Error::HttpStatus {
            status: 502,
            body: r#"{"error":"bad gateway"}"#.to_string(),
        });
        assert_eq!(payload, serde_json::json!({"error": "bad gateway"}));

        let payload = error_payload(Error::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        });
        assert_eq!(payload, Value::String("Bad Gateway".to_string()));
    }

    #[test]
    fn api_error_is_passed_through() {
        let raw = serde_json::json!({"code": "nosrsearch", "info": "x", "*": "y"});
        let payload = error_payload(Error::Api {
            error: wikipedia_api::types::ApiErrorBody::new("nosrsearch", "x", "y"),
            raw: raw.clone(),
        });
        assert_eq!(payload, raw);
    }
}
