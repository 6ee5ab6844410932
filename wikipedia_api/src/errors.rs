//! Error types for the API client.

use crate::types::ApiErrorBody;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, timeout, bad URL).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status. `body` is the raw response body.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with an `error` envelope.
    ///
    /// `raw` keeps the envelope exactly as received so callers can pass it
    /// through without normalizing it.
    #[error("API error {}: {}", .error.code, .error.info)]
    Api {
        error: ApiErrorBody,
        raw: serde_json::Value,
    },
    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// True when the API reported that the requested page does not exist.
    pub fn is_missing_title(&self) -> bool {
        matches!(self, Error::Api { error, .. } if error.is_missing_title())
    }
}
