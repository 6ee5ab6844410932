//! Error types for the library layer.

use std::fmt;

use wikipedia_api::types::ApiErrorBody;

/// Errors produced while serving a request, grouped by how they should be
/// reported to the caller.
///
/// Every variant that originates upstream carries an [`ApiErrorBody`] so the
/// payload can be surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// The upstream call itself failed: network error, timeout, or a
    /// non-success HTTP status.
    Transport(ApiErrorBody),
    /// The requested page does not exist.
    MissingTitle(ApiErrorBody),
    /// The API answered with a structured error other than `missingtitle`,
    /// or with a body that could not be decoded.
    Upstream(ApiErrorBody),
    /// The incoming request was malformed.
    Validation(String),
    /// HTML to Markdown conversion failed.
    Conversion(String),
}

impl ProxyError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingTitle(_) => 404,
            Self::Validation(_) => 400,
            Self::Transport(_) | Self::Upstream(_) | Self::Conversion(_) => 500,
        }
    }

    /// The `{code, info, detail}` payload reported to the caller.
    pub fn body(&self) -> ApiErrorBody {
        match self {
            Self::Transport(body) | Self::MissingTitle(body) | Self::Upstream(body) => body.clone(),
            Self::Validation(msg) => ApiErrorBody::new("invalid_request", msg.clone(), ""),
            Self::Conversion(msg) => ApiErrorBody::new("conversion_failed", msg.clone(), ""),
        }
    }
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {} ({})", e.info, e.code),
            Self::MissingTitle(e) => write!(f, "Missing title: {}", e.info),
            Self::Upstream(e) => write!(f, "Upstream error: {} ({})", e.info, e.code),
            Self::Validation(msg) => write!(f, "Invalid input: {}", msg),
            Self::Conversion(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<wikipedia_api::Error> for ProxyError {
    fn from(e: wikipedia_api::Error) -> Self {
        use wikipedia_api::Error;
        match e {
            Error::RequestFailed(msg) => Self::Transport(ApiErrorBody::new("request_failed", msg, "")),
            Error::HttpStatus { status, body } => Self::Transport(ApiErrorBody::new(
                "http_error",
                format!("upstream responded with HTTP {}", status),
                body,
            )),
            Error::Api { error, .. } if error.is_missing_title() => Self::MissingTitle(error),
            Error::Api { error, .. } => Self::Upstream(error),
            Error::InvalidResponse(msg) => {
                Self::Upstream(ApiErrorBody::new("invalid_response", msg, ""))
            }
        }
    }
}
