//! Library layer for wikiproxy: page fetching, searching, and HTML to
//! Markdown conversion on top of the `wikipedia_api` client.
//!
//! Nothing here keeps state between requests; every type is cheap to clone
//! and safe to share across tasks.

pub mod convert;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod retry;
pub mod searcher;
pub mod validation;

pub use wikipedia_api;
pub use wikipedia_api::types::ApiErrorBody;
pub use wikipedia_api::{Client, ClientConfig, DEFAULT_API_URL};

pub use convert::{strip_presentational, to_markdown, HtmdConverter, MarkdownConverter};
pub use error::ProxyError;
pub use fetcher::{ContentFetcher, FetchResult};
pub use pipeline::{
    attachment_filename, render_page, ConversionRequest, PipelineOptions, RenderedPage,
    ResponseFormat,
};
pub use retry::RetryConfig;
pub use searcher::{PageSearcher, SearchPaging, SearchResult};
