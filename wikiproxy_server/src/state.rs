use std::sync::Arc;

use wikiproxy_lib::{
    Client, ContentFetcher, HtmdConverter, MarkdownConverter, PageSearcher, PipelineOptions,
    RetryConfig,
};

/// Collaborators shared by all handlers. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: ContentFetcher,
    pub searcher: PageSearcher,
    pub converter: Arc<dyn MarkdownConverter>,
    pub options: PipelineOptions,
}

impl AppState {
    pub fn new(
        client: Client,
        retry: RetryConfig,
        converter: Arc<dyn MarkdownConverter>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            fetcher: ContentFetcher::new(client.clone(), retry.clone()),
            searcher: PageSearcher::new(client, retry),
            converter,
            options,
        }
    }

    /// State with the default converter, no retries and default pipeline options.
    pub fn with_client(client: Client) -> Self {
        Self::new(
            client,
            RetryConfig::none(),
            Arc::new(HtmdConverter::default()),
            PipelineOptions::default(),
        )
    }
}
