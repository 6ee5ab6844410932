use url::Url;

use super::{common::QueryCommon, Query};

/// Query for `action=query&list=search`: full-text search over pages.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub search: String,
    /// `srlimit`. `None` uses the API default (10).
    pub limit: Option<u32>,
    /// `sroffset`, as returned in the `continue` block of a previous response.
    pub offset: Option<u32>,
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "search")
            .append_pair("srsearch", &self.search);
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("srlimit", &limit.to_string());
        };
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("sroffset", &offset.to_string());
        };
        url
    }
}

impl SearchQuery {
    pub fn new(search: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            search: search.to_string(),
            limit: None,
            offset: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}
