use url::Url;

use super::{common::QueryCommon, Query};

/// Query for `action=parse`: renders a page's wikitext to HTML.
#[derive(Clone, Debug)]
pub struct ParseQuery {
    pub common: QueryCommon,
    pub page: String,
    pub prop: String,
    pub content_model: String,
}

impl Query for ParseQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("action", "parse")
            .append_pair("page", &self.page)
            .append_pair("prop", &self.prop)
            .append_pair("contentmodel", &self.content_model);
        url
    }
}

impl ParseQuery {
    /// Requests the rendered HTML (`prop=text`) of the given page title.
    pub fn new(page: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            page: page.to_string(),
            prop: "text".to_string(),
            content_model: "wikitext".to_string(),
        }
    }

    pub fn with_prop(mut self, prop: &str) -> Self {
        self.prop = prop.to_string();
        self
    }
}
