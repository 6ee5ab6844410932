//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`FormatVersion`].

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for the parameters every MediaWiki action accepts.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the `origin` parameter used by the API for CORS. Defaults to `*`.
    fn with_origin(mut self, origin: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().origin = origin.to_string();
        self
    }

    /// Selects the JSON output format version.
    fn with_format_version(mut self, format_version: FormatVersion) -> Self
    where
        Self: Sized,
    {
        self.get_common().format_version = format_version;
        self
    }
}

/// JSON output format version of the MediaWiki API.
///
/// Version 1 wraps text content in `{"*": ...}` objects; version 2 returns
/// plain strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatVersion {
    /// Legacy format. This is the default and is not sent on the wire.
    #[default]
    V1 = 1,
    /// Modern format (`formatversion=2`).
    V2 = 2,
}

/// Fields shared by all query types.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// CORS origin. Anonymous requests use `*`.
    pub origin: String,
    /// Output format version.
    pub format_version: FormatVersion,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            origin: "*".to_string(),
            format_version: FormatVersion::V1,
        }
    }
}

impl QueryCommon {
    /// Appends `origin`, `format` and (when not the default) `formatversion` to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("origin", &self.origin)
            .append_pair("format", "json");
        if self.format_version == FormatVersion::V2 {
            url.query_pairs_mut().append_pair("formatversion", "2");
        }
        url
    }
}
