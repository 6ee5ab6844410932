use serde::{Deserialize, Serialize};

/// Error code the API uses when the requested page does not exist.
pub const MISSING_TITLE: &str = "missingtitle";

/// The `error` object of a MediaWiki response.
///
/// The API spells the free-form detail member `*` (or `docref` with
/// `formatversion=2`); it is serialized back out as `detail`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
    #[serde(
        default,
        rename(serialize = "detail", deserialize = "*"),
        alias = "docref",
        alias = "detail"
    )]
    pub detail: String,
}

impl ApiErrorBody {
    pub fn new(code: impl Into<String>, info: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            info: info.into(),
            detail: detail.into(),
        }
    }

    pub fn is_missing_title(&self) -> bool {
        self.code == MISSING_TITLE
    }
}
