use serde::{Deserialize, Serialize};

/// Successful `action=parse` response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ParseResponse {
    pub parse: ParsedPage,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ParsedPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pageid: i64,
    pub text: ParsedText,
}

/// Rendered HTML of a page, in either output format version.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum ParsedText {
    /// `formatversion=1`: `{"*": "<div>...</div>"}`.
    Wrapped {
        #[serde(rename = "*")]
        html: String,
    },
    /// `formatversion=2`: a bare string.
    Plain(String),
}

impl ParsedText {
    pub fn html(&self) -> &str {
        match self {
            ParsedText::Wrapped { html } => html,
            ParsedText::Plain(html) => html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            ParsedText::Wrapped { html } => html,
            ParsedText::Plain(html) => html,
        }
    }
}
