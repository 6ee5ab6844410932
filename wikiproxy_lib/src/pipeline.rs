//! The fetch-and-convert pipeline: turns a [`FetchResult`] into a response-ready page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{strip_presentational, MarkdownConverter};
use crate::error::ProxyError;
use crate::fetcher::FetchResult;
use crate::validation::validate_page_title;

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_MARKDOWN: &str = "text/markdown; charset=utf-8";
pub const CONTENT_TYPE_ATTACHMENT: &str = "application/octet-stream";

/// Output format of a rendered page.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Html,
    Markdown,
}

impl ResponseFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ResponseFormat::Html => "html",
            ResponseFormat::Markdown => "md",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::Html => CONTENT_TYPE_HTML,
            ResponseFormat::Markdown => CONTENT_TYPE_MARKDOWN,
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseFormat::Html => "html",
            ResponseFormat::Markdown => "markdown",
        };
        write!(f, "{}", s)
    }
}

/// A validated request to render one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    page_title: String,
    format: ResponseFormat,
    as_attachment: bool,
}

impl ConversionRequest {
    /// Validates the title and builds the request.
    pub fn new(
        page_title: &str,
        format: ResponseFormat,
        as_attachment: bool,
    ) -> Result<Self, ProxyError> {
        Ok(Self {
            page_title: validate_page_title(page_title)?,
            format,
            as_attachment,
        })
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn as_attachment(&self) -> bool {
        self.as_attachment
    }
}

/// Knobs that used to be separate code paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Remove `<style>` elements before Markdown conversion.
    pub strip_styles: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { strip_styles: true }
    }
}

/// A page ready to be written to the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub body: String,
    pub content_type: &'static str,
    /// `Content-Disposition` value, set for attachment responses.
    pub content_disposition: Option<String>,
}

/// Download name for a page: the percent-encoded title plus the format's extension.
pub fn attachment_filename(page_title: &str, format: ResponseFormat) -> String {
    format!("{}.{}", urlencoding::encode(page_title), format.extension())
}

/// Applies the requested conversion and response metadata to a fetch outcome.
pub fn render_page(
    fetched: FetchResult,
    request: &ConversionRequest,
    converter: &dyn MarkdownConverter,
    options: &PipelineOptions,
) -> Result<RenderedPage, ProxyError> {
    let html = fetched.into_result()?;

    let body = match request.format() {
        ResponseFormat::Html => html,
        ResponseFormat::Markdown if options.strip_styles => {
            converter.convert(&strip_presentational(&html))?
        }
        ResponseFormat::Markdown => converter.convert(&html)?,
    };

    if request.as_attachment() {
        let filename = attachment_filename(request.page_title(), request.format());
        Ok(RenderedPage {
            body,
            content_type: CONTENT_TYPE_ATTACHMENT,
            content_disposition: Some(format!("attachment; filename=\"{}\"", filename)),
        })
    } else {
        Ok(RenderedPage {
            body,
            content_type: request.format().content_type(),
            content_disposition: None,
        })
    }
}
