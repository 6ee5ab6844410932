//! HTML sanitizing and HTML to Markdown conversion.

use htmd::options::{CodeBlockStyle, HeadingStyle, LinkStyle, Options};
use htmd::HtmlToMarkdown;
use scraper::{Html, Node};

use crate::error::ProxyError;

/// Removes every `<style>` element from an HTML fragment.
///
/// The fragment goes through a full HTML5 parse, so malformed markup is
/// repaired rather than rejected. Apart from the removed elements the output
/// keeps the original node order.
pub fn strip_presentational(html: &str) -> String {
    let mut fragment = Html::parse_fragment(html);
    let style_ids: Vec<_> = fragment
        .tree
        .root()
        .descendants()
        .filter(|node| matches!(node.value(), Node::Element(el) if el.name() == "style"))
        .map(|node| node.id())
        .collect();
    for id in style_ids {
        if let Some(mut node) = fragment.tree.get_mut(id) {
            node.detach();
        }
    }
    fragment.root_element().inner_html()
}

/// Turns an HTML fragment into Markdown.
pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, html: &str) -> Result<String, ProxyError>;
}

/// [`MarkdownConverter`] backed by `htmd`: ATX headings, fenced code blocks,
/// inline links. `<script>` content is dropped.
#[derive(Clone, Debug)]
pub struct HtmdConverter {
    skip_tags: Vec<&'static str>,
}

impl Default for HtmdConverter {
    fn default() -> Self {
        Self {
            skip_tags: vec!["script", "noscript"],
        }
    }
}

fn htmd_options() -> Options {
    Options {
        heading_style: HeadingStyle::Atx,
        code_block_style: CodeBlockStyle::Fenced,
        link_style: LinkStyle::Inlined,
        ..Default::default()
    }
}

impl MarkdownConverter for HtmdConverter {
    fn convert(&self, html: &str) -> Result<String, ProxyError> {
        let converter = HtmlToMarkdown::builder()
            .options(htmd_options())
            .skip_tags(self.skip_tags.clone())
            .build();
        converter.convert(html).map_err(|e| {
            tracing::error!("Markdown conversion failed: {}", e);
            ProxyError::Conversion(e.to_string())
        })
    }
}

/// Sanitizes `html` and converts it with the default converter.
pub fn to_markdown(html: &str) -> Result<String, ProxyError> {
    HtmdConverter::default().convert(&strip_presentational(html))
}
