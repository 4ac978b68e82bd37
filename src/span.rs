use crate::html::HtmlNode;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    /// The literal text carried by the span (the alt text for images).
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// Destination for links and images.
    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// A span of the same kind (and destination) holding different text.
    pub fn with_text(&self, text: impl Into<String>) -> Span {
        let text = text.into();
        match self {
            Span::Text(_) => Span::Text(text),
            Span::Bold(_) => Span::Bold(text),
            Span::Italic(_) => Span::Italic(text),
            Span::Code(_) => Span::Code(text),
            Span::Link { url, .. } => Span::Link {
                text,
                url: url.clone(),
            },
            Span::Image { url, .. } => Span::Image {
                alt: text,
                url: url.clone(),
            },
        }
    }

    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            Span::Text(text) => HtmlNode::leaf(None, text.as_str()),
            Span::Bold(text) => HtmlNode::leaf(Some("b"), text.as_str()),
            Span::Italic(text) => HtmlNode::leaf(Some("i"), text.as_str()),
            Span::Code(text) => HtmlNode::leaf(Some("code"), text.as_str()),
            Span::Link { text, url } => {
                HtmlNode::leaf(Some("a"), text.as_str()).with_attr("href", url.as_str())
            }
            Span::Image { alt, url } => HtmlNode::leaf(Some("img"), alt.as_str())
                .with_attr("src", url.as_str())
                .with_attr("alt", alt.as_str()),
        }
    }
}
