mod block;
mod config;
mod html;
mod inline;
mod parser;
mod site;
mod span;

pub use block::{BlockType, block_to_block_type, markdown_to_blocks};
pub use config::{Config, ConfigError, PathsConfig, TemplateConfig};
pub use html::{HtmlNode, NodeError};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
    text_to_spans,
};
pub use parser::{ConvertError, TitleError, extract_title, markdown_to_html_node};
pub use site::{
    SiteError, SiteReport, build_site, copy_static, generate_page, generate_pages_recursive,
    render_page,
};
pub use span::Span;

/// Convert markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}
