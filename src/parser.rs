use thiserror::Error;
use tracing::debug;

use crate::block::{
    BlockType, FENCE, block_to_block_type, heading_level, markdown_to_blocks, ordered_item,
};
use crate::html::{HtmlNode, NodeError};
use crate::inline::text_to_spans;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("document contains no blocks")]
    EmptyDocument,
    #[error(transparent)]
    Node(#[from] NodeError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("couldn't find a title: document must start with a `# ` heading")]
    Missing,
}

/// Parse markdown into a `div` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let blocks = markdown_to_blocks(markdown);
    if blocks.is_empty() {
        return Err(ConvertError::EmptyDocument);
    }

    let children = blocks
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent("div", children)?)
}

fn block_to_html_node(block: &str) -> Result<HtmlNode, NodeError> {
    let block_type = block_to_block_type(block);
    debug!(?block_type, len = block.len(), "classified block");

    match block_type {
        BlockType::Paragraph => HtmlNode::parent("p", text_to_children(block)),
        BlockType::Heading => {
            let level = heading_level(block).unwrap_or(1);
            let tag = format!("h{level}");
            HtmlNode::parent(&tag, text_to_children(&block[level + 1..]))
        }
        BlockType::Code => {
            let inner = &block[FENCE.len()..block.len() - FENCE.len()];
            let code = HtmlNode::leaf(Some("code"), format!("{}\n", inner.trim()));
            HtmlNode::parent("pre", vec![code])
        }
        BlockType::Quote => {
            let text = block
                .split('\n')
                .map(strip_quote_marker)
                .collect::<Vec<_>>()
                .join("\n");
            HtmlNode::parent("blockquote", text_to_children(&text))
        }
        BlockType::UnorderedList => list_to_html_node("ul", block, |line| line.strip_prefix("- ")),
        BlockType::OrderedList => {
            list_to_html_node("ol", block, |line| ordered_item(line).map(|(_, rest)| rest))
        }
    }
}

/// Inline children of a block, with line breaks folded into spaces.
fn text_to_children(text: &str) -> Vec<HtmlNode> {
    text_to_spans(&text.replace('\n', " "))
        .iter()
        .map(|span| span.to_html_node())
        .collect()
}

fn strip_quote_marker(line: &str) -> &str {
    let line = line.strip_prefix('>').unwrap_or(line);
    line.strip_prefix(' ').unwrap_or(line)
}

fn list_to_html_node(
    tag: &str,
    block: &str,
    strip_marker: impl Fn(&str) -> Option<&str>,
) -> Result<HtmlNode, NodeError> {
    let items = block
        .split('\n')
        .map(|line| {
            let content = strip_marker(line).unwrap_or(line);
            HtmlNode::parent("li", text_to_children(content))
        })
        .collect::<Result<Vec<_>, _>>()?;
    HtmlNode::parent(tag, items)
}

/// Title from the `# ` heading on the document's first line.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    let rest = markdown.strip_prefix("# ").ok_or(TitleError::Missing)?;
    let line = rest.split('\n').next().unwrap_or_default();
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        markdown_to_html_node(md).unwrap().to_html()
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p>\
             <p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn headings() {
        assert_eq!(
            html("# Title\n\n###### Small **print**"),
            "<div><h1>Title</h1><h6>Small <b>print</b></h6></div>"
        );
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        assert_eq!(html("####### nope"), "<div><p>####### nope</p></div>");
    }

    #[test]
    fn quote() {
        assert_eq!(
            html("> first line\n>second _line_\n> third"),
            "<div><blockquote>first line second <i>line</i> third</blockquote></div>"
        );
    }

    #[test]
    fn quote_strips_one_space_after_marker() {
        let node = markdown_to_html_node(">  two").unwrap();
        let quote = &node.children()[0];
        assert_eq!(quote.children()[0].value(), Some(" two"));
        assert_eq!(node.to_html(), "<div><blockquote> two</blockquote></div>");
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            html("- one\n- **two**\n- [three](/3)"),
            "<div><ul><li>one</li><li><b>two</b></li><li><a href=\"/3\">three</a></li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            html("1. first\n2. second `code`"),
            "<div><ol><li>first</li><li>second <code>code</code></li></ol></div>"
        );
    }

    #[test]
    fn broken_ordered_list_is_a_paragraph() {
        assert_eq!(html("1. a\n3. b"), "<div><p>1. a 3. b</p></div>");
    }

    #[test]
    fn image_in_paragraph() {
        assert_eq!(
            html("look ![cat](/cat.png)"),
            "<div><p>look <img src=\"/cat.png\" alt=\"cat\">cat</img></p></div>"
        );
    }

    #[test]
    fn one_child_per_block() {
        let md = "# h\n\npara\n\n```\ncode\n```\n\n> q\n\n- u\n\n1. o";
        let node = markdown_to_html_node(md).unwrap();
        let tags: Vec<_> = node.children().iter().filter_map(HtmlNode::tag).collect();
        assert_eq!(tags, vec!["h1", "p", "pre", "blockquote", "ul", "ol"]);
    }

    #[test]
    fn empty_document_fails() {
        assert_eq!(markdown_to_html_node(""), Err(ConvertError::EmptyDocument));
        assert_eq!(
            markdown_to_html_node("  \n\n \n"),
            Err(ConvertError::EmptyDocument)
        );
    }

    #[test]
    fn list_item_with_only_a_marker_fails() {
        assert_eq!(
            markdown_to_html_node("- a\n- \n- c"),
            Err(ConvertError::Node(NodeError::NoChildren { tag: "li".into() }))
        );
    }

    #[test]
    fn title() {
        assert_eq!(extract_title("# Hello  \n\nbody").unwrap(), "Hello");
        assert_eq!(extract_title("# Only line").unwrap(), "Only line");
    }

    #[test]
    fn missing_title() {
        assert_eq!(extract_title("## Not h1"), Err(TitleError::Missing));
        assert_eq!(extract_title("intro\n# Late"), Err(TitleError::Missing));
    }
}
