use std::fmt;

use thiserror::Error;

/// Structural violations caught when a node is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("all parent nodes must have a tag")]
    MissingTag,
    #[error("parent node <{tag}> must have at least one child")]
    NoChildren { tag: String },
}

/// Payload that differs between the two node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    /// Raw text or pre-rendered content, no children.
    Leaf(String),
    /// Non-empty, exclusively owned children.
    Parent(Vec<HtmlNode>),
}

/// An element of the output tree.
///
/// Leaves may be untagged (plain text), parents always carry a tag and at
/// least one child. Both invariants are checked by the constructors, so a
/// built tree always serializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    tag: Option<String>,
    attrs: Vec<(String, String)>,
    kind: NodeKind,
}

impl HtmlNode {
    /// Leaf node with an optional tag.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            attrs: Vec::new(),
            kind: NodeKind::Leaf(value.into()),
        }
    }

    /// Parent node. Fails on an empty tag or an empty child list.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        if children.is_empty() {
            return Err(NodeError::NoChildren {
                tag: tag.to_string(),
            });
        }
        Ok(Self {
            tag: Some(tag.to_string()),
            attrs: Vec::new(),
            kind: NodeKind::Parent(children),
        })
    }

    /// Append an attribute. Insertion order is the serialization order.
    /// Only leaves write their attributes.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Leaf value, `None` for parents.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf(value) => Some(value),
            NodeKind::Parent(_) => None,
        }
    }

    /// Children, empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Parent(children) => children,
        }
    }

    /// `key="value"` pairs joined by single spaces. Values are not escaped.
    pub fn attrs_to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize the node and everything below it.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match (&self.kind, self.tag.as_deref()) {
            (NodeKind::Leaf(value), None) => out.push_str(value),
            (NodeKind::Leaf(value), Some(tag)) => {
                self.open_tag(tag, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            // The constructor guarantees a tag on parents.
            (NodeKind::Parent(children), tag) => {
                let tag = tag.unwrap_or_default();
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                close_tag(tag, out);
            }
        }
    }

    fn open_tag(&self, tag: &str, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        if !self.attrs.is_empty() {
            out.push(' ');
            out.push_str(&self.attrs_to_html());
        }
        out.push('>');
    }
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
