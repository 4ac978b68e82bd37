use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::span::Span;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image regex"));

// The regex crate has no look-behind, so `!` in front of a match is rejected
// in `find_links` instead.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link regex"));

/// A `[label](url)` occurrence inside a piece of text.
#[derive(Debug)]
struct Reference {
    range: Range<usize>,
    label: String,
    url: String,
}

impl Reference {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            range: caps.get(0)?.range(),
            label: caps.get(1)?.as_str().to_string(),
            url: caps.get(2)?.as_str().to_string(),
        })
    }
}

/// Split inline markdown into spans.
///
/// Delimiters are handled in a fixed order (bold, italic, code) followed by
/// images and links. An unclosed delimiter runs to the end of the span.
pub fn text_to_spans(text: &str) -> Vec<Span> {
    let spans = vec![Span::Text(text.to_string())];
    let spans = split_delimiter(spans, "**", Span::Bold);
    let spans = split_delimiter(spans, "_", Span::Italic);
    let spans = split_delimiter(spans, "`", Span::Code);
    let spans = split_images(spans);
    split_links(spans)
}

/// Split every span on `delimiter`. Even fragments keep the span's kind, odd
/// fragments become `wrap`. Empty fragments are dropped.
pub fn split_delimiter(spans: Vec<Span>, delimiter: &str, wrap: fn(String) -> Span) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        for (index, part) in span.text().split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if index % 2 == 0 {
                out.push(span.with_text(part));
            } else {
                out.push(wrap(part.to_string()));
            }
        }
    }
    out
}

pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, find_images, |alt, url| Span::Image { alt, url })
}

pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, find_links, |text, url| Span::Link { text, url })
}

fn split_references(
    spans: Vec<Span>,
    find: fn(&str) -> Vec<Reference>,
    make: fn(String, String) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let references = find(span.text());
        if references.is_empty() {
            out.push(span);
            continue;
        }
        let text = span.text();
        let mut cursor = 0;
        for reference in references {
            let before = &text[cursor..reference.range.start];
            if !before.is_empty() {
                out.push(span.with_text(before));
            }
            out.push(make(reference.label, reference.url));
            cursor = reference.range.end;
        }
        let rest = &text[cursor..];
        if !rest.is_empty() {
            out.push(span.with_text(rest));
        }
    }
    out
}

fn find_images(text: &str) -> Vec<Reference> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| Reference::from_captures(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<Reference> {
    let mut references = Vec::new();
    let mut start = 0;
    while let Some(reference) = LINK_RE
        .captures_at(text, start)
        .and_then(|caps| Reference::from_captures(&caps))
    {
        if text[..reference.range.start].ends_with('!') {
            // Image syntax, retry just past the opening bracket.
            start = reference.range.start + 1;
            continue;
        }
        start = reference.range.end;
        references.push(reference);
    }
    references
}

/// `(alt, url)` pairs for every `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|reference| (reference.label, reference.url))
        .collect()
}

/// `(text, url)` pairs for every `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|reference| (reference.label, reference.url))
        .collect()
}
