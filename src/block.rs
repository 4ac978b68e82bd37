/// Structural kind of a markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

pub(crate) const FENCE: &str = "```";

/// Split a document into blocks on blank lines.
///
/// Each block is trimmed; blocks that end up empty are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a trimmed block. The first matching rule wins, anything else is a
/// paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if heading_level(block).is_some() {
        BlockType::Heading
    } else if is_code(block) {
        BlockType::Code
    } else if every_line(block, |line| line.starts_with('>')) {
        BlockType::Quote
    } else if every_line(block, |line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Level of a single-line `#{1,6} ` heading.
pub fn heading_level(block: &str) -> Option<usize> {
    if block.contains('\n') {
        return None;
    }
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && block[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

fn every_line(block: &str, pred: impl Fn(&str) -> bool) -> bool {
    block.split('\n').all(pred)
}

fn is_code(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(index, line)| ordered_item(line).is_some_and(|(number, _)| number == index + 1))
}

/// Split `<n>. rest` into its number and the rest of the line.
pub fn ordered_item(line: &str) -> Option<(usize, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().ok()?;
    Some((number, rest))
}
