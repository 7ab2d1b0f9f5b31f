//! Markdown format implementation using tree-sitter-md.
//!
//! Uses the block grammar only: headings (ATX `#` and setext underlines), paragraphs, lists,
//! code, quotes, tables, raw HTML and thematic breaks. Inline markup is kept verbatim in the
//! block text.

use crate::formats::{Captured, Format};
use crate::section::BlockKind;

/// Tree-sitter queries for markdown block structure.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn block_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading) (paragraph) (list) (fenced_code_block) \
         (indented_code_block) (block_quote) (thematic_break) (html_block) (pipe_table)] @block"
    }

    fn classify(&self, node: tree_sitter::Node<'_>, source: &str) -> Option<Captured> {
        let parent = node.parent()?;
        if !matches!(parent.kind(), "document" | "section") {
            return None;
        }
        let kind = match node.kind() {
            "atx_heading" => return Some(atx_heading(node, source)),
            "setext_heading" => return Some(setext_heading(node, source)),
            "paragraph" => BlockKind::Paragraph,
            "list" => BlockKind::List,
            "fenced_code_block" | "indented_code_block" => BlockKind::Code,
            "block_quote" => BlockKind::Quote,
            "pipe_table" => BlockKind::Table,
            "html_block" => BlockKind::Html,
            "thematic_break" => BlockKind::Break,
            _ => return None,
        };
        Some(Captured::Body {
            kind,
            text: source[node.byte_range()].trim_end().to_string(),
        })
    }
}

fn atx_heading(node: tree_sitter::Node<'_>, source: &str) -> Captured {
    let mut level = 1;
    let mut title = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "inline" => title = source[child.byte_range()].trim().to_string(),
            marker => {
                if let Some(n) = marker
                    .strip_prefix("atx_h")
                    .and_then(|rest| rest.strip_suffix("_marker"))
                    .and_then(|n| n.parse().ok())
                {
                    level = n;
                }
            }
        }
    }
    Captured::Heading { level, title }
}

fn setext_heading(node: tree_sitter::Node<'_>, source: &str) -> Captured {
    let mut level = 1;
    let mut title = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "paragraph" => {
                title = source[child.byte_range()]
                    .lines()
                    .map(str::trim)
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string();
            }
            "setext_h2_underline" => level = 2,
            _ => {}
        }
    }
    Captured::Heading { level, title }
}
