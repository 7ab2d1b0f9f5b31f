//! Reading documents from disk and turning them into slide forests.
//!
//! Parsing is format-driven: the format's query captures block nodes, the format classifies
//! the top-level ones, and headings receive unique slug ids here so that fragments can point
//! at them.

use crate::builder::TreeBuilder;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::{markdown::MarkdownFormat, Captured, Format};
use crate::node::Forest;
use crate::outline::outline;
use crate::section::{Block, BlockKind, Document};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tracing::info;
use tree_sitter::{Parser, Query, QueryCursor};

/// Parses `source` into its ordered top-level blocks.
///
/// # Errors
///
/// Returns an error if the grammar or the block query cannot be loaded, or if tree-sitter
/// produces no tree.
pub fn parse_document(source: &str, format: &impl Format) -> Result<Document> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Language(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse(PathBuf::new()))?;
    let query =
        Query::new(&language, format.block_query()).map_err(|e| Error::Query(e.to_string()))?;

    let mut captured = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(block) = format.classify(capture.node, source) {
                captured.push((capture.node.start_byte(), capture.node.start_position().row, block));
            }
        }
    }
    captured.sort_by_key(|(start, _, _)| *start);
    captured.dedup_by_key(|(start, _, _)| *start);

    let mut slugs = Slugs::default();
    let blocks = captured
        .into_iter()
        .map(|(_, line, block)| match block {
            Captured::Heading { level, title } => Block {
                kind: BlockKind::Heading {
                    level,
                    id: slugs.unique(&title),
                },
                text: title,
                line,
            },
            Captured::Body { kind, text } => Block { kind, text, line },
        })
        .collect();
    Ok(Document { blocks })
}

/// Reads and parses a markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    parse_document(&source, &MarkdownFormat).map_err(|e| match e {
        Error::Parse(_) => Error::Parse(path.to_path_buf()),
        other => other,
    })
}

/// Reads a markdown file and builds its slide forest.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or holds no content at all.
pub fn load_forest(path: &Path, config: &Config) -> Result<Forest> {
    let document = load_document(path)?;
    let sections = outline(&document);
    if sections.is_empty() {
        return Err(Error::EmptyDocument(path.to_path_buf()));
    }
    let forest = TreeBuilder::new(document)
        .untitled_title(config.untitled_title.clone())
        .build(&sections);
    info!(
        path = %path.display(),
        presentations = forest.len(),
        "loaded document"
    );
    Ok(forest)
}

#[must_use]
/// GitHub-style anchor for a heading title.
///
/// Lowercases, keeps alphanumerics, turns spaces and hyphens into hyphens and drops any other
/// punctuation.
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('-'),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Default)]
struct Slugs {
    taken: HashSet<String>,
}

impl Slugs {
    /// Slug for `title`, suffixed with `-1`, `-2`... until it is unused.
    fn unique(&mut self, title: &str) -> String {
        let mut base = slugify(title);
        if base.is_empty() {
            base = "section".to_string();
        }
        let mut slug = base.clone();
        let mut n = 0;
        while self.taken.contains(&slug) {
            n += 1;
            slug = format!("{base}-{n}");
        }
        self.taken.insert(slug.clone());
        slug
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
