//! Format trait and implementations for different document types.
//!
//! A format supplies the tree-sitter grammar, a query capturing every block-level node, and a
//! classifier that turns a captured top-level node into a heading or a body block. Anything
//! format-specific (node kind names, heading markers) stays behind this trait.

pub mod markdown;

use crate::section::BlockKind;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A top-level block as recognised by a format, before heading ids are assigned.
pub enum Captured {
    /// A heading with its level and bare title.
    Heading {
        /// Nesting depth, 1 for top-level.
        level: usize,
        /// Title text without markers.
        title: String,
    },
    /// Any other block.
    Body {
        /// Role of the block; never [`BlockKind::Heading`].
        kind: BlockKind,
        /// Source text of the block.
        text: String,
    },
}

/// A document format parsed with tree-sitter.
pub trait Format {
    /// Grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose captures are the candidate blocks.
    fn block_query(&self) -> &str;
    /// Classifies a captured node, or `None` when it is nested inside another block.
    fn classify(&self, node: tree_sitter::Node<'_>, source: &str) -> Option<Captured>;
}
