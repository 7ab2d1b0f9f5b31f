//! Section hierarchy handed to the tree builder.
//!
//! A document is a flat, ordered list of blocks (headings, paragraphs, lists...). The outliner
//! groups those blocks into sections: each section points at its heading block, or records
//! where its body starts when the heading is implied, and owns its nested subsections. The
//! builder only ever sees this hierarchy plus the block list it indexes into.

use serde::Serialize;

/// Index of a block within a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BlockId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// Structural role of a top-level document block.
pub enum BlockKind {
    /// Heading of the given level (1 for top-level) with its anchor id.
    Heading {
        /// Nesting depth, 1 through 6.
        level: usize,
        /// Anchor used in location fragments.
        id: String,
    },
    /// Running text.
    Paragraph,
    /// Bulleted or numbered list.
    List,
    /// Fenced or indented code.
    Code,
    /// Block quote.
    Quote,
    /// Pipe table.
    Table,
    /// Raw HTML block.
    Html,
    /// Thematic break; closes the body of the preceding heading.
    Break,
}

impl BlockKind {
    /// Whether this block ends the body of the heading before it.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::Heading { .. } | Self::Break)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One top-level block with its rendered text.
pub struct Block {
    /// Role of the block.
    pub kind: BlockKind,
    /// Source text with markup kept, except headings which hold the bare title.
    pub text: String,
    /// Zero-based line where the block starts.
    pub line: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered blocks of a parsed document.
pub struct Document {
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    /// Looks up a block, returning `None` for ids past the end.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where a section's heading comes from.
pub enum SectionHeading {
    /// Heading block present in the document.
    Explicit(BlockId),
    /// No heading in the source; the body starts at the given block.
    Implied {
        /// First block belonging to the section body.
        body_start: BlockId,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Hierarchical division of a document: a heading and its nested subsections.
pub struct Section {
    /// Heading that opens the section.
    pub heading: SectionHeading,
    /// Directly nested subsections in document order.
    pub children: Vec<Section>,
}

impl Section {
    #[must_use]
    /// A section opened by an explicit heading block, without subsections yet.
    pub fn new(heading: BlockId) -> Self {
        Self {
            heading: SectionHeading::Explicit(heading),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// First block after the heading, i.e. where the body walk begins.
    pub fn body_start(&self) -> BlockId {
        match self.heading {
            SectionHeading::Explicit(BlockId(index)) => BlockId(index + 1),
            SectionHeading::Implied { body_start } => body_start,
        }
    }
}
