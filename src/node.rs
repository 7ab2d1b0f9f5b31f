//! Arena-backed outline tree.
//!
//! Every slide is a [`Node`] stored in one [`Forest`] arena and addressed by [`NodeId`]. Parent,
//! child and sibling links are ids rather than references, so the tree has no ownership cycles
//! and every structural hop is an index lookup. The forest is immutable once built; only the
//! navigation cursor changes afterwards.

use crate::section::{Block, BlockId, Document};
use serde::Serialize;
use std::fmt;

/// Index of a node in the forest arena, assigned in depth-first creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Anchor id and display text of a slide heading.
pub struct Heading {
    /// Anchor used in location fragments.
    pub id: String,
    /// Heading text without markup.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One child listed in a derivation.
pub struct DerivationEntry {
    /// The child node.
    pub child: NodeId,
    /// Anchor of the child heading.
    pub heading_id: String,
    /// Text of the child heading.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Summary view of a node with children.
pub struct Derivation {
    /// First paragraph of the node's content, shown above the child list.
    pub lead: Option<String>,
    /// Direct children in order.
    pub entries: Vec<DerivationEntry>,
}

impl Derivation {
    /// Rendering payload: the lead paragraph (if any) followed by each child heading.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.lead
            .as_deref()
            .into_iter()
            .chain(self.entries.iter().map(|entry| entry.text.as_str()))
    }
}

#[derive(Clone, Debug)]
/// A slide in the outline tree.
pub struct Node {
    /// Position in the arena.
    pub id: NodeId,
    /// Heading shown as the slide title.
    pub heading: Heading,
    /// Owning node, `None` for a presentation root.
    pub parent: Option<NodeId>,
    /// Direct children in document order.
    pub children: Vec<NodeId>,
    /// Previous node under the same parent.
    pub left_sibling: Option<NodeId>,
    /// Next node under the same parent.
    pub right_sibling: Option<NodeId>,
    /// Child summary, present exactly when `children` is non-empty.
    pub derivation: Option<Derivation>,
    /// Body blocks shown one at a time when zoomed.
    pub content: Vec<BlockId>,
}

impl Node {
    #[must_use]
    /// Whether the node has children and therefore takes part in container order.
    pub fn is_container(&self) -> bool {
        self.derivation.is_some()
    }
}

#[derive(Clone, Debug, Default)]
/// Every presentation tree built from one document.
pub struct Forest {
    pub(crate) document: Document,
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
}

impl Forest {
    #[must_use]
    /// Root of each presentation, in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[must_use]
    /// Number of presentations.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    /// Whether the document produced no presentations at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[must_use]
    /// Root of the presentation at `index`.
    pub fn root(&self, index: usize) -> Option<NodeId> {
        self.roots.get(index).copied()
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    #[must_use]
    /// Looks up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this forest.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    /// Looks up a node, returning `None` for foreign ids.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[must_use]
    /// The document the forest was built from.
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    /// Content block `index` of `id`, or `None` when the index is out of range.
    pub fn content_block(&self, id: NodeId, index: usize) -> Option<&Block> {
        self.node(id)
            .content
            .get(index)
            .and_then(|block| self.document.block(*block))
    }

    #[must_use]
    /// Index of the presentation whose tree contains `id`.
    pub fn presentation_of(&self, id: NodeId) -> Option<usize> {
        let mut top = self.get(id)?;
        while let Some(parent) = top.parent {
            top = self.node(parent);
        }
        self.roots.iter().position(|root| *root == top.id)
    }

    #[must_use]
    /// Headings from the presentation root down to `id`.
    pub fn breadcrumb(&self, id: NodeId) -> Vec<&Heading> {
        let mut trail = Vec::new();
        let mut position = self.get(id);
        while let Some(node) = position {
            trail.push(&node.heading);
            position = node.parent.map(|parent| self.node(parent));
        }
        trail.reverse();
        trail
    }
}
