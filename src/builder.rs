//! Turns the section hierarchy into the slide forest.
//!
//! Ids are handed out depth-first in document order, a node before its children, and keep
//! increasing across presentations so they are unique in the whole forest. Children are built
//! and sibling-linked before their parent's derivation and content are filled in.

use crate::node::{Derivation, DerivationEntry, Forest, Heading, Node, NodeId};
use crate::section::{BlockId, BlockKind, Document, Section, SectionHeading};
use tracing::debug;

/// Title given to sections whose heading is implied.
pub const DEFAULT_UNTITLED_TITLE: &str = "Untitled";

/// Builds one tree per top-level section of a document.
pub struct TreeBuilder {
    document: Document,
    nodes: Vec<Node>,
    untitled_title: String,
}

impl TreeBuilder {
    #[must_use]
    /// Starts a builder over the blocks the sections refer to.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            nodes: Vec::new(),
            untitled_title: DEFAULT_UNTITLED_TITLE.to_string(),
        }
    }

    #[must_use]
    /// Sets the heading text used for implied headings.
    pub fn untitled_title(mut self, title: impl Into<String>) -> Self {
        self.untitled_title = title.into();
        self
    }

    #[must_use]
    /// Builds the forest, one presentation per entry of `sections`.
    pub fn build(mut self, sections: &[Section]) -> Forest {
        let roots = sections
            .iter()
            .map(|section| self.build_node(None, section))
            .collect::<Vec<_>>();

        debug!(
            presentations = roots.len(),
            nodes = self.nodes.len(),
            "built slide forest"
        );

        Forest {
            document: self.document,
            nodes: self.nodes,
            roots,
        }
    }

    fn build_node(&mut self, parent: Option<NodeId>, section: &Section) -> NodeId {
        let id = NodeId(self.nodes.len());
        let heading = self.heading_for(section, id);
        self.nodes.push(Node {
            id,
            heading,
            parent,
            children: Vec::new(),
            left_sibling: None,
            right_sibling: None,
            derivation: None,
            content: Vec::new(),
        });

        let children = section
            .children
            .iter()
            .map(|child| self.build_node(Some(id), child))
            .collect::<Vec<_>>();
        self.link_siblings(&children);

        let content = self.content_for(section);
        let derivation = self.derivation_for(&children, &content);

        let node = &mut self.nodes[id.0];
        node.children = children;
        node.content = content;
        node.derivation = derivation;
        id
    }

    fn heading_for(&self, section: &Section, id: NodeId) -> Heading {
        if let SectionHeading::Explicit(block) = section.heading {
            if let Some(found) = self.document.block(block) {
                if let BlockKind::Heading { id: anchor, .. } = &found.kind {
                    return Heading {
                        id: anchor.clone(),
                        text: found.text.clone(),
                    };
                }
            }
        }
        Heading {
            id: format!("untitled-{id}"),
            text: self.untitled_title.clone(),
        }
    }

    fn link_siblings(&mut self, siblings: &[NodeId]) {
        for pair in siblings.windows(2) {
            self.nodes[pair[0].0].right_sibling = Some(pair[1]);
            self.nodes[pair[1].0].left_sibling = Some(pair[0]);
        }
    }

    /// Blocks after the heading up to the next heading or thematic break.
    fn content_for(&self, section: &Section) -> Vec<BlockId> {
        let start = section.body_start().0;
        self.document
            .blocks
            .iter()
            .enumerate()
            .skip(start)
            .take_while(|(_, block)| !block.kind.is_boundary())
            .map(|(index, _)| BlockId(index))
            .collect()
    }

    fn derivation_for(&self, children: &[NodeId], content: &[BlockId]) -> Option<Derivation> {
        if children.is_empty() {
            return None;
        }

        let lead = content
            .iter()
            .filter_map(|id| self.document.block(*id))
            .find(|block| block.kind == BlockKind::Paragraph)
            .map(|block| block.text.clone());

        let entries = children
            .iter()
            .map(|child| {
                let heading = &self.nodes[child.0].heading;
                DerivationEntry {
                    child: *child,
                    heading_id: heading.id.clone(),
                    text: heading.text.clone(),
                }
            })
            .collect();

        Some(Derivation { lead, entries })
    }
}

#[must_use]
/// Builds the forest for a document using the default untitled heading text.
pub fn build_forest(document: Document, sections: &[Section]) -> Forest {
    TreeBuilder::new(document).build(sections)
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
