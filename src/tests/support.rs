//! Shared fixtures for building small forests in tests.

use crate::builder::build_forest;
use crate::node::{Forest, NodeId};
use crate::outline::outline;
use crate::section::{Block, BlockKind, Document};

/// Builds a document from `(level, title, paragraph count)` triples.
///
/// Heading ids are the lowercased titles; paragraphs read `"<title> <n>"`.
pub fn document(headings: &[(usize, &str, usize)]) -> Document {
    let mut blocks = Vec::new();
    for (level, title, paragraphs) in headings {
        blocks.push(Block {
            kind: BlockKind::Heading {
                level: *level,
                id: title.to_lowercase(),
            },
            text: (*title).to_string(),
            line: blocks.len(),
        });
        for n in 0..*paragraphs {
            blocks.push(Block {
                kind: BlockKind::Paragraph,
                text: format!("{title} {n}"),
                line: blocks.len(),
            });
        }
    }
    Document { blocks }
}

/// Outlines and builds a forest from `(level, title, paragraph count)` triples.
pub fn forest(headings: &[(usize, &str, usize)]) -> Forest {
    let document = document(headings);
    let sections = outline(&document);
    build_forest(document, &sections)
}

/// Finds a node by heading text.
pub fn find(forest: &Forest, title: &str) -> NodeId {
    forest
        .nodes()
        .find(|node| node.heading.text == title)
        .map(|node| node.id)
        .unwrap_or_else(|| panic!("no node titled {title}"))
}

/// Heading text of a node.
pub fn title(forest: &Forest, id: NodeId) -> &str {
    &forest.node(id).heading.text
}

/// One presentation `A` with leaf children `B` and `C`, one paragraph each.
pub fn scenario_one() -> Forest {
    forest(&[(1, "A", 0), (2, "B", 1), (2, "C", 1)])
}

/// A deeper presentation used across traversal and navigation tests.
///
/// ```text
/// Root (1 paragraph)
/// ├── P (2 paragraphs)
/// │   ├── P1 (1)
/// │   └── P2 (1)
/// ├── Leaf (3)
/// └── Q (0)
///     ├── Q1 (0)
///     │   └── Q1a (1)
///     └── Q2 (2)
/// ```
pub fn deep() -> Forest {
    forest(&[
        (1, "Root", 1),
        (2, "P", 2),
        (3, "P1", 1),
        (3, "P2", 1),
        (2, "Leaf", 3),
        (2, "Q", 0),
        (3, "Q1", 0),
        (4, "Q1a", 1),
        (3, "Q2", 2),
    ])
}
