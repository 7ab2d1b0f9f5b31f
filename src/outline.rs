//! Groups a flat block list into the section hierarchy.
//!
//! A heading of level L closes every open section of level L or deeper. If nothing remains
//! open it starts a new top-level partition (one presentation each), otherwise it nests under
//! the innermost open section. Body content with no heading of its own, ahead of the first
//! heading or after a thematic break, gets an implied heading.

use crate::section::{BlockId, BlockKind, Document, Section, SectionHeading};

#[must_use]
/// Builds the top-level sections of a document in document order.
pub fn outline(document: &Document) -> Vec<Section> {
    let mut roots = Vec::new();
    let mut open: Vec<(usize, Section)> = Vec::new();

    implied(document, &mut open, &mut roots, 0);
    for (index, block) in document.blocks.iter().enumerate() {
        match block.kind {
            BlockKind::Heading { level, .. } => {
                close(&mut open, &mut roots, level);
                open.push((level, Section::new(BlockId(index))));
            }
            BlockKind::Break => implied(document, &mut open, &mut roots, index + 1),
            _ => {}
        }
    }
    close(&mut open, &mut roots, 0);

    roots
}

/// Opens a headingless section for body content starting at `body_start`, if there is any.
///
/// It nests under the innermost open section, or becomes a partition when none is open.
fn implied(
    document: &Document,
    open: &mut [(usize, Section)],
    roots: &mut Vec<Section>,
    body_start: usize,
) {
    let Some(block) = document.blocks.get(body_start) else {
        return;
    };
    if block.kind.is_boundary() {
        return;
    }
    let section = Section {
        heading: SectionHeading::Implied {
            body_start: BlockId(body_start),
        },
        children: Vec::new(),
    };
    match open.last_mut() {
        Some((_, parent)) => parent.children.push(section),
        None => roots.push(section),
    }
}

/// Pops open sections at `level` or deeper, attaching each to its enclosing section.
fn close(open: &mut Vec<(usize, Section)>, roots: &mut Vec<Section>, level: usize) {
    while open
        .last()
        .is_some_and(|(open_level, _)| *open_level >= level)
    {
        if let Some((_, section)) = open.pop() {
            match open.last_mut() {
                Some((_, parent)) => parent.children.push(section),
                None => roots.push(section),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
