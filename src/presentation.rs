//! Cycling between the presentations of one document.

use crate::nav::{Cursor, Mode};
use crate::node::Forest;
use tracing::debug;

#[must_use]
/// Shows the root of the next (or previous) presentation, wrapping at both ends.
///
/// Zoom, linear stepping and the remembered position are cleared. With a single presentation
/// nothing changes.
pub fn switch_presentation(forest: &Forest, cursor: Cursor, forward: bool) -> Cursor {
    let count = forest.len();
    if count <= 1 {
        return cursor;
    }

    let presentation = if forward {
        (cursor.presentation + 1) % count
    } else {
        (cursor.presentation + count - 1) % count
    };
    let Some(root) = forest.root(presentation) else {
        return cursor;
    };

    debug!(from = cursor.presentation, to = presentation, "switched presentation");
    Cursor {
        presentation,
        node: root,
        mode: Mode::Hierarchical,
        previous: None,
        link: 0,
        ..cursor
    }
}

#[cfg(test)]
#[path = "tests/presentation.rs"]
mod tests;
