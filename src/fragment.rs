//! Location fragments: `#<heading id>` or `#<heading id>/<content index>`.
//!
//! The presenter writes a fragment whenever the cursor moves and applies any fragment it is
//! handed from outside, which lets a position be bookmarked, shared or restored at start-up.

use crate::nav::{jump_to_id, Cursor};
use crate::node::Forest;
use crate::traversal::search_by_id;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A decoded location fragment.
pub struct Fragment {
    /// Anchor of the target heading.
    pub heading_id: String,
    /// Content item to zoom into, if any.
    pub content: Option<usize>,
}

impl Fragment {
    #[must_use]
    /// Decodes `#id` or `#id/index`; the leading `#` is optional.
    ///
    /// A trailing segment that is not a number is treated as part of the heading id.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        if raw.is_empty() {
            return None;
        }
        if let Some((heading_id, index)) = raw.rsplit_once('/') {
            if let Ok(index) = index.parse::<usize>() {
                if !heading_id.is_empty() {
                    return Some(Self {
                        heading_id: heading_id.to_string(),
                        content: Some(index),
                    });
                }
            }
        }
        Some(Self {
            heading_id: raw.to_string(),
            content: None,
        })
    }

    #[must_use]
    /// Encodes the cursor: the active heading, plus the content index when zoomed.
    pub fn of(forest: &Forest, cursor: &Cursor) -> Self {
        Self {
            heading_id: forest.node(cursor.node).heading.id.clone(),
            content: cursor.zoom(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.content {
            Some(index) => write!(f, "#{}/{index}", self.heading_id),
            None => write!(f, "#{}", self.heading_id),
        }
    }
}

#[must_use]
/// Applies an externally changed fragment, bypassing the usual transition rules.
///
/// Jumps to the heading, then zooms to the requested content item when the node has one at
/// that index, or shows the derivation view when no index is given. Unknown headings leave
/// the cursor as it is.
pub fn apply_fragment(forest: &Forest, cursor: Cursor, fragment: &Fragment) -> Cursor {
    let Some((_, node)) = search_by_id(forest, &fragment.heading_id) else {
        return cursor;
    };
    let jumped = jump_to_id(forest, cursor, &fragment.heading_id);
    let zoom = fragment
        .content
        .filter(|index| *index < forest.node(node).content.len());
    Cursor {
        mode: jumped.mode.with_zoom(zoom),
        ..jumped
    }
}

#[cfg(test)]
#[path = "tests/fragment.rs"]
mod tests;
