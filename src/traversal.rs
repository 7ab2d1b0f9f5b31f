//! Read-only queries over the forest.
//!
//! Sibling steps, [`follower`] and [`predecessor`] walk container order: only nodes with a
//! derivation take part, so leaves are reachable solely through zoom or linear navigation.

use crate::node::{Forest, NodeId};

/// First container at or to the right of `start`.
fn container_rightwards(forest: &Forest, start: Option<NodeId>) -> Option<NodeId> {
    let mut position = start;
    while let Some(id) = position {
        let node = forest.node(id);
        if node.is_container() {
            return Some(id);
        }
        position = node.right_sibling;
    }
    None
}

/// First container at or to the left of `start`.
fn container_leftwards(forest: &Forest, start: Option<NodeId>) -> Option<NodeId> {
    let mut position = start;
    while let Some(id) = position {
        let node = forest.node(id);
        if node.is_container() {
            return Some(id);
        }
        position = node.left_sibling;
    }
    None
}

#[must_use]
/// Nearest container to the right of `id` under the same parent.
pub fn next_sibling(forest: &Forest, id: NodeId) -> Option<NodeId> {
    container_rightwards(forest, forest.node(id).right_sibling)
}

#[must_use]
/// Nearest container to the left of `id` under the same parent.
pub fn prev_sibling(forest: &Forest, id: NodeId) -> Option<NodeId> {
    container_leftwards(forest, forest.node(id).left_sibling)
}

#[must_use]
/// Next container in depth-first order, or `None` at the end of the tree.
///
/// Prefers the first child that is a container, then the next container sibling, then the
/// next container sibling of the nearest ancestor that has one.
pub fn follower(forest: &Forest, id: NodeId) -> Option<NodeId> {
    let node = forest.node(id);
    if let Some(child) = node
        .children
        .iter()
        .copied()
        .find(|child| forest.node(*child).is_container())
    {
        return Some(child);
    }
    if let Some(sibling) = next_sibling(forest, id) {
        return Some(sibling);
    }

    let mut ancestor = node.parent;
    while let Some(parent) = ancestor {
        if let Some(sibling) = next_sibling(forest, parent) {
            return Some(sibling);
        }
        ancestor = forest.node(parent).parent;
    }
    None
}

#[must_use]
/// Previous container sibling, else the parent, else `None` at a root.
pub fn predecessor(forest: &Forest, id: NodeId) -> Option<NodeId> {
    prev_sibling(forest, id).or(forest.node(id).parent)
}

#[must_use]
/// Finds the first node whose heading id matches, searching each presentation depth-first.
///
/// Returns the node and the index of the presentation that owns it.
pub fn search_by_id(forest: &Forest, heading_id: &str) -> Option<(usize, NodeId)> {
    forest
        .roots()
        .iter()
        .enumerate()
        .find_map(|(index, root)| {
            search_subtree(forest, *root, heading_id).map(|found| (index, found))
        })
}

fn search_subtree(forest: &Forest, root: NodeId, heading_id: &str) -> Option<NodeId> {
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = forest.node(id);
        if node.heading.id == heading_id {
            return Some(id);
        }
        stack.extend(node.children.iter().rev().copied());
    }
    None
}

#[cfg(test)]
#[path = "tests/traversal.rs"]
mod tests;
