//! The navigation state machine.
//!
//! A [`Cursor`] is a plain value: the active node, how it is being viewed ([`Mode`]), which
//! overlay is open and the single remembered position used to retrace linear steps. Every
//! transition is a function from a cursor to a new cursor over a shared, immutable
//! [`Forest`]. A transition that cannot happen returns its input unchanged, which the front
//! end shows as a disabled affordance.
//!
//! ```text
//!                toggle_zoom
//!  Hierarchical <-----------> Zoomed { index }
//!       ^                           ^
//!       | set_linear                | set_linear
//!       v                           v
//!  Linear { zoom: None } <--> Linear { zoom: Some(index) }
//!                toggle_zoom
//! ```
//!
//! Only one position is remembered: backward linear steps replay the cursor recorded by the
//! last linear step, and after one replay fall back to a structural search.

use crate::node::{Forest, NodeId};
use crate::presentation::switch_presentation;
use crate::traversal::{next_sibling, prev_sibling, search_by_id};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Overlay drawn on top of the slides; at most one is open.
pub enum Overlay {
    #[default]
    /// Slides only.
    None,
    /// Tree diagram of the presentation.
    Minimap,
    /// Presentation settings.
    Settings,
    /// Key reference.
    Help,
    /// Export choices.
    Download,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How the active node is shown and how sideways steps are resolved.
pub enum Mode {
    /// Derivation view; sideways steps move between container siblings.
    Hierarchical,
    /// One content item at a time; sideways steps move through the content.
    Zoomed {
        /// Content item being shown.
        index: usize,
    },
    /// Sideways steps walk every node of the tree in order.
    Linear {
        /// Content item being shown, if zoomed.
        zoom: Option<usize>,
    },
}

impl Mode {
    #[must_use]
    /// Content index being shown, or `None` in the derivation view.
    pub fn zoom(self) -> Option<usize> {
        match self {
            Self::Hierarchical => None,
            Self::Zoomed { index } => Some(index),
            Self::Linear { zoom } => zoom,
        }
    }

    #[must_use]
    /// Whether sideways steps use linear order.
    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear { .. })
    }

    #[must_use]
    /// Same stepping style with a different zoom state.
    pub fn with_zoom(self, zoom: Option<usize>) -> Self {
        match (self, zoom) {
            (Self::Linear { .. }, zoom) => Self::Linear { zoom },
            (_, Some(index)) => Self::Zoomed { index },
            (_, None) => Self::Hierarchical,
        }
    }

    #[must_use]
    /// Switches linear stepping on or off, keeping the zoom state.
    pub fn linear(self, on: bool) -> Self {
        let zoom = self.zoom();
        if on {
            Self::Linear { zoom }
        } else {
            Self::Hierarchical.with_zoom(zoom)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A node together with the content item shown on it.
pub struct Position {
    /// Active node.
    pub node: NodeId,
    /// Content index when zoomed.
    pub zoom: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Complete navigation state.
pub struct Cursor {
    /// Index of the presentation being shown.
    pub presentation: usize,
    /// Active node, always inside the shown presentation.
    pub node: NodeId,
    /// View and stepping mode.
    pub mode: Mode,
    /// Open overlay.
    pub overlay: Overlay,
    /// Position recorded by the last linear step.
    pub previous: Option<Position>,
    /// Highlighted derivation entry.
    pub link: usize,
}

impl Cursor {
    #[must_use]
    /// Cursor on the root of the first presentation.
    pub fn start(forest: &Forest) -> Option<Self> {
        Self::at(forest, 0)
    }

    #[must_use]
    /// Cursor on the root of presentation `presentation`.
    pub fn at(forest: &Forest, presentation: usize) -> Option<Self> {
        forest.root(presentation).map(|node| Self {
            presentation,
            node,
            mode: Mode::Hierarchical,
            overlay: Overlay::None,
            previous: None,
            link: 0,
        })
    }

    #[must_use]
    /// Active node and content index.
    pub fn position(&self) -> Position {
        Position {
            node: self.node,
            zoom: self.mode.zoom(),
        }
    }

    #[must_use]
    /// Content index being shown, if zoomed.
    pub fn zoom(&self) -> Option<usize> {
        self.mode.zoom()
    }

    fn moved_to(self, node: NodeId, zoom: Option<usize>) -> Self {
        Self {
            node,
            mode: self.mode.with_zoom(zoom),
            link: if node == self.node { self.link } else { 0 },
            ..self
        }
    }

    fn same_place(&self, other: &Self) -> bool {
        self.presentation == other.presentation && self.position() == other.position()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Sideways direction.
pub enum Direction {
    /// Towards earlier nodes or content.
    Left,
    /// Towards later nodes or content.
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// An abstract input, produced by whatever binds keys, pointers or fragments.
pub enum Command {
    /// Move to the first child.
    Descend,
    /// Leave zoom or move to the parent.
    Ascend,
    /// Step right, resolved by overlay and mode.
    StepRight,
    /// Step left, resolved by overlay and mode.
    StepLeft,
    /// Enter or leave zoom.
    ToggleZoom,
    /// Next node in whole-tree order.
    LinearForward,
    /// Retrace the last linear step, or the previous node in whole-tree order.
    LinearBackward,
    /// Highlight the previous derivation entry.
    LinkPrev,
    /// Highlight the next derivation entry.
    LinkNext,
    /// Open the highlighted derivation entry.
    FollowLink,
    /// Activate the node whose heading has this anchor.
    JumpTo(String),
    /// Activate a node picked on the minimap.
    SelectNode(NodeId),
    /// Show the next or previous presentation.
    SwitchPresentation {
        /// Direction of the cycle.
        forward: bool,
    },
    /// Open an overlay, or close it if it is the one open.
    ToggleOverlay(Overlay),
    /// Close whatever overlay is open.
    CloseOverlay,
    /// Turn linear stepping on or off.
    SetLinear(bool),
}

#[must_use]
/// Moves to the first child, unless zoomed or childless.
pub fn descend(forest: &Forest, cursor: Cursor) -> Cursor {
    if cursor.zoom().is_some() {
        return cursor;
    }
    match forest.node(cursor.node).children.first() {
        Some(child) => cursor.moved_to(*child, None),
        None => cursor,
    }
}

#[must_use]
/// Leaves zoom on a container, otherwise moves to the parent.
pub fn ascend(forest: &Forest, cursor: Cursor) -> Cursor {
    let node = forest.node(cursor.node);
    if cursor.zoom().is_some() && node.is_container() {
        return toggle_zoom(forest, cursor);
    }
    match node.parent {
        Some(parent) => cursor.moved_to(parent, None),
        None => cursor,
    }
}

#[must_use]
/// Zooms into the first content item, or back out to the derivation.
///
/// Leaves cannot zoom out because they have no derivation to return to.
pub fn toggle_zoom(forest: &Forest, cursor: Cursor) -> Cursor {
    let node = forest.node(cursor.node);
    if node.content.is_empty() {
        return cursor;
    }
    match cursor.zoom() {
        None => cursor.moved_to(cursor.node, Some(0)),
        Some(_) if node.is_container() => cursor.moved_to(cursor.node, None),
        Some(_) => cursor,
    }
}

#[must_use]
/// Steps through content while zoomed, spilling over into leaf siblings.
///
/// Past either end of a leaf's content the step lands on the neighbouring sibling: at its first
/// item going right, at its last item going left. A sibling that is a container is shown in its
/// derivation view.
pub fn shift_zoom(forest: &Forest, cursor: Cursor, direction: Direction) -> Cursor {
    let node = forest.node(cursor.node);
    let index = cursor.zoom().unwrap_or(0);
    let target = match direction {
        Direction::Right => index.checked_add(1),
        Direction::Left => index.checked_sub(1),
    };
    if let Some(target) = target.filter(|target| *target < node.content.len()) {
        return cursor.moved_to(cursor.node, Some(target));
    }
    if node.is_container() {
        return cursor;
    }

    let (sibling, entry) = match direction {
        Direction::Right => (node.right_sibling, 0),
        Direction::Left => (
            node.left_sibling,
            node.left_sibling.map_or(0, |left| {
                forest.node(left).content.len().saturating_sub(1)
            }),
        ),
    };
    match sibling {
        Some(sibling) if forest.node(sibling).is_container() => cursor.moved_to(sibling, None),
        Some(sibling) => cursor.moved_to(sibling, Some(entry)),
        None => cursor,
    }
}

/// Moves to the next or previous container sibling in the derivation view.
fn sibling_step(forest: &Forest, cursor: Cursor, direction: Direction) -> Cursor {
    let target = match direction {
        Direction::Right => next_sibling(forest, cursor.node),
        Direction::Left => prev_sibling(forest, cursor.node),
    };
    target.map_or(cursor, |target| cursor.moved_to(target, None))
}

#[must_use]
/// Sideways step, resolved in order: minimap fallback, linear mode, zoom, container sibling.
pub fn step(forest: &Forest, cursor: Cursor, direction: Direction) -> Cursor {
    let node = forest.node(cursor.node);
    let neighbour = match direction {
        Direction::Right => node.right_sibling,
        Direction::Left => node.left_sibling,
    };
    if cursor.overlay == Overlay::Minimap && neighbour.is_none() {
        return linear(forest, cursor, direction);
    }
    match cursor.mode {
        Mode::Linear { .. } => linear(forest, cursor, direction),
        Mode::Zoomed { .. } => shift_zoom(forest, cursor, direction),
        Mode::Hierarchical => sibling_step(forest, cursor, direction),
    }
}

#[must_use]
/// Linear step in either direction.
pub fn linear(forest: &Forest, cursor: Cursor, direction: Direction) -> Cursor {
    match direction {
        Direction::Right => linear_forward(forest, cursor),
        Direction::Left => linear_backward(forest, cursor),
    }
}

#[must_use]
/// Next node in whole-tree order, leaves included.
///
/// In the derivation view: first child, else right sibling, else parent. While zoomed the
/// content is stepped through first; a container then continues into its children, and a
/// last leaf climbs to its parent and takes the parent's next container sibling. The position
/// before the step is remembered for [`linear_backward`].
pub fn linear_forward(forest: &Forest, cursor: Cursor) -> Cursor {
    let node = forest.node(cursor.node);
    let mut next = if cursor.zoom().is_some() {
        let shifted = shift_zoom(forest, cursor, Direction::Right);
        if !shifted.same_place(&cursor) {
            shifted
        } else if let Some(child) = node.children.first() {
            cursor.moved_to(*child, None)
        } else if node.right_sibling.is_none() {
            sibling_step(forest, ascend(forest, cursor), Direction::Right)
        } else {
            cursor
        }
    } else if let Some(child) = node.children.first() {
        cursor.moved_to(*child, None)
    } else if let Some(sibling) = node.right_sibling {
        cursor.moved_to(sibling, None)
    } else {
        ascend(forest, cursor)
    };

    if !next.same_place(&cursor) {
        next.previous = Some(cursor.position());
    }
    next
}

#[must_use]
/// Retraces the last linear step, or finds the previous node structurally.
///
/// A remembered position on another node is restored exactly, content index included.
/// Otherwise, in the derivation view: last child, else left sibling, else parent. While zoomed
/// the content is stepped back through; a first leaf climbs to the nearest ancestor with a left
/// sibling and takes its previous container sibling. When the cursor moves the new position is
/// remembered, so two backward steps in a row never replay the same position.
pub fn linear_backward(forest: &Forest, cursor: Cursor) -> Cursor {
    let node = forest.node(cursor.node);
    let replay = cursor
        .previous
        .filter(|previous| previous.node != cursor.node);

    let mut next = if let Some(previous) = replay {
        Cursor {
            presentation: forest
                .presentation_of(previous.node)
                .unwrap_or(cursor.presentation),
            ..cursor.moved_to(previous.node, previous.zoom)
        }
    } else if cursor.zoom().is_some() {
        if node.children.is_empty() && node.left_sibling.is_none() {
            let mut up = ascend(forest, cursor);
            while forest.node(up.node).left_sibling.is_none()
                && forest.node(up.node).parent.is_some()
            {
                up = ascend(forest, up);
            }
            sibling_step(forest, up, Direction::Left)
        } else {
            shift_zoom(forest, cursor, Direction::Left)
        }
    } else if let Some(last) = node.children.last() {
        cursor.moved_to(*last, None)
    } else if let Some(sibling) = node.left_sibling {
        cursor.moved_to(sibling, None)
    } else {
        ascend(forest, cursor)
    };

    if !next.same_place(&cursor) {
        next.previous = Some(next.position());
    }
    next
}

#[must_use]
/// Activates the first node whose heading has `heading_id`, switching presentation if needed.
///
/// Linear state is kept. The zoom is kept while the target has content at that index, and
/// otherwise dropped to the derivation view.
pub fn jump_to_id(forest: &Forest, cursor: Cursor, heading_id: &str) -> Cursor {
    match search_by_id(forest, heading_id) {
        Some((presentation, node)) => {
            let items = forest.node(node).content.len();
            Cursor {
                presentation,
                ..cursor.moved_to(node, cursor.zoom().filter(|index| *index < items))
            }
        }
        None => cursor,
    }
}

#[must_use]
/// Activates a node picked on the minimap and closes the minimap.
pub fn select_node(forest: &Forest, cursor: Cursor, node: NodeId) -> Cursor {
    match forest.presentation_of(node) {
        Some(presentation) => Cursor {
            presentation,
            overlay: Overlay::None,
            ..cursor.moved_to(node, None)
        },
        None => cursor,
    }
}

#[must_use]
/// Moves the derivation highlight one entry, stopping at either end.
pub fn link_step(forest: &Forest, cursor: Cursor, direction: Direction) -> Cursor {
    let entries = forest
        .node(cursor.node)
        .derivation
        .as_ref()
        .map_or(0, |derivation| derivation.entries.len());
    let target = match direction {
        Direction::Right => cursor.link.checked_add(1),
        Direction::Left => cursor.link.checked_sub(1),
    };
    match target.filter(|target| *target < entries) {
        Some(link) => Cursor { link, ..cursor },
        None => cursor,
    }
}

#[must_use]
/// Opens the highlighted derivation entry, remembering where it came from.
pub fn follow_link(forest: &Forest, cursor: Cursor) -> Cursor {
    let target = forest
        .node(cursor.node)
        .derivation
        .as_ref()
        .and_then(|derivation| derivation.entries.get(cursor.link))
        .map(|entry| entry.child);
    match target {
        Some(child) => Cursor {
            previous: Some(cursor.position()),
            ..cursor.moved_to(child, None)
        },
        None => cursor,
    }
}

#[must_use]
/// Opens `overlay` when nothing is open, closes it when it is the one open.
pub fn toggle_overlay(cursor: Cursor, overlay: Overlay) -> Cursor {
    if cursor.overlay == overlay {
        Cursor {
            overlay: Overlay::None,
            ..cursor
        }
    } else if cursor.overlay == Overlay::None {
        Cursor { overlay, ..cursor }
    } else {
        cursor
    }
}

#[must_use]
/// Applies a command, honouring the open overlay.
///
/// With the minimap open, up and down move and then close it, and sideways steps fall back to
/// linear order at the ends of a sibling row. Settings, help and download suppress navigation
/// entirely. Fragment jumps bypass the overlay rules.
pub fn apply(forest: &Forest, cursor: Cursor, command: &Command) -> Cursor {
    let close = |cursor: Cursor| Cursor {
        overlay: Overlay::None,
        ..cursor
    };

    let next = match (cursor.overlay, command) {
        (_, Command::JumpTo(heading_id)) => jump_to_id(forest, cursor, heading_id),
        (_, Command::CloseOverlay) => close(cursor),
        (_, Command::ToggleOverlay(overlay)) => toggle_overlay(cursor, *overlay),
        (Overlay::None | Overlay::Settings, Command::SetLinear(on)) => Cursor {
            mode: cursor.mode.linear(*on),
            ..cursor
        },
        (Overlay::None | Overlay::Minimap, Command::SwitchPresentation { forward }) => {
            switch_presentation(forest, cursor, *forward)
        }
        (Overlay::Minimap, Command::SelectNode(node)) => select_node(forest, cursor, *node),
        (Overlay::Minimap, Command::Ascend) => close(ascend(forest, cursor)),
        (Overlay::Minimap, Command::Descend) => close(descend(forest, cursor)),
        (Overlay::Minimap, Command::FollowLink) => close(cursor),
        (Overlay::Minimap | Overlay::None, Command::StepRight) => {
            step(forest, cursor, Direction::Right)
        }
        (Overlay::Minimap | Overlay::None, Command::StepLeft) => {
            step(forest, cursor, Direction::Left)
        }
        (Overlay::Minimap, Command::LinearForward) => step(forest, cursor, Direction::Right),
        (Overlay::Minimap, Command::LinearBackward) => step(forest, cursor, Direction::Left),
        (Overlay::None, Command::Descend) => descend(forest, cursor),
        (Overlay::None, Command::Ascend) => ascend(forest, cursor),
        (Overlay::None, Command::ToggleZoom) => toggle_zoom(forest, cursor),
        (Overlay::None, Command::LinearForward) => linear_forward(forest, cursor),
        (Overlay::None, Command::LinearBackward) => linear_backward(forest, cursor),
        (Overlay::None, Command::LinkPrev) => link_step(forest, cursor, Direction::Left),
        (Overlay::None, Command::LinkNext) => link_step(forest, cursor, Direction::Right),
        (Overlay::None, Command::FollowLink) => follow_link(forest, cursor),
        _ => cursor,
    };

    if next == cursor {
        trace!(?command, node = %cursor.node, "command had no effect");
    } else {
        debug!(
            ?command,
            from = %cursor.node,
            to = %next.node,
            mode = ?next.mode,
            overlay = ?next.overlay,
            "applied command"
        );
    }
    next
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which directional controls would currently change the position.
pub struct Affordances {
    /// Step left.
    pub left: bool,
    /// Step right.
    pub right: bool,
    /// Ascend or leave zoom.
    pub up: bool,
    /// Descend.
    pub down: bool,
    /// Enter zoom.
    pub zoom_in: bool,
    /// Leave zoom.
    pub zoom_out: bool,
}

#[must_use]
/// Reports which navigation controls are live for `cursor`.
pub fn affordances(forest: &Forest, cursor: Cursor) -> Affordances {
    let moves = |next: Cursor| !next.same_place(&cursor);
    let zoomed = cursor.zoom().is_some();
    Affordances {
        left: moves(step(forest, cursor, Direction::Left)),
        right: moves(step(forest, cursor, Direction::Right)),
        up: moves(ascend(forest, cursor)),
        down: moves(descend(forest, cursor)),
        zoom_in: !zoomed && moves(toggle_zoom(forest, cursor)),
        zoom_out: zoomed && moves(toggle_zoom(forest, cursor)),
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
