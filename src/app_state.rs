//! The presenter state bridging the navigation engine and the terminal front end.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! navigates. `AppState` owns the forest and the one cursor over it, feeds every command
//! through [`nav::apply`], and keeps the location fragment in step with the cursor so the
//! current position can always be shown, copied or restored.
//!
//! The minimap keeps its own focus, separate from the active node, so the user can browse the
//! diagram with `Tab` and commit with `Enter` without moving the slides underneath.

use crate::config::Config;
use crate::error::Result;
use crate::export::{self, ExportFormat, MapNode};
use crate::fragment::{self, Fragment};
use crate::nav::{self, Command, Cursor, Overlay};
use crate::node::{Forest, NodeId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything the presenter needs between key presses.
pub struct AppState {
    /// The slides being presented.
    pub forest: Forest,
    /// Current navigation state.
    pub cursor: Cursor,
    /// Fragment encoding the cursor, rewritten after every move.
    pub fragment: Fragment,
    /// Node highlighted on the minimap.
    pub minimap_focus: NodeId,
    /// One-line status message shown in the footer.
    pub message: Option<String>,
    /// Maximum width of slide body text.
    pub wrap_width: usize,
    /// Directory exports are written to.
    pub output_dir: PathBuf,
}

impl AppState {
    #[must_use]
    /// Starts on the first presentation root, or `None` for an empty forest.
    pub fn new(forest: Forest, config: &Config, output_dir: &Path) -> Option<Self> {
        let mut cursor = Cursor::start(&forest)?;
        cursor.mode = cursor.mode.linear(config.linear_navigation);
        let fragment = Fragment::of(&forest, &cursor);
        Some(Self {
            minimap_focus: cursor.node,
            forest,
            cursor,
            fragment,
            message: None,
            wrap_width: config.wrap_width,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Runs one command. Returns whether the cursor changed.
    pub fn dispatch(&mut self, command: &Command) -> bool {
        let next = nav::apply(&self.forest, self.cursor, command);
        self.commit(next)
    }

    /// Applies a fragment handed in from outside (start-up or a pasted location).
    ///
    /// An undecodable fragment or unknown heading leaves the cursor alone and reports it in
    /// the status line.
    pub fn apply_fragment(&mut self, raw: &str) -> bool {
        let Some(fragment) = Fragment::parse(raw) else {
            self.message = Some(format!("Invalid location: {raw}"));
            return false;
        };
        if fragment == self.fragment {
            return false;
        }
        let next = fragment::apply_fragment(&self.forest, self.cursor, &fragment);
        if next == self.cursor {
            self.message = Some(format!("No slide at {fragment}"));
            return false;
        }
        self.commit(next)
    }

    fn commit(&mut self, next: Cursor) -> bool {
        if next == self.cursor {
            return false;
        }
        if next.overlay == Overlay::Minimap && self.cursor.overlay != Overlay::Minimap {
            self.minimap_focus = next.node;
        }
        self.cursor = next;
        self.fragment = Fragment::of(&self.forest, &self.cursor);
        true
    }

    #[must_use]
    /// Minimap diagram of the presentation being shown.
    pub fn minimap(&self) -> Option<MapNode> {
        self.forest
            .root(self.cursor.presentation)
            .map(|root| export::minimap(&self.forest, root))
    }

    #[must_use]
    /// Minimap boxes in the order they are drawn, with their depth.
    pub fn minimap_rows(&self) -> Vec<(usize, NodeId)> {
        fn flatten(map: &MapNode, depth: usize, rows: &mut Vec<(usize, NodeId)>) {
            rows.push((depth, map.key));
            for child in &map.children {
                flatten(child, depth + 1, rows);
            }
        }
        let mut rows = Vec::new();
        if let Some(map) = self.minimap() {
            flatten(&map, 0, &mut rows);
        }
        rows
    }

    /// Moves the minimap highlight to the next or previous box, wrapping at the ends.
    pub fn move_minimap_focus(&mut self, forward: bool) {
        let rows = self.minimap_rows();
        if rows.is_empty() {
            return;
        }
        let current = rows
            .iter()
            .position(|(_, id)| *id == self.minimap_focus)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % rows.len()
        } else {
            (current + rows.len() - 1) % rows.len()
        };
        self.minimap_focus = rows[next].1;
    }

    /// Activates the highlighted minimap box.
    pub fn select_minimap_focus(&mut self) -> bool {
        let moved = self.dispatch(&Command::SelectNode(self.minimap_focus));
        if !moved && self.cursor.overlay == Overlay::Minimap {
            return self.dispatch(&Command::CloseOverlay);
        }
        moved
    }

    /// Writes the current presentation in `format` to the output directory.
    ///
    /// Closes the download overlay and reports the outcome in the status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export(&mut self, format: ExportFormat) -> Result<PathBuf> {
        self.dispatch(&Command::CloseOverlay);
        let Some(root) = self.forest.root(self.cursor.presentation) else {
            return Ok(self.output_dir.clone());
        };
        let path = self.output_dir.join(format.file_name());
        let rendered = format.render(&self.forest, root);
        match fs::write(&path, rendered) {
            Ok(()) => {
                info!(path = %path.display(), ?format, "exported presentation");
                self.message = Some(format!("Exported to {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "export failed");
                self.message = Some(format!("Export failed: {e}"));
                Err(e.into())
            }
        }
    }

    #[must_use]
    /// Breadcrumb for the active node: root-to-node titles and the content count.
    pub fn breadcrumb(&self) -> (Vec<&str>, usize) {
        let titles = self
            .forest
            .breadcrumb(self.cursor.node)
            .into_iter()
            .map(|heading| heading.text.as_str())
            .collect();
        (titles, self.forest.node(self.cursor.node).content.len())
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
