//! Read-only projections of a presentation tree.
//!
//! [`minimap`] mirrors the whole tree for the overview diagram. [`walk_slides`] visits the
//! derivation-bearing nodes depth-first, the order in which slide and page exporters emit
//! frames; leaves are skipped because their content only exists inside a zoomed slide.

pub mod beamer;
pub mod html;

use crate::node::{Forest, NodeId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One box of the minimap diagram.
pub struct MapNode {
    /// Heading text.
    pub label: String,
    /// Node the box selects.
    pub key: NodeId,
    /// Boxes of the children.
    pub children: Vec<MapNode>,
}

#[must_use]
/// Projects the tree under `root` for the minimap, every node included.
pub fn minimap(forest: &Forest, root: NodeId) -> MapNode {
    let node = forest.node(root);
    MapNode {
        label: node.heading.text.clone(),
        key: node.id,
        children: node
            .children
            .iter()
            .map(|child| minimap(forest, *child))
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A derivation-bearing node as seen by an exporter.
pub struct Slide<'a> {
    /// Whether this is the first slide of the walk (no page break before it).
    pub first: bool,
    /// Heading text.
    pub heading: &'a str,
    /// Derivation payload: lead paragraph then child headings.
    pub items: Vec<&'a str>,
}

/// Calls `visit` once per derivation-bearing node under `root`, depth-first.
pub fn walk_slides<'a>(forest: &'a Forest, root: NodeId, mut visit: impl FnMut(Slide<'a>)) {
    let mut first = true;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = forest.node(id);
        let Some(derivation) = &node.derivation else {
            continue;
        };
        visit(Slide {
            first,
            heading: &node.heading.text,
            items: derivation.items().collect(),
        });
        first = false;
        stack.extend(node.children.iter().rev().copied());
    }
}

/// Receives slides from [`walk_slides`] and renders a whole document.
pub trait SlideSink {
    /// Text emitted before the first slide.
    fn begin(&mut self, title: &str);
    /// Marks a page or frame boundary; called before every slide but the first.
    fn page_break(&mut self);
    /// Renders one slide.
    fn slide(&mut self, heading: &str, items: &[&str]);
    /// Closes the document and returns it.
    fn finish(self) -> String;
}

#[must_use]
/// Renders the presentation under `root` through `sink`.
pub fn render<S: SlideSink>(forest: &Forest, root: NodeId, mut sink: S) -> String {
    sink.begin(&forest.node(root).heading.text);
    walk_slides(forest, root, |slide| {
        if !slide.first {
            sink.page_break();
        }
        sink.slide(slide.heading, &slide.items);
    });
    sink.finish()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
/// Export targets offered by the presenter and the CLI.
pub enum ExportFormat {
    /// LaTeX beamer slides.
    Beamer,
    /// Standalone HTML page.
    Html,
}

impl ExportFormat {
    #[must_use]
    /// Renders the presentation under `root` in this format.
    pub fn render(self, forest: &Forest, root: NodeId) -> String {
        match self {
            Self::Beamer => render(forest, root, beamer::BeamerSink::default()),
            Self::Html => render(forest, root, html::HtmlSink::default()),
        }
    }

    #[must_use]
    /// Default output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Beamer => "presentation.tex",
            Self::Html => "presentation.html",
        }
    }
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
