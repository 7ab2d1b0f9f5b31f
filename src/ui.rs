//! The UI renders the presenter state into something visible.
//!
//! The slide view is a breadcrumb bar, the slide body (derivation list or one zoomed content
//! item) and a status bar with the fragment, live navigation arrows and any message. Overlays
//! are drawn as centred popups over the slide: the minimap uses box-drawing characters like a
//! file tree.

use crate::app_state::AppState;
use crate::config::Config;
use crate::nav::{affordances, Affordances, Overlay};
use crate::section::BlockKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const HELP: &[(&str, &str)] = &[
    ("Space", "Zoom into content / back to summary"),
    ("h / l", "Previous / next slide at this level"),
    ("j / k", "Descend / ascend"),
    ("← / →", "Linear backward / forward"),
    ("↑ / ↓", "Move link highlight"),
    ("Enter", "Follow highlighted link"),
    ("n / N", "Next / previous presentation"),
    ("m", "Minimap (Tab to browse, Enter to open)"),
    ("s", "Settings"),
    ("d", "Download"),
    ("?", "This help"),
    ("Esc", "Close overlay"),
    ("q", "Quit"),
];

/// Renders the slide and any open overlay.
pub fn draw(f: &mut Frame, app: &AppState, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(0),    // Slide
            Constraint::Length(3), // Status
        ])
        .split(f.area());

    draw_breadcrumb(f, app, chunks[0]);
    draw_slide(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);

    match app.cursor.overlay {
        Overlay::None => {}
        Overlay::Minimap => draw_minimap(f, app),
        Overlay::Settings => draw_settings(f, app, cfg),
        Overlay::Help => draw_help(f),
        Overlay::Download => draw_download(f),
    }
}

fn draw_breadcrumb(f: &mut Frame, app: &AppState, area: Rect) {
    let (titles, contents) = app.breadcrumb();
    let mut spans = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        if i + 1 == titles.len() {
            spans.push(Span::styled(
                format!("{title} ({contents})"),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                (*title).to_string(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(" > "));
        }
    }
    let title = if app.forest.len() > 1 {
        format!(
            "Presentation {}/{}",
            app.cursor.presentation + 1,
            app.forest.len()
        )
    } else {
        "Navigation".to_string()
    };
    let breadcrumb =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(breadcrumb, area);
}

fn draw_slide(f: &mut Frame, app: &AppState, area: Rect) {
    let node = app.forest.node(app.cursor.node);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            node.heading.text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = u16::try_from(app.wrap_width).unwrap_or(u16::MAX);
    let body = Rect {
        width: inner.width.min(width),
        ..inner
    };

    if let Some(index) = app.cursor.zoom() {
        let Some(item) = app.forest.content_block(app.cursor.node, index) else {
            return;
        };
        let style = match item.kind {
            BlockKind::Code => Style::default().fg(Color::Yellow),
            BlockKind::Quote => Style::default().add_modifier(Modifier::ITALIC),
            _ => Style::default(),
        };
        let text = item
            .text
            .lines()
            .map(|line| Line::styled(line.to_string(), style))
            .collect::<Vec<_>>();
        let footer = Line::styled(
            format!("{}/{}", index + 1, node.content.len()),
            Style::default().fg(Color::DarkGray),
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(body);
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), chunks[0]);
        f.render_widget(Paragraph::new(footer), chunks[1]);
        return;
    }

    match &node.derivation {
        Some(derivation) => {
            let mut items = Vec::new();
            if let Some(lead) = &derivation.lead {
                items.push(ListItem::new(Line::styled(
                    lead.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            for (i, entry) in derivation.entries.iter().enumerate() {
                let child = app.forest.node(entry.child);
                let marker = if child.is_container() { "▸" } else { "•" };
                let style = if i == app.cursor.link {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                items.push(ListItem::new(format!("{marker} {}", entry.text)).style(style));
            }
            f.render_widget(List::new(items), body);
        }
        None => {
            let hint = if node.content.is_empty() {
                "(empty slide)"
            } else {
                "Press Space to show the content"
            };
            f.render_widget(
                Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
                body,
            );
        }
    }
}

fn arrow(symbol: &str, live: bool) -> Span<'static> {
    let style = if live {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(symbol.to_string(), style)
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let Affordances {
        left,
        right,
        up,
        down,
        zoom_in,
        zoom_out,
    } = affordances(&app.forest, app.cursor);

    let mut spans = vec![
        arrow("◀", left),
        Span::raw(" "),
        arrow("▲", up),
        Span::raw(" "),
        arrow("▼", down),
        Span::raw(" "),
        arrow("▶", right),
        Span::raw("  "),
        arrow("+", zoom_in),
        arrow("-", zoom_out),
        Span::raw("  "),
        Span::styled(
            app.fragment.to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if app.cursor.mode.is_linear() {
        spans.push(Span::styled(
            "  [linear]",
            Style::default().fg(Color::Yellow),
        ));
    }
    let text = match &app.message {
        Some(msg) => format!("  {msg}"),
        None => "  ?: Help | q: Quit".to_string(),
    };
    spans.push(Span::raw(text));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

/// Centred popup area taking the given percentages of the screen.
fn popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(level: usize, is_last: bool, parent_states: &[bool]) -> String {
    if level == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Vertical lines for ancestors that still have siblings below
    for i in 0..level.saturating_sub(1) {
        if parent_states.get(i).copied().unwrap_or(false) {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

fn draw_minimap(f: &mut Frame, app: &AppState) {
    let area = popup(f.area(), 60, 70);
    let rows = app.minimap_rows();

    // A row is last at its level if no later row at the same depth precedes a shallower one.
    let is_last: Vec<bool> = rows
        .iter()
        .enumerate()
        .map(|(i, (depth, _))| {
            !rows[i + 1..]
                .iter()
                .take_while(|(later, _)| later >= depth)
                .any(|(later, _)| later == depth)
        })
        .collect();

    let mut parent_has_siblings: Vec<bool> = Vec::new();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (depth, id))| {
            parent_has_siblings.truncate(*depth);
            while parent_has_siblings.len() < *depth {
                parent_has_siblings.push(false);
            }
            if let Some(last) = parent_has_siblings.last_mut() {
                *last = !is_last[i];
            }
            let prefix = get_tree_prefix(*depth, is_last[i], &parent_has_siblings);

            let node = app.forest.node(*id);
            let mut style = if node.is_container() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            if *id == app.cursor.node {
                style = style.add_modifier(Modifier::BOLD);
            }
            if *id == app.minimap_focus {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(node.heading.text.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Minimap (Tab: browse | Enter: open | Esc: close)"),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

fn draw_settings(f: &mut Frame, app: &AppState, cfg: &Config) {
    let area = popup(f.area(), 50, 30);
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from(format!(
            "{} l: Linear navigation",
            check(app.cursor.mode.is_linear())
        )),
        Line::from(format!("    Wrap width: {}", app.wrap_width)),
        Line::from(format!("    Untitled heading: {}", cfg.untitled_title)),
    ];
    let settings = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Settings (Esc: close)"),
    );
    f.render_widget(Clear, area);
    f.render_widget(settings, area);
}

fn draw_help(f: &mut Frame) {
    let area = popup(f.area(), 60, 70);
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:<8}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help (Esc: close)"),
    );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn draw_download(f: &mut Frame) {
    let area = popup(f.area(), 50, 30);
    let lines = vec![
        Line::from("b: Beamer slides (.tex)"),
        Line::from("t: HTML page (.html)"),
    ];
    let download = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Download (Esc: close)"),
    );
    f.render_widget(Clear, area);
    f.render_widget(download, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
