//! Help overlay
//!
//! A centered floating window listing the keybindings.

use crate::theme::{Colors, Styles};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/↓, k/j", "move between fields"),
    ("←/→, h/l", "cycle the focused field's value"),
    ("1-5", "jump to a value directly"),
    ("c, Enter", "copy the command to the clipboard"),
    ("?", "toggle this help"),
    ("q, Esc", "quit"),
];

/// Compute a centered rect covering the given percentage of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

pub fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled("  Keybindings  ", Styles::title())),
        Line::from(""),
    ];
    for (keys, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", keys),
                Style::default().fg(Colors::PRIMARY),
            ),
            Span::styled(*description, Style::default().fg(Colors::FG_PRIMARY)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Colors::FG_MUTED),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
