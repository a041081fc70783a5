//! Command preview panel
//!
//! Shows the rendered install command for the current configuration and
//! the copy affordance. Re-renders on every frame; `render` is pure and
//! cheap enough that no caching is warranted.

use crate::app::AppState;
use crate::command;
use crate::theme::{Colors, Styles};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_command_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let command_text = command::render(&state.config);

    let mut lines: Vec<Line> = command_text
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Styles::command())))
        .collect();

    lines.push(Line::from(""));
    lines.push(if state.copy_indicator_active() {
        Line::from(Span::styled(
            "✓ copied",
            Style::default().fg(Colors::SUCCESS),
        ))
    } else {
        Line::from(Span::styled(
            "press c or Enter to copy",
            Style::default().fg(Colors::FG_MUTED),
        ))
    });
    lines.push(Line::from(Span::styled(
        "NOTE: vLLM recommends Python 3.11 or later for best performance.",
        Style::default().fg(Colors::FG_MUTED),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Run this command ")
        .border_style(Style::default().fg(Colors::BORDER_INACTIVE));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
