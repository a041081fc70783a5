//! Header and status line rendering

use crate::app::AppState;
use crate::theme::{Colors, Styles};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the title bar.
pub fn render_header(f: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled("vLLM", Styles::title()),
        Span::styled(
            " Quickstart · pick a configuration, get the install command",
            Style::default().fg(Colors::FG_SECONDARY),
        ),
    ]);

    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Render the bottom status/hint line.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.status_message.is_empty() {
        Line::from(Span::styled(
            " ↑/↓ field · ←/→ value · c copy · ? help · q quit",
            Style::default().fg(Colors::FG_MUTED),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", state.status_message),
            Styles::status(),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
