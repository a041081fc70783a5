//! User interface rendering module
//!
//! Organized into submodules:
//! - `header` - title bar rendering
//! - `options` - the four constrained choice rows
//! - `command_panel` - live command preview with the copy indicator
//! - `help_overlay` - keybinding help

mod command_panel;
mod header;
mod help_overlay;
mod options;

use crate::app::AppState;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Render one full frame from the current state.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Length(10), // choice rows
            Constraint::Min(6),     // command preview
            Constraint::Length(1),  // status line
        ])
        .split(f.area());

    header::render_header(f, chunks[0]);
    options::render_options(f, chunks[1], state);
    command_panel::render_command_panel(f, chunks[2], state);
    header::render_status_line(f, chunks[3], state);

    if state.help_visible {
        help_overlay::render_help_overlay(f);
    }
}
