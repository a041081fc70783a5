//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles so the widgets stay
//! visually consistent.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary accent color, used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color, used for emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/locked badge color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Success feedback (copied indicator)
    pub const SUCCESS: Color = Color::Green;

    /// Warning feedback (rejected edits)
    pub const WARNING: Color = Color::Yellow;

    /// Selected badge background
    pub const SELECTED_BG: Color = Color::Cyan;

    /// Selected badge text, for contrast on the cyan background
    pub const SELECTED_FG: Color = Color::Black;

    /// Focused row border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Section/block title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// A selected choice badge
    pub fn badge_selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// An available but unselected choice badge
    pub fn badge() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// A constraint-locked choice badge
    pub fn badge_locked() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::DIM)
    }

    /// Monospace command text
    pub fn command() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Status line for rejected edits and copy feedback
    pub fn status() -> Style {
        Style::default().fg(Colors::WARNING)
    }
}
