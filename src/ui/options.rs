//! Choice row rendering
//!
//! Each field is a row of badges. The selected value gets the highlight
//! style, values the resolver would refuse are dimmed, and the CUDA row
//! disappears entirely for non-NVIDIA hardware.

use crate::app::{AppState, FieldRow};
use crate::command::PINNED_RELEASE;
use crate::config::InstallConfig;
use crate::theme::{Colors, Styles};
use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use strum::IntoEnumIterator;

/// One renderable badge.
struct Badge {
    label: String,
    selected: bool,
    locked: bool,
}

impl Badge {
    fn spans(&self) -> Vec<Span<'static>> {
        let style = if self.selected {
            Styles::badge_selected()
        } else if self.locked {
            Styles::badge_locked()
        } else {
            Styles::badge()
        };
        vec![
            Span::styled(format!(" {} ", self.label), style),
            Span::raw(" "),
        ]
    }
}

fn build_badges(config: &InstallConfig) -> Vec<Badge> {
    BuildChannel::iter()
        .map(|channel| Badge {
            // Match the widget labels: the stable badge carries the pin.
            label: match channel {
                BuildChannel::Stable => format!("Stable ({PINNED_RELEASE})"),
                BuildChannel::Nightly => "Preview (Nightly)".to_string(),
            },
            selected: config.build == channel,
            locked: config.channel_locked(channel),
        })
        .collect()
}

fn hardware_badges(config: &InstallConfig) -> Vec<Badge> {
    Hardware::iter()
        .map(|hardware| Badge {
            label: hardware.to_string(),
            selected: config.hardware == hardware,
            locked: config.hardware_locked() && config.hardware != hardware,
        })
        .collect()
}

fn package_badges(config: &InstallConfig) -> Vec<Badge> {
    PackageMethod::iter()
        .map(|package| Badge {
            label: package.to_string(),
            selected: config.package == package,
            locked: false,
        })
        .collect()
}

fn cuda_badges(config: &InstallConfig) -> Vec<Badge> {
    CudaVersion::iter()
        .map(|cuda| Badge {
            label: cuda.to_string(),
            selected: config.cuda == cuda,
            locked: config.cuda_locked(cuda),
        })
        .collect()
}

fn row_line(row: FieldRow, badges: &[Badge], focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Colors::SECONDARY)
    } else {
        Style::default().fg(Colors::FG_PRIMARY)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(Colors::SECONDARY)),
        Span::styled(format!("{:<14}", row.label()), label_style),
    ];
    for badge in badges {
        spans.extend(badge.spans());
    }
    Line::from(spans)
}

/// Render all visible choice rows.
pub fn render_options(f: &mut Frame, area: Rect, state: &AppState) {
    let config = &state.config;
    let mut lines = Vec::new();

    for row in state.visible_rows() {
        let badges = match row {
            FieldRow::Build => build_badges(config),
            FieldRow::Hardware => hardware_badges(config),
            FieldRow::Package => package_badges(config),
            FieldRow::Cuda => cuda_badges(config),
        };
        lines.push(row_line(row, &badges, state.focused == row));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Configuration ")
        .border_style(Style::default().fg(Colors::BORDER_ACTIVE));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
