//! Application state definitions
//!
//! All TUI state lives in [`AppState`]. The event loop is single-threaded
//! and synchronous, so the state is plainly owned; edits are serialized by
//! the loop itself and no locking is needed.

use crate::config::InstallConfig;
use crate::resolver::Edit;
use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

/// How long the "copied" indicator stays lit after a successful copy.
pub const COPY_FLASH: Duration = Duration::from_secs(2);

/// The four choice rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRow {
    Build,
    Hardware,
    Package,
    Cuda,
}

impl FieldRow {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Hardware => "Hardware",
            Self::Package => "Package",
            Self::Cuda => "CUDA Version",
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// The owned configuration; mutated only through the resolver.
    pub config: InstallConfig,
    /// Which choice row has keyboard focus.
    pub focused: FieldRow,
    /// Status line feedback (rejection reasons, copy results).
    pub status_message: String,
    /// When the last successful copy happened; drives the indicator.
    pub copied_at: Option<Instant>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Exit flag set by the q key.
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: InstallConfig::default(),
            focused: FieldRow::Build,
            status_message: "Pick a configuration, then press c to copy the command".to_string(),
            copied_at: None,
            help_visible: false,
            should_quit: false,
        }
    }
}

/// Pick the neighbor of `current` in the variant list, wrapping around.
fn step<T>(current: T, forward: bool) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let variants: Vec<T> = T::iter().collect();
    let index = variants
        .iter()
        .position(|v| *v == current)
        .unwrap_or_default();
    let next = if forward {
        (index + 1) % variants.len()
    } else {
        (index + variants.len() - 1) % variants.len()
    };
    variants[next]
}

/// Pick the `n`th variant, ignoring out-of-range indexes.
fn nth<T>(n: usize) -> Option<T>
where
    T: IntoEnumIterator,
{
    T::iter().nth(n)
}

impl AppState {
    /// Rows currently shown. The CUDA row only exists for NVIDIA hardware;
    /// this is presentation, the resolver never guards on it.
    pub fn visible_rows(&self) -> Vec<FieldRow> {
        let mut rows = vec![FieldRow::Build, FieldRow::Hardware, FieldRow::Package];
        if self.config.cuda_visible() {
            rows.push(FieldRow::Cuda);
        }
        rows
    }

    /// Move row focus up or down within the visible rows.
    pub fn focus_move(&mut self, down: bool) {
        let rows = self.visible_rows();
        let index = rows
            .iter()
            .position(|r| *r == self.focused)
            .unwrap_or_default();
        let next = if down {
            (index + 1).min(rows.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.focused = rows[next];
    }

    /// Cycle the focused row's value left or right through the resolver.
    pub fn cycle_focused(&mut self, forward: bool) {
        let edit = match self.focused {
            FieldRow::Build => Edit::Build(step(self.config.build, forward)),
            FieldRow::Hardware => Edit::Hardware(step(self.config.hardware, forward)),
            FieldRow::Package => Edit::Package(step(self.config.package, forward)),
            FieldRow::Cuda => Edit::Cuda(step(self.config.cuda, forward)),
        };
        self.apply(edit);
    }

    /// Jump the focused row to its `n`th value (digit-key shortcut).
    pub fn select_nth(&mut self, n: usize) {
        let edit = match self.focused {
            FieldRow::Build => nth::<BuildChannel>(n).map(Edit::Build),
            FieldRow::Hardware => nth::<Hardware>(n).map(Edit::Hardware),
            FieldRow::Package => nth::<PackageMethod>(n).map(Edit::Package),
            FieldRow::Cuda => nth::<CudaVersion>(n).map(Edit::Cuda),
        };
        if let Some(edit) = edit {
            self.apply(edit);
        }
    }

    /// Route an edit through the resolver and surface the outcome in the
    /// status line. A rejection leaves the config, and thus the rendered
    /// command, untouched.
    pub fn apply(&mut self, edit: Edit) {
        match self.config.apply_edit(edit) {
            Ok(_) => {
                self.status_message.clear();
                // Hardware may have been forced off a row that had focus.
                if self.focused == FieldRow::Cuda && !self.config.cuda_visible() {
                    self.focused = FieldRow::Package;
                }
            }
            Err(reason) => {
                self.status_message = reason.to_string();
            }
        }
    }

    /// Record a successful copy; restarts the indicator window.
    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
        self.status_message = "Command copied to clipboard".to_string();
    }

    /// Expire the copy indicator. Called every loop tick; the window dies
    /// with the state, so nothing outlives the session.
    pub fn tick(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPY_FLASH {
                self.copied_at = None;
                if self.status_message == "Command copied to clipboard" {
                    self.status_message.clear();
                }
            }
        }
    }

    /// Whether the "copied" checkmark should be drawn.
    pub fn copy_indicator_active(&self) -> bool {
        self.copied_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuda_row_disappears_off_nvidia() {
        let mut state = AppState::default();
        assert_eq!(state.visible_rows().len(), 4);
        state.apply(Edit::Hardware(Hardware::Amd));
        assert_eq!(state.visible_rows().len(), 3);
    }

    #[test]
    fn test_focus_leaves_hidden_cuda_row() {
        let mut state = AppState::default();
        state.focused = FieldRow::Cuda;
        state.apply(Edit::Hardware(Hardware::Tpu));
        assert_eq!(state.focused, FieldRow::Package);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut state = AppState::default();
        state.focused = FieldRow::Build;
        state.cycle_focused(true);
        assert_eq!(state.config.build, BuildChannel::Nightly);
        state.cycle_focused(true);
        assert_eq!(state.config.build, BuildChannel::Stable);
    }

    #[test]
    fn test_rejected_cycle_reports_and_keeps_config() {
        let mut state = AppState::default();
        state.apply(Edit::Package(PackageMethod::Docker));
        let before = state.config;
        state.focused = FieldRow::Hardware;
        state.cycle_focused(true);
        assert_eq!(state.config, before);
        assert!(!state.status_message.is_empty());
    }

    #[test]
    fn test_select_nth_out_of_range_is_ignored() {
        let mut state = AppState::default();
        let before = state.config;
        state.focused = FieldRow::Hardware;
        state.select_nth(9);
        assert_eq!(state.config, before);
    }

    #[test]
    fn test_copy_indicator_lifecycle() {
        let mut state = AppState::default();
        assert!(!state.copy_indicator_active());
        state.mark_copied();
        assert!(state.copy_indicator_active());
        state.tick();
        // Still inside the 2s window.
        assert!(state.copy_indicator_active());
        state.copied_at = Some(Instant::now() - COPY_FLASH);
        state.tick();
        assert!(!state.copy_indicator_active());
    }
}
