//! Application module
//!
//! Contains the main event loop and keyboard handling. Every interaction
//! runs to completion synchronously: one key event, at most one resolver
//! edit, then a redraw. The clipboard write is the only side effect that
//! leaves the process.

mod state;

pub use state::{AppState, FieldRow, COPY_FLASH};

use crate::clipboard::Clipboard;
use crate::command;
use crate::ui;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{info, warn};

/// Main application struct.
pub struct App {
    state: AppState,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state: AppState::default(),
            clipboard,
        }
    }

    /// Read-only view of the state, for tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> crate::error::Result<()> {
        info!("starting configurator loop");

        loop {
            self.state.tick();

            terminal.draw(|f| ui::render(f, &self.state))?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    self.handle_key_event(key_event);
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one keyboard event. Public so tests can drive the app
    /// without a terminal.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Windows terminals deliver both press and release events.
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.state.help_visible = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.focus_move(false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.focus_move(true);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.cycle_focused(false);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.cycle_focused(true);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.state.select_nth(index);
            }
            KeyCode::Enter | KeyCode::Char('c') => {
                self.copy_command();
            }
            _ => {}
        }
    }

    /// Copy the rendered command. Failure is logged and otherwise ignored;
    /// the indicator just stays dark.
    fn copy_command(&mut self) {
        let text = command::render(&self.state.config);
        match self.clipboard.copy(&text) {
            Ok(()) => self.state.mark_copied(),
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                self.state.status_message = "Clipboard unavailable in this terminal".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::types::{BuildChannel, Hardware, PackageMethod};
    use crate::clipboard::ClipboardError;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Clipboard handle the test can still read after handing it to the app.
    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<MemoryClipboard>>);

    impl Clipboard for SharedClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().copy(text)
        }
    }

    fn app() -> App {
        App::new(Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_help_toggle_swallows_other_keys() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('?')));
        assert!(app.state().help_visible);
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.state().config.build, BuildChannel::Stable);
        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.state().help_visible);
    }

    #[test]
    fn test_cycle_and_digit_selection() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.state().config.build, BuildChannel::Nightly);

        app.handle_key_event(key(KeyCode::Down)); // Hardware row
        app.handle_key_event(key(KeyCode::Char('2')));
        assert_eq!(app.state().config.hardware, Hardware::Amd);
    }

    #[test]
    fn test_copy_captures_rendered_command() {
        let clipboard = SharedClipboard::default();
        let mut app = App::new(Box::new(clipboard.clone()));
        app.handle_key_event(key(KeyCode::Char('c')));
        let captured = clipboard.0.borrow().contents.clone();
        assert_eq!(captured.as_deref(), Some("pip install vllm"));
        assert!(app.state().copy_indicator_active());
    }

    #[test]
    fn test_docker_jump_normalizes_state() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Down)); // Hardware
        app.handle_key_event(key(KeyCode::Down)); // Package
        app.handle_key_event(key(KeyCode::Char('3'))); // Docker
        let config = app.state().config;
        assert_eq!(config.package, PackageMethod::Docker);
        assert!(config.is_resolved());
    }
}
