//! Clipboard collaborator
//!
//! The app depends on the [`Clipboard`] trait, not on a mechanism. The
//! production implementation emits an OSC 52 escape sequence, which works
//! in every terminal the TUI itself supports and crosses SSH sessions.
//! A write failure is never fatal; the caller logs it and the "copied"
//! indicator simply does not appear.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use thiserror::Error;

/// Clipboard write failures.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// An opaque "write string to the system clipboard" capability.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard via the OSC 52 terminal escape sequence.
///
/// The payload is base64-encoded and written straight to stdout; the
/// terminal emulator owns the actual clipboard interaction. Terminals
/// without OSC 52 support silently ignore the sequence, which matches the
/// "failure leaves the indicator unset" contract closely enough that no
/// capability probe is attempted.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        stdout.flush()?;
        Ok(())
    }
}

/// In-memory clipboard for tests and non-interactive use.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
