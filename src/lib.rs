//! vLLM Quickstart Library
//!
//! Core logic for the install-command configurator: the constraint
//! resolver that keeps the four choice fields mutually consistent, the
//! pure command generator, and the TUI that fronts them.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod resolver;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export the main types for convenience
pub use app::{App, AppState, FieldRow};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, Osc52Clipboard};
pub use command::{render, NIGHTLY_INDEX_URL, PINNED_RELEASE};
pub use config::InstallConfig;
pub use error::{QuickstartError, Result};
pub use resolver::{Edit, EditRejected, Outcome, Rule, RULES};
pub use types::{BuildChannel, CudaVersion, Hardware, PackageMethod};
