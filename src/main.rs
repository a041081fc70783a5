//! vLLM Quickstart - Main entry point
//!
//! Dispatches between the interactive TUI (default) and the headless
//! `render`/`matrix` subcommands.

mod app;
mod cli;
mod clipboard;
mod command;
mod config;
mod error;
mod resolver;
mod theme;
mod types;
mod ui;

use anyhow::{bail, Context};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::cli::{Cli, Commands};
use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::config::InstallConfig;
use crate::resolver::Edit;
use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};

/// Initialize tracing. Logs go to stderr so they never corrupt the
/// alternate screen; nothing is emitted unless RUST_LOG asks for it.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse_args();

    match cli.command {
        None | Some(Commands::Tui) => run_tui(),
        Some(Commands::Render {
            package,
            hardware,
            build,
            cuda,
            json,
            copy,
        }) => run_render(package, hardware, build, cuda, json, copy),
        Some(Commands::Matrix) => run_matrix(),
    }
}

/// Run the interactive configurator.
fn run_tui() -> anyhow::Result<()> {
    info!("starting TUI configurator");

    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = app::App::new(Box::new(Osc52Clipboard));
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}

/// Resolve the flags against the default configuration and print the
/// command.
fn run_render(
    package: Option<PackageMethod>,
    hardware: Option<Hardware>,
    build: Option<BuildChannel>,
    cuda: Option<CudaVersion>,
    json: bool,
    copy: bool,
) -> anyhow::Result<()> {
    let mut config = InstallConfig::default();

    // Fixed application order: pinning choices before pinned ones, so
    // e.g. `--package docker` normalizes before `--cuda` is considered.
    let edits = [
        package.map(Edit::Package),
        hardware.map(Edit::Hardware),
        build.map(Edit::Build),
        cuda.map(Edit::Cuda),
    ];
    for edit in edits.into_iter().flatten() {
        if let Err(reason) = config.apply_edit(edit) {
            bail!("incompatible flags: {reason}");
        }
    }

    let command_text = command::render(&config);

    if copy {
        // Best effort, same contract as the TUI: log and move on.
        if let Err(err) = Osc52Clipboard.copy(&command_text) {
            warn!(error = %err, "clipboard copy failed");
        }
    }

    if json {
        let payload = serde_json::json!({
            "config": config,
            "command": command_text,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{command_text}");
    }

    Ok(())
}

/// Print every reachable configuration with its command.
fn run_matrix() -> anyhow::Result<()> {
    for build in BuildChannel::iter() {
        for hardware in Hardware::iter() {
            for package in PackageMethod::iter() {
                for cuda in CudaVersion::iter() {
                    let config = InstallConfig {
                        build,
                        hardware,
                        package,
                        cuda,
                    };
                    if !config.is_resolved() {
                        continue;
                    }
                    // Off-NVIDIA, the CUDA axis is meaningless; print one
                    // row for it, not three.
                    if hardware != Hardware::Nvidia && cuda != CudaVersion::latest() {
                        continue;
                    }
                    let first_line = command::render(&config)
                        .lines()
                        .next()
                        .unwrap_or_default()
                        .to_string();
                    println!(
                        "{:<8} {:<7} {:<11} {:<10} {}",
                        build.to_string(),
                        hardware.to_string(),
                        package.to_string(),
                        config.cuda.tag(),
                        first_line
                    );
                }
            }
        }
    }
    Ok(())
}
