use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};
use clap::{Parser, Subcommand};

/// vLLM Quickstart - pick an install configuration, get the exact command
#[derive(Parser)]
#[command(name = "vllm-quickstart")]
#[command(about = "Renders the right vLLM install command for your setup")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive terminal configurator (the default)
    Tui,

    /// Resolve a configuration headlessly and print its install command.
    ///
    /// Flags are applied to the default configuration through the same
    /// constraint rules as the TUI, in a fixed order (package, hardware,
    /// build, cuda) so pinning choices land before pinned ones. A flag the
    /// rules refuse is an error rather than a silent override.
    Render {
        /// Package method (python, uv, docker)
        #[arg(long)]
        package: Option<PackageMethod>,

        /// Target hardware (nvidia, amd, intel, tpu, neuron)
        #[arg(long)]
        hardware: Option<Hardware>,

        /// Build channel (stable, nightly)
        #[arg(long)]
        build: Option<BuildChannel>,

        /// CUDA version (12.4, 12.1, 11.8 or cu124, cu121, cu118)
        #[arg(long)]
        cuda: Option<CudaVersion>,

        /// Emit the resolved configuration and command as JSON
        #[arg(long)]
        json: bool,

        /// Also copy the command to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },

    /// Print every reachable configuration with its install command
    Matrix,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
