//! Type-safe choice domains for the install configurator
//!
//! Every user-facing choice is a proper Rust enum rather than a string,
//! so the resolver can match exhaustively and an out-of-domain value is
//! unrepresentable.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Release track for the artifact being installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum BuildChannel {
    #[default]
    #[strum(serialize = "stable", to_string = "Stable")]
    Stable,
    #[strum(serialize = "nightly", to_string = "Nightly")]
    Nightly,
}

/// Target accelerator family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Hardware {
    #[default]
    #[strum(serialize = "nvidia", to_string = "NVIDIA")]
    Nvidia,
    #[strum(serialize = "amd", to_string = "AMD")]
    Amd,
    #[strum(serialize = "intel", to_string = "Intel")]
    Intel,
    #[strum(serialize = "tpu", to_string = "TPU")]
    Tpu,
    #[strum(serialize = "neuron", to_string = "Neuron")]
    Neuron,
}

impl Hardware {
    /// Prebuilt wheels and images are only published for NVIDIA; everyone
    /// else builds from source.
    pub const fn has_prebuilt_artifacts(self) -> bool {
        matches!(self, Self::Nvidia)
    }
}

/// Distribution mechanism for the install
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum PackageMethod {
    /// Standard Python installer
    #[default]
    #[strum(serialize = "python", serialize = "pip", to_string = "Python")]
    Pip,
    /// Accelerated installer (uv)
    #[strum(serialize = "uv", serialize = "python-uv", to_string = "Python (uv)")]
    Uv,
    /// Official serving container image
    #[strum(serialize = "docker", to_string = "Docker")]
    Docker,
}

impl PackageMethod {
    /// Command prefix used when the install goes through a Python installer.
    ///
    /// Docker shares the `pip` prefix: it only matters on the fallback path,
    /// where the standard installer is the safe answer.
    pub const fn installer(self) -> &'static str {
        match self {
            Self::Pip | Self::Docker => "pip",
            Self::Uv => "uv pip",
        }
    }
}

/// CUDA toolkit version the prebuilt artifact was compiled against.
///
/// Only meaningful while [`Hardware::Nvidia`] is selected; the UI hides the
/// row entirely for other hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum CudaVersion {
    #[default]
    #[strum(serialize = "12.4", serialize = "cu124", to_string = "CUDA 12.4")]
    Cuda124,
    #[strum(serialize = "12.1", serialize = "cu121", to_string = "CUDA 12.1")]
    Cuda121,
    #[strum(serialize = "11.8", serialize = "cu118", to_string = "CUDA 11.8")]
    Cuda118,
}

impl CudaVersion {
    /// Wheel/index tag for this toolkit version (e.g. `cu124`)
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cuda124 => "cu124",
            Self::Cuda121 => "cu121",
            Self::Cuda118 => "cu118",
        }
    }

    /// The latest toolkit version, the only one nightly and Docker
    /// artifacts are published for
    pub const fn latest() -> Self {
        Self::Cuda124
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_labels() {
        assert_eq!(BuildChannel::Nightly.to_string(), "Nightly");
        assert_eq!(Hardware::Nvidia.to_string(), "NVIDIA");
        assert_eq!(PackageMethod::Uv.to_string(), "Python (uv)");
        assert_eq!(CudaVersion::Cuda118.to_string(), "CUDA 11.8");
    }

    #[test]
    fn test_cli_forms_parse() {
        assert_eq!(BuildChannel::from_str("nightly").unwrap(), BuildChannel::Nightly);
        assert_eq!(Hardware::from_str("TPU").unwrap(), Hardware::Tpu);
        assert_eq!(PackageMethod::from_str("uv").unwrap(), PackageMethod::Uv);
        assert_eq!(PackageMethod::from_str("pip").unwrap(), PackageMethod::Pip);
        assert_eq!(CudaVersion::from_str("cu121").unwrap(), CudaVersion::Cuda121);
        assert_eq!(CudaVersion::from_str("12.1").unwrap(), CudaVersion::Cuda121);
    }

    #[test]
    fn test_installer_prefix() {
        assert_eq!(PackageMethod::Pip.installer(), "pip");
        assert_eq!(PackageMethod::Uv.installer(), "uv pip");
        assert_eq!(PackageMethod::Docker.installer(), "pip");
    }

    #[test]
    fn test_cuda_tags() {
        let tags: Vec<&str> = CudaVersion::iter().map(|v| v.tag()).collect();
        assert_eq!(tags, vec!["cu124", "cu121", "cu118"]);
    }

    #[test]
    fn test_defaults_match_session_start() {
        assert_eq!(BuildChannel::default(), BuildChannel::Stable);
        assert_eq!(Hardware::default(), Hardware::Nvidia);
        assert_eq!(PackageMethod::default(), PackageMethod::Pip);
        assert_eq!(CudaVersion::default(), CudaVersion::Cuda124);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = CudaVersion::Cuda118;
        let json = serde_json::to_string(&original).unwrap();
        let parsed: CudaVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
