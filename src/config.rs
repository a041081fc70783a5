//! The install configuration and its invariants
//!
//! [`InstallConfig`] is the single mutable entity in the program. It is
//! created with the session defaults, mutated only through
//! [`InstallConfig::apply_edit`](crate::resolver) and never persisted.

use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};
use serde::{Deserialize, Serialize};

/// One resolved selection of the four interdependent choice fields.
///
/// # Invariants
///
/// After every accepted edit the following hold:
///
/// - Docker pins the platform: `package == Docker` implies
///   `hardware == Nvidia`, `cuda == Cuda124` and `build == Stable`.
/// - Nightly pins the toolkit: `build == Nightly` implies `cuda == Cuda124`.
///
/// The resolver enforces these; the predicates below exist so tests and the
/// UI can check them independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstallConfig {
    pub build: BuildChannel,
    pub hardware: Hardware,
    pub package: PackageMethod,
    pub cuda: CudaVersion,
}

impl InstallConfig {
    /// Docker distribution only ships one blessed configuration.
    pub fn docker_pins_platform(&self) -> bool {
        self.package != PackageMethod::Docker
            || (self.hardware == Hardware::Nvidia
                && self.cuda == CudaVersion::latest()
                && self.build == BuildChannel::Stable)
    }

    /// Nightly artifacts are only published for the latest toolkit.
    pub fn nightly_pins_cuda(&self) -> bool {
        self.build != BuildChannel::Nightly || self.cuda == CudaVersion::latest()
    }

    /// True when all cross-field invariants hold.
    pub fn is_resolved(&self) -> bool {
        self.docker_pins_platform() && self.nightly_pins_cuda()
    }

    /// Whether the CUDA row is shown at all. Presentation concern: no
    /// resolver rule guards on hardware.
    pub fn cuda_visible(&self) -> bool {
        self.hardware == Hardware::Nvidia
    }

    /// Whether the hardware row accepts edits (Docker pins it).
    pub fn hardware_locked(&self) -> bool {
        self.package == PackageMethod::Docker
    }

    /// Whether switching to the given channel would be rejected.
    pub fn channel_locked(&self, channel: BuildChannel) -> bool {
        channel == BuildChannel::Nightly && self.package == PackageMethod::Docker
    }

    /// Whether selecting the given CUDA version would be rejected.
    pub fn cuda_locked(&self, cuda: CudaVersion) -> bool {
        cuda != CudaVersion::latest()
            && (self.package == PackageMethod::Docker || self.build == BuildChannel::Nightly)
    }
}
