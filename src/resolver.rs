//! Configuration resolver
//!
//! This module owns the only mutation path into [`InstallConfig`]:
//! [`InstallConfig::apply_edit`]. Constraint propagation is expressed as an
//! explicit ordered rule table rather than ad-hoc branching, so precedence
//! is auditable and each rule is unit-testable on its own.
//!
//! # Rule order
//!
//! Rules are evaluated top to bottom on every edit; the first rule whose
//! guard matches wins. The Docker normalization rule must come first:
//! edits arrive one field at a time, so the Docker guards in later rules
//! always test the *stored* package method from a prior edit, never the
//! incoming one.
//!
//! ```text
//! 1. package -> Docker        normalize to {Docker, NVIDIA, CUDA 12.4, Stable}
//! 2. hardware edit  (Docker)  reject
//! 3. build -> Nightly (Docker) reject
//! 4. build -> Nightly         set channel, force CUDA 12.4
//! 5. cuda != 12.4   (Nightly) reject
//! 6. cuda != 12.4   (Docker)  reject
//! 7. anything else            set the field, no cross-field effect
//! ```
//!
//! Rule 6 is what the original widget enforced in its click handler
//! rather than its state logic; without it a CUDA edit under Docker would
//! fall through to the plain set and break the Docker pin.

use crate::config::InstallConfig;
use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};
use thiserror::Error;
use tracing::debug;

/// A requested change to exactly one field.
///
/// Edits are typed, so a value outside the field's domain cannot be
/// constructed; the "edit outside the enum domain" failure mode from the
/// stringly-typed original is a compile error here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Build(BuildChannel),
    Hardware(Hardware),
    Package(PackageMethod),
    Cuda(CudaVersion),
}

/// Why an edit was refused.
///
/// Rejections are steady-state behavior (the UI renders the refused value
/// as a dimmed badge), so they are a plain `Err` carrying no state change,
/// not a panic and not an `anyhow` error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRejected {
    /// Rule 2: the Docker image only ships for NVIDIA.
    #[error("Docker images are only published for NVIDIA hardware")]
    HardwarePinnedByDocker,

    /// Rule 3: there is no nightly Docker image.
    #[error("Nightly builds are not available as Docker images")]
    NightlyUnavailableOnDocker,

    /// Rule 5: nightly wheels are built against the latest CUDA only.
    #[error("Nightly wheels are only built for CUDA 12.4")]
    CudaPinnedByNightly,

    /// Rule 6: the Docker image embeds one toolkit version.
    #[error("The Docker image ships with CUDA 12.4 only")]
    CudaPinnedByDocker,
}

/// What a matching rule does to the configuration.
pub enum Outcome {
    /// Apply the edit, possibly overriding other fields.
    Mutate(fn(&mut InstallConfig, Edit)),
    /// Refuse the edit; the configuration is left untouched.
    Reject(EditRejected),
}

/// One row of the constraint table.
pub struct Rule {
    /// Short identifier used in logs and per-rule tests.
    pub name: &'static str,
    /// Guard over the stored configuration and the incoming edit.
    pub applies: fn(&InstallConfig, Edit) -> bool,
    pub outcome: Outcome,
}

fn set_field(config: &mut InstallConfig, edit: Edit) {
    match edit {
        Edit::Build(v) => config.build = v,
        Edit::Hardware(v) => config.hardware = v,
        Edit::Package(v) => config.package = v,
        Edit::Cuda(v) => config.cuda = v,
    }
}

fn normalize_for_docker(config: &mut InstallConfig, _edit: Edit) {
    config.package = PackageMethod::Docker;
    config.hardware = Hardware::Nvidia;
    config.cuda = CudaVersion::latest();
    config.build = BuildChannel::Stable;
}

fn enter_nightly(config: &mut InstallConfig, _edit: Edit) {
    config.build = BuildChannel::Nightly;
    config.cuda = CudaVersion::latest();
}

/// The constraint table, in precedence order. First match wins; the last
/// rule matches unconditionally, so evaluation always terminates with an
/// outcome.
pub const RULES: &[Rule] = &[
    Rule {
        name: "docker-normalizes-platform",
        applies: |_, edit| matches!(edit, Edit::Package(PackageMethod::Docker)),
        outcome: Outcome::Mutate(normalize_for_docker),
    },
    Rule {
        name: "docker-pins-hardware",
        applies: |config, edit| {
            matches!(edit, Edit::Hardware(_)) && config.package == PackageMethod::Docker
        },
        outcome: Outcome::Reject(EditRejected::HardwarePinnedByDocker),
    },
    Rule {
        name: "docker-excludes-nightly",
        applies: |config, edit| {
            matches!(edit, Edit::Build(BuildChannel::Nightly))
                && config.package == PackageMethod::Docker
        },
        outcome: Outcome::Reject(EditRejected::NightlyUnavailableOnDocker),
    },
    Rule {
        name: "nightly-forces-latest-cuda",
        applies: |_, edit| matches!(edit, Edit::Build(BuildChannel::Nightly)),
        outcome: Outcome::Mutate(enter_nightly),
    },
    Rule {
        name: "nightly-pins-cuda",
        applies: |config, edit| {
            matches!(edit, Edit::Cuda(v) if v != CudaVersion::latest())
                && config.build == BuildChannel::Nightly
        },
        outcome: Outcome::Reject(EditRejected::CudaPinnedByNightly),
    },
    Rule {
        name: "docker-pins-cuda",
        applies: |config, edit| {
            matches!(edit, Edit::Cuda(v) if v != CudaVersion::latest())
                && config.package == PackageMethod::Docker
        },
        outcome: Outcome::Reject(EditRejected::CudaPinnedByDocker),
    },
    Rule {
        name: "plain-set",
        applies: |_, _| true,
        outcome: Outcome::Mutate(set_field),
    },
];

impl InstallConfig {
    /// Apply a one-field edit through the constraint table.
    ///
    /// `Ok` carries a snapshot of the configuration after the edit (which
    /// may have overridden other fields). `Err` means the edit was refused
    /// and the configuration is unchanged; re-applying the current value of
    /// a field is a no-op `Ok`, which keeps the two cases distinguishable.
    pub fn apply_edit(&mut self, edit: Edit) -> Result<InstallConfig, EditRejected> {
        for rule in RULES {
            if !(rule.applies)(self, edit) {
                continue;
            }
            return match rule.outcome {
                Outcome::Mutate(mutate) => {
                    mutate(self, edit);
                    debug!(rule = rule.name, ?edit, config = ?self, "edit applied");
                    debug_assert!(self.is_resolved());
                    Ok(*self)
                }
                Outcome::Reject(reason) => {
                    debug!(rule = rule.name, ?edit, %reason, "edit rejected");
                    Err(reason)
                }
            };
        }
        // The table ends with an unconditional rule.
        unreachable!("constraint table has no catch-all rule")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docker_config() -> InstallConfig {
        let mut config = InstallConfig::default();
        config
            .apply_edit(Edit::Package(PackageMethod::Docker))
            .unwrap();
        config
    }

    fn nightly_config() -> InstallConfig {
        let mut config = InstallConfig::default();
        config.apply_edit(Edit::Build(BuildChannel::Nightly)).unwrap();
        config
    }

    #[test]
    fn rule1_docker_normalizes_everything() {
        let mut config = InstallConfig {
            build: BuildChannel::Nightly,
            hardware: Hardware::Amd,
            package: PackageMethod::Uv,
            cuda: CudaVersion::Cuda124,
        };
        let resolved = config.apply_edit(Edit::Package(PackageMethod::Docker)).unwrap();
        assert_eq!(
            resolved,
            InstallConfig {
                build: BuildChannel::Stable,
                hardware: Hardware::Nvidia,
                package: PackageMethod::Docker,
                cuda: CudaVersion::Cuda124,
            }
        );
    }

    #[test]
    fn rule2_docker_rejects_hardware_edits() {
        let mut config = docker_config();
        let before = config;
        assert_eq!(
            config.apply_edit(Edit::Hardware(Hardware::Amd)),
            Err(EditRejected::HardwarePinnedByDocker)
        );
        assert_eq!(config, before);
    }

    #[test]
    fn rule3_docker_rejects_nightly() {
        let mut config = docker_config();
        let before = config;
        assert_eq!(
            config.apply_edit(Edit::Build(BuildChannel::Nightly)),
            Err(EditRejected::NightlyUnavailableOnDocker)
        );
        assert_eq!(config, before);
    }

    #[test]
    fn rule4_nightly_forces_latest_cuda() {
        let mut config = InstallConfig::default();
        config.apply_edit(Edit::Cuda(CudaVersion::Cuda118)).unwrap();
        let resolved = config.apply_edit(Edit::Build(BuildChannel::Nightly)).unwrap();
        assert_eq!(resolved.build, BuildChannel::Nightly);
        assert_eq!(resolved.cuda, CudaVersion::Cuda124);
    }

    #[test]
    fn rule5_nightly_rejects_older_cuda() {
        let mut config = nightly_config();
        let before = config;
        assert_eq!(
            config.apply_edit(Edit::Cuda(CudaVersion::Cuda121)),
            Err(EditRejected::CudaPinnedByNightly)
        );
        assert_eq!(config, before);
        // Re-selecting the pinned version is a plain no-op apply, not a
        // rejection.
        assert!(config.apply_edit(Edit::Cuda(CudaVersion::Cuda124)).is_ok());
    }

    #[test]
    fn rule6_docker_rejects_older_cuda() {
        let mut config = docker_config();
        let before = config;
        assert_eq!(
            config.apply_edit(Edit::Cuda(CudaVersion::Cuda118)),
            Err(EditRejected::CudaPinnedByDocker)
        );
        assert_eq!(config, before);
        assert!(config.apply_edit(Edit::Cuda(CudaVersion::Cuda124)).is_ok());
    }

    #[test]
    fn rule7_plain_edits_have_no_cross_field_effect() {
        let mut config = InstallConfig::default();
        let resolved = config.apply_edit(Edit::Hardware(Hardware::Intel)).unwrap();
        assert_eq!(resolved.hardware, Hardware::Intel);
        assert_eq!(resolved.build, BuildChannel::Stable);
        assert_eq!(resolved.package, PackageMethod::Pip);
        assert_eq!(resolved.cuda, CudaVersion::Cuda124);
    }

    #[test]
    fn leaving_docker_unlocks_hardware() {
        let mut config = docker_config();
        config.apply_edit(Edit::Package(PackageMethod::Pip)).unwrap();
        assert!(config.apply_edit(Edit::Hardware(Hardware::Amd)).is_ok());
        assert_eq!(config.hardware, Hardware::Amd);
    }

    #[test]
    fn leaving_nightly_unlocks_cuda() {
        let mut config = nightly_config();
        config.apply_edit(Edit::Build(BuildChannel::Stable)).unwrap();
        let resolved = config.apply_edit(Edit::Cuda(CudaVersion::Cuda118)).unwrap();
        assert_eq!(resolved.cuda, CudaVersion::Cuda118);
    }

    #[test]
    fn stable_to_stable_is_noop_ok() {
        let mut config = InstallConfig::default();
        let resolved = config.apply_edit(Edit::Build(BuildChannel::Stable)).unwrap();
        assert_eq!(resolved, InstallConfig::default());
    }

    #[test]
    fn table_precedence_docker_entry_beats_docker_guards() {
        // Switching INTO Docker while hardware is non-default must hit the
        // normalization rule, not fall through to a reject.
        let mut config = InstallConfig::default();
        config.apply_edit(Edit::Hardware(Hardware::Neuron)).unwrap();
        assert!(config.apply_edit(Edit::Package(PackageMethod::Docker)).is_ok());
        assert_eq!(config.hardware, Hardware::Nvidia);
    }

    #[test]
    fn table_ends_with_catch_all() {
        let last = RULES.last().unwrap();
        assert_eq!(last.name, "plain-set");
        assert!((last.applies)(&InstallConfig::default(), Edit::Build(BuildChannel::Stable)));
    }
}
