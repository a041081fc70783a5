//! Install command generator
//!
//! [`render`] is a pure function from a resolved [`InstallConfig`] to the
//! literal command text shown to the user. It never fails and never
//! returns an empty string.

use crate::config::InstallConfig;
use crate::types::{BuildChannel, CudaVersion, Hardware, PackageMethod};

/// Release the stable channel currently pins to.
pub const PINNED_RELEASE: &str = "0.8.1";

/// Extra index hosting the nightly wheels.
pub const NIGHTLY_INDEX_URL: &str = "https://wheels.vllm.ai/nightly";

/// Shown for hardware without prebuilt artifacts.
const SOURCE_BUILD_NOTE: &str = "# Build from source is supported";

/// The one blessed container invocation: NVIDIA runtime, all GPUs, mounted
/// model cache, token placeholder, published API port, host IPC.
const DOCKER_RUN: &str = "docker run --runtime nvidia --gpus all \
-v ~/.cache/huggingface:/root/.cache/huggingface \
--env \"HUGGING_FACE_HUB_TOKEN=<secret>\" \
-p 8000:8000 --ipc=host vllm/vllm-openai:latest \
--model mistralai/Mistral-7B-v0.1";

/// Render the install command for a configuration.
///
/// Total over every configuration the resolver can produce; the older-CUDA
/// arm is unreachable under nightly (the resolver pins CUDA 12.4 there) but
/// still renders something sensible if handed an unresolved value directly.
pub fn render(config: &InstallConfig) -> String {
    if !config.hardware.has_prebuilt_artifacts() {
        return SOURCE_BUILD_NOTE.to_string();
    }

    let installer = config.package.installer();

    match config.build {
        BuildChannel::Stable => match config.cuda {
            CudaVersion::Cuda118 | CudaVersion::Cuda121 => {
                pinned_wheel_snippet(installer, config.cuda)
            }
            CudaVersion::Cuda124 => {
                if config.package == PackageMethod::Docker {
                    DOCKER_RUN.to_string()
                } else {
                    format!("{installer} install vllm")
                }
            }
        },
        BuildChannel::Nightly => match config.package {
            // uv resolves pre-releases from the extra index on its own
            PackageMethod::Uv => {
                format!("{installer} install vllm --extra-index-url {NIGHTLY_INDEX_URL}")
            }
            PackageMethod::Pip | PackageMethod::Docker => {
                format!("{installer} install vllm --pre --extra-index-url {NIGHTLY_INDEX_URL}")
            }
        },
    }
}

/// Two-line snippet installing a release wheel built for an older CUDA,
/// with the matching PyTorch wheel index.
fn pinned_wheel_snippet(installer: &str, cuda: CudaVersion) -> String {
    let tag = cuda.tag();
    format!(
        "export VLLM_VERSION={PINNED_RELEASE}\n\
         {installer} install https://github.com/vllm-project/vllm/releases/download/v${{VLLM_VERSION}}/vllm-${{VLLM_VERSION}}+{tag}-cp38-abi3-manylinux1_x86_64.whl --extra-index-url https://download.pytorch.org/whl/{tag}"
    )
}
