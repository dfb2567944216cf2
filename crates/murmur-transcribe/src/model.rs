//! Model artifact naming and path resolution.
//!
//! Artifacts follow the ggml naming convention: `ggml-<name>.bin` under
//! the model directory. This crate only resolves and checks paths; it
//! never downloads — the missing-model error tells the operator how.

use std::path::{Path, PathBuf};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "tiny";

/// Resolve the artifact path for a model name under `model_dir`.
pub fn model_path(model_dir: &Path, name: &str) -> PathBuf {
    model_dir.join(format!("ggml-{name}.bin"))
}
