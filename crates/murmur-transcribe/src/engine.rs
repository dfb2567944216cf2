//! Subprocess invocation of `whisper-cli`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::model_path;
use crate::types::TranscribeError;

/// Sentinel the engine prints for segments with no detected speech.
const BLANK_AUDIO: &str = "[BLANK_AUDIO]";

/// Environment variable naming the deployment root directory.
const TASK_ROOT_VAR: &str = "LAMBDA_TASK_ROOT";

/// Name of the library-search-path variable the engine's shared
/// libraries are resolved through.
const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";

/// Invoker for the external transcription engine.
///
/// Holds the two roots everything else is resolved from: the task root
/// (executable lives at `<task_root>/bin/whisper-cli`) and the model
/// directory (artifacts at `<model_dir>/ggml-<name>.bin`).
pub struct Transcriber {
    task_root: PathBuf,
    model_dir: PathBuf,
}

impl Transcriber {
    /// Create an invoker with explicit roots.
    pub fn new(task_root: impl Into<PathBuf>, model_dir: impl Into<PathBuf>) -> Self {
        Self {
            task_root: task_root.into(),
            model_dir: model_dir.into(),
        }
    }

    /// Create an invoker from the runtime environment: task root from
    /// `LAMBDA_TASK_ROOT` (defaulting to the working directory), models
    /// under `models/`.
    pub fn from_env() -> Self {
        let task_root = std::env::var(TASK_ROOT_VAR).unwrap_or_else(|_| ".".into());
        Self::new(task_root, "models")
    }

    /// Path to the engine executable.
    pub fn cli_path(&self) -> PathBuf {
        self.task_root.join("bin").join("whisper-cli")
    }

    /// Transcribe `audio` with the named model.
    ///
    /// Checks both preconditions (model artifact, audio file) before
    /// spawning anything, then runs the engine to completion and maps
    /// its output. The empty string is a valid transcript — it means
    /// silence, not failure.
    pub async fn transcribe(&self, audio: &Path, model: &str) -> Result<String, TranscribeError> {
        let model_file = model_path(&self.model_dir, model);
        if !model_file.exists() {
            return Err(TranscribeError::ModelNotFound {
                name: model.to_owned(),
                path: model_file,
            });
        }
        if !audio.exists() {
            return Err(TranscribeError::AudioNotFound(audio.to_owned()));
        }

        let cli = self.cli_path();
        let bin_dir = self.task_root.join("bin");
        let library_path =
            prepend_library_path(&bin_dir, std::env::var(LIBRARY_PATH_VAR).ok().as_deref());

        debug!(cli = %cli.display(), model = %model_file.display(), audio = %audio.display(), "spawning whisper-cli");

        // Explicit argument list — object keys and model names never go
        // through a shell.
        let output = tokio::process::Command::new(&cli)
            .arg("-m")
            .arg(&model_file)
            .arg("-f")
            .arg(audio)
            .arg("-nt")
            .env(LIBRARY_PATH_VAR, library_path)
            .output()
            .await?;

        let exit_code = output.status.code().unwrap_or(-1);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let stderr = if stderr.is_empty() {
                "Unknown error".to_owned()
            } else {
                stderr
            };
            return Err(TranscribeError::EngineFailure { exit_code, stderr });
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        let transcript = raw.trim().replace(BLANK_AUDIO, "").trim().to_owned();

        debug!(exit_code, chars = transcript.len(), "whisper-cli completed");
        Ok(transcript)
    }
}

/// Prepend `bin_dir` to an existing library search path, preserving the
/// prior value by `:`-concatenation. The sandbox may have injected
/// paths of its own; those must survive.
fn prepend_library_path(bin_dir: &Path, existing: Option<&str>) -> String {
    match existing {
        Some(prev) if !prev.is_empty() => format!("{}:{prev}", bin_dir.display()),
        _ => bin_dir.display().to_string(),
    }
}
