//! Error taxonomy for transcription.

use std::path::PathBuf;

/// Errors that can occur while invoking the transcription engine.
///
/// Each precondition failure is its own kind so callers get a specific
/// diagnostic instead of an opaque subprocess error. Only the
/// missing-model case carries remediation text; that is a user-facing
/// contract, not decoration.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    /// The model artifact does not exist at the resolved path.
    #[error(
        "model file not found: {path}\n\nDownload a model with this command:\n\n> bash ./models/download-ggml-model.sh {name}\n"
    )]
    ModelNotFound {
        /// Model name as requested (e.g. "tiny").
        name: String,
        /// Resolved artifact path that was checked.
        path: PathBuf,
    },

    /// The audio file does not exist at the given path.
    ///
    /// Raised before any subprocess is spawned.
    #[error("audio file not found: {0}")]
    AudioNotFound(PathBuf),

    /// The engine executable could not be launched at all.
    #[error("failed to launch whisper-cli: {0}")]
    Spawn(#[from] std::io::Error),

    /// The engine ran and exited with a non-zero status.
    #[error("engine failed (exit code {exit_code}): {stderr}")]
    EngineFailure {
        /// Process exit code (-1 if terminated by signal).
        exit_code: i32,
        /// Captured stderr text, or `Unknown error` when empty.
        stderr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_not_found_carries_download_command() {
        let e = TranscribeError::ModelNotFound {
            name: "base.en".into(),
            path: PathBuf::from("models/ggml-base.en.bin"),
        };
        let msg = e.to_string();
        assert!(msg.contains("models/ggml-base.en.bin"));
        assert!(msg.contains("bash ./models/download-ggml-model.sh base.en"));
    }

    #[test]
    fn engine_failure_carries_exit_code_and_stderr() {
        let e = TranscribeError::EngineFailure {
            exit_code: 3,
            stderr: "decode failed".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("exit code 3"));
        assert!(msg.contains("decode failed"));
    }

    #[test]
    fn audio_not_found_names_the_path() {
        let e = TranscribeError::AudioNotFound(PathBuf::from("/tmp/audio.wav"));
        assert!(e.to_string().contains("/tmp/audio.wav"));
    }
}
