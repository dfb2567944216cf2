//! # murmur-transcribe
//!
//! Invokes the external `whisper-cli` executable against a local audio
//! file and returns the cleaned transcript. The hard work (acoustic
//! modeling, decoding) lives entirely in that binary; this crate owns
//! the preconditions, the subprocess environment, and the result
//! mapping:
//!
//! ```text
//! model + audio existence checks
//! → <task root>/bin/whisper-cli -m <model> -f <audio> -nt
//!   (LD_LIBRARY_PATH prepended with the executable's directory)
//! → exit 0: stdout → trim → strip [BLANK_AUDIO] → trim → transcript
//! → exit ≠ 0: EngineFailure with the exit code and captured stderr
//! ```
//!
//! ## Crate Position
//!
//! Standalone. Depended on by: murmur-handler.

#![deny(unsafe_code)]

pub mod engine;
pub mod model;
pub mod types;

pub use engine::Transcriber;
pub use model::{DEFAULT_MODEL, model_path};
pub use types::TranscribeError;
