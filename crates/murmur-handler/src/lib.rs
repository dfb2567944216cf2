//! # murmur-handler
//!
//! The invocation pipeline for the murmur transcription worker:
//!
//! ```text
//! trigger event → stage audio to scratch → whisper-cli → publish
//! processed/<key>.json back to the source bucket
//! ```
//!
//! Every stage is sequential and blocking per invocation; a failure in
//! any stage aborts the rest and surfaces to the caller unchanged. The
//! only local recovery anywhere is in the `murmur transcribe` CLI front
//! end, which prints errors instead of propagating them — the event
//! front end deliberately has no catch at all.
//!
//! ## Crate Position
//!
//! Top of the workspace. Depends on: murmur-core, murmur-store,
//! murmur-transcribe. Ships the `murmur` binary.

#![deny(unsafe_code)]

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{HandlerError, handle_event, publish_transcript, result_key, stage_audio};
