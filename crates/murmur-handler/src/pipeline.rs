//! Invocation pipeline: stage, transcribe, publish.

use std::path::{Path, PathBuf};

use tracing::info;

use murmur_core::{EventError, HandlerResponse, ObjectRef, TriggerEvent};
use murmur_store::{ObjectStore, StoreError};
use murmur_transcribe::{TranscribeError, Transcriber};

use crate::config::Config;

/// Fixed completion message returned on success.
const COMPLETION_MESSAGE: &str = "Processing complete";

/// Errors surfaced by the event-handling pipeline.
///
/// Upstream store and engine errors pass through in their original
/// form; this enum adds only the staging existence check, which guards
/// against a download that "succeeds" without producing a file.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The trigger event could not be parsed or has no records.
    #[error(transparent)]
    Event(#[from] EventError),

    /// Object storage failed (download or publish).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The transcription invoker failed.
    #[error(transparent)]
    Transcribe(#[from] TranscribeError),

    /// The staged audio copy is missing after a download that raised
    /// no error of its own.
    #[error("staged audio file not found: {0}")]
    StagedFileMissing(PathBuf),

    /// Local scratch I/O failed.
    #[error("scratch io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Download the source object to the fixed scratch path and verify the
/// file exists on local storage afterwards.
///
/// Overwrites any prior scratch file at the same path.
pub async fn stage_audio(
    store: &dyn ObjectStore,
    object: &ObjectRef,
    scratch: &Path,
) -> Result<(), HandlerError> {
    let body = store.get_object(&object.bucket, &object.key).await?;
    if let Some(parent) = scratch.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(scratch, &body).await?;
    if !scratch.exists() {
        return Err(HandlerError::StagedFileMissing(scratch.to_owned()));
    }
    info!(bucket = %object.bucket, key = %object.key, bytes = body.len(), scratch = %scratch.display(), "staged audio");
    Ok(())
}

/// Result key for a source object key: `processed/<key>.json`.
pub fn result_key(key: &str) -> String {
    format!("processed/{key}.json")
}

/// Serialize the transcript as a JSON string value and write it to the
/// source bucket under the derived result key. Always a full overwrite.
///
/// Returns the key the result was stored at.
pub async fn publish_transcript(
    store: &dyn ObjectStore,
    object: &ObjectRef,
    transcript: &str,
) -> Result<String, HandlerError> {
    let key = result_key(&object.key);
    let body = serde_json::Value::String(transcript.to_owned()).to_string();
    store
        .put_object(&object.bucket, &key, body.as_bytes())
        .await?;
    Ok(key)
}

/// Handle one trigger event end to end.
///
/// Logs the raw event and the derived identifiers, then runs stage →
/// transcribe → publish. Any stage failure aborts the rest and
/// propagates to the caller; there is no retry and no catch here.
pub async fn handle_event(
    store: &dyn ObjectStore,
    transcriber: &Transcriber,
    config: &Config,
    event: &TriggerEvent,
) -> Result<HandlerResponse, HandlerError> {
    if let Ok(raw) = serde_json::to_string(event) {
        info!(event = %raw, "received trigger event");
    }
    let object = event.object_ref()?;
    info!(bucket = %object.bucket, key = %object.key, "processing object");

    stage_audio(store, &object, &config.scratch).await?;
    let transcript = transcriber.transcribe(&config.scratch, &config.model).await?;
    let key = publish_transcript(store, &object, &transcript).await?;

    info!(result_key = %key, chars = transcript.len(), "processing complete");
    Ok(HandlerResponse::ok(COMPLETION_MESSAGE))
}
