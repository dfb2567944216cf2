//! Trigger-event payload model.
//!
//! Mirrors the standard object-created notification shape: a `Records`
//! list where each record carries an `s3` entity with the bucket name
//! and object key. Only the fields this worker reads are modeled;
//! everything else in the payload is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Errors produced while parsing or inspecting a trigger event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The payload deserialized but its record list is empty.
    #[error("trigger event contains no records")]
    NoRecords,

    /// The payload is not a well-formed notification document.
    #[error("malformed trigger event: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The notification payload that starts one invocation.
///
/// Immutable after parse; the handler only ever reads the first record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// Notification records. Exactly one is expected in practice.
    #[serde(rename = "Records")]
    pub records: Vec<EventRecord>,
}

/// One record of a trigger event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    /// The storage entity the record describes.
    pub s3: StorageEntity,
}

/// Bucket and object identifiers carried by a record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageEntity {
    /// The bucket the object was created in.
    pub bucket: BucketRef,
    /// The created object.
    pub object: ObjectKeyRef,
}

/// Bucket reference within a record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BucketRef {
    /// Bucket name.
    pub name: String,
}

/// Object reference within a record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectKeyRef {
    /// Object key.
    pub key: String,
}

/// The parsed identity of the triggering object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRef {
    /// Bucket name.
    pub bucket: String,
    /// Object key.
    pub key: String,
}

impl TriggerEvent {
    /// Parse a trigger event from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Extract the bucket/key pair from the first record.
    ///
    /// A zero-record event is an error; there is no silent defaulting.
    pub fn object_ref(&self) -> Result<ObjectRef, EventError> {
        let record = self.records.first().ok_or(EventError::NoRecords)?;
        Ok(ObjectRef {
            bucket: record.s3.bucket.name.clone(),
            key: record.s3.object.key.clone(),
        })
    }
}
