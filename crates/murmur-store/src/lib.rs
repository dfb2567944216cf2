//! # murmur-store
//!
//! Object storage port for the murmur worker, plus two backends:
//!
//! - [`FsObjectStore`]: buckets as directories under a root path. The
//!   backend the `murmur handle` front end wires up.
//! - [`MemoryObjectStore`]: a `HashMap` behind a mutex, for tests and
//!   local wiring.
//!
//! The handler takes the store as `&dyn ObjectStore` so deployments can
//! bind their own client (e.g. an S3 SDK) to the same seam without
//! touching the pipeline.
//!
//! Semantics are deliberately thin: `put` is always a full overwrite,
//! `get` returns the whole body, and there is no listing, delete, or
//! transaction support. Concurrent writers to the same key last-write-win.
//!
//! ## Crate Position
//!
//! Standalone. Depended on by: murmur-handler.

#![deny(unsafe_code)]

pub mod fs;
pub mod memory;

pub use fs::FsObjectStore;
pub use memory::MemoryObjectStore;

use async_trait::async_trait;

/// Errors produced by object-store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No object exists at the requested bucket/key.
    #[error("object not found: {bucket}/{key}")]
    NotFound {
        /// Bucket name.
        bucket: String,
        /// Object key.
        key: String,
    },

    /// The key cannot be mapped to a storage location.
    #[error("invalid object key: {0}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Remote object storage, keyed by bucket name and object key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full body of an object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Write an object, overwriting any existing body at the same key.
    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError>;
}
