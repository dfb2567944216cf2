//! Filesystem-backed object store.
//!
//! Maps a bucket to a directory under the store root and an object key
//! to a relative path inside it, so `processed/audio/sample.wav.json`
//! lands at `<root>/<bucket>/processed/audio/sample.wav.json`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::{ObjectStore, StoreError};

/// Object store rooted at a local directory.
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on the first put.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a bucket/key pair to a path under the root.
    ///
    /// Keys are treated as opaque slash-separated names; anything that
    /// would escape the bucket directory (absolute paths, `..`) is
    /// rejected rather than resolved.
    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StoreError> {
        if bucket.is_empty() || bucket.contains('/') {
            return Err(StoreError::InvalidKey(format!("bad bucket name: {bucket}")));
        }
        let rel = Path::new(key);
        let escapes = rel.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if key.is_empty() || escapes {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(bucket).join(rel))
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.object_path(bucket, key)?;
        match tokio::fs::read(&path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            }),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, body).await?;
        debug!(bucket, key, bytes = body.len(), "stored object");
        Ok(())
    }
}
