//! In-memory object store for tests and local wiring.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{ObjectStore, StoreError};

/// Object store backed by a `HashMap`, keyed by `(bucket, key)`.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects. Test convenience.
    pub fn len(&self) -> usize {
        self.objects.lock().len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.lock().is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        self.objects
            .lock()
            .get(&(bucket.to_owned(), key.to_owned()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            })
    }

    async fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), StoreError> {
        let _ = self
            .objects
            .lock()
            .insert((bucket.to_owned(), key.to_owned()), body.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryObjectStore::new();
        store.put_object("b", "k", b"bytes").await.unwrap();
        assert_eq!(store.get_object("b", "k").await.unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn get_missing_object_is_not_found() {
        let store = MemoryObjectStore::new();
        assert_matches!(
            store.get_object("b", "k").await,
            Err(StoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn put_twice_overwrites_not_appends() {
        let store = MemoryObjectStore::new();
        store.put_object("b", "k", b"one").await.unwrap();
        store.put_object("b", "k", b"one").await.unwrap();
        assert_eq!(store.get_object("b", "k").await.unwrap(), b"one");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn buckets_are_distinct_namespaces() {
        let store = MemoryObjectStore::new();
        store.put_object("a", "k", b"in-a").await.unwrap();
        store.put_object("b", "k", b"in-b").await.unwrap();
        assert_eq!(store.get_object("a", "k").await.unwrap(), b"in-a");
        assert_eq!(store.get_object("b", "k").await.unwrap(), b"in-b");
    }
}
