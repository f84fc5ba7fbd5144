//! Object storage port used by the trigger adapter.
//!
//! The store is always handed to callers explicitly so workflows can run
//! against the in-memory backend in tests and the filesystem backend locally.

mod filesystem;
mod memory;

use std::fmt;

use chrono::{DateTime, Utc};

pub use filesystem::FilesystemObjectStore;
pub use memory::InMemoryObjectStore;

/// Bucket and key of a single object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Same bucket, key prefixed with `prefix`.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            bucket: self.bucket.clone(),
            key: format!("{prefix}{}", self.key),
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
    pub last_modified: DateTime<Utc>,
}

/// Storage abstraction so the trigger workflow can be exercised without a network.
pub trait ObjectStore: Send + Sync {
    fn get(&self, location: &ObjectLocation) -> Result<StoredObject, StorageError>;
    fn put(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for std::sync::Arc<S> {
    fn get(&self, location: &ObjectLocation) -> Result<StoredObject, StorageError> {
        (**self).get(location)
    }

    fn put(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        (**self).put(location, body, content_type)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object {bucket}/{key} not found")]
    NotFound { bucket: String, key: String },
    #[error("object key '{0}' is not allowed")]
    InvalidKey(String),
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub(crate) fn not_found(location: &ObjectLocation) -> Self {
        Self::NotFound {
            bucket: location.bucket.clone(),
            key: location.key.clone(),
        }
    }
}
