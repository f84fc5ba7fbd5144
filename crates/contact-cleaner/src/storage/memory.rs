use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::{ObjectLocation, ObjectStore, StorageError, StoredObject};

/// Process-local store; clones share the same objects.
#[derive(Debug, Default, Clone)]
pub struct InMemoryObjectStore {
    objects: Arc<Mutex<HashMap<ObjectLocation, StoredObject>>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        let Ok(guard) = self.objects.lock() else {
            return Vec::new();
        };
        let mut keys: Vec<String> = guard
            .keys()
            .filter(|location| location.bucket == bucket)
            .map(|location| location.key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("in-memory store mutex poisoned".to_string())
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn get(&self, location: &ObjectLocation) -> Result<StoredObject, StorageError> {
        let guard = self.objects.lock().map_err(|_| Self::poisoned())?;
        guard
            .get(location)
            .cloned()
            .ok_or_else(|| StorageError::not_found(location))
    }

    fn put(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let mut guard = self.objects.lock().map_err(|_| Self::poisoned())?;
        guard.insert(
            location.clone(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
                last_modified: Utc::now(),
            },
        );
        Ok(())
    }
}
