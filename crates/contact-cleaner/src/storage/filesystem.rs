use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{ObjectLocation, ObjectStore, StorageError, StoredObject};

/// Stores objects as plain files under `<root>/<bucket>/<key>`.
///
/// Content types are not persisted; reads infer them from the key's extension.
#[derive(Debug, Clone)]
pub struct FilesystemObjectStore {
    root: PathBuf,
}

impl FilesystemObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, location: &ObjectLocation) -> Result<PathBuf, StorageError> {
        let bucket = relative_path(&location.bucket)?;
        if bucket.components().count() != 1 {
            return Err(StorageError::InvalidKey(location.bucket.clone()));
        }
        let key = relative_path(&location.key)?;
        Ok(self.root.join(bucket).join(key))
    }
}

// Only plain relative segments are accepted, so no location can escape the root.
fn relative_path(raw: &str) -> Result<&Path, StorageError> {
    let path = Path::new(raw);
    let plain = !raw.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

    if plain {
        Ok(path)
    } else {
        Err(StorageError::InvalidKey(raw.to_string()))
    }
}

impl ObjectStore for FilesystemObjectStore {
    fn get(&self, location: &ObjectLocation) -> Result<StoredObject, StorageError> {
        let path = self.path_for(location)?;
        let body = match std::fs::read(&path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::not_found(location))
            }
            Err(err) => return Err(err.into()),
        };

        let last_modified = std::fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        let content_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .to_string();

        debug!(path = %path.display(), bytes = body.len(), "read object from filesystem");
        Ok(StoredObject {
            body,
            content_type,
            last_modified,
        })
    }

    fn put(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.path_for(location)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &body)?;

        debug!(path = %path.display(), bytes = body.len(), "wrote object to filesystem");
        Ok(())
    }
}
