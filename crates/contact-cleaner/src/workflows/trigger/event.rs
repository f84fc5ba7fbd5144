use serde::{Deserialize, Serialize};

use crate::storage::ObjectLocation;

/// Object-created notification in the S3 event shape. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ObjectCreatedEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Entity {
    pub bucket: BucketEntity,
    pub object: ObjectEntity,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BucketEntity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectEntity {
    pub key: String,
}

impl ObjectCreatedEvent {
    /// Builds a single-record event, mainly for CLI use and tests.
    pub fn for_object(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            records: vec![EventRecord {
                s3: S3Entity {
                    bucket: BucketEntity { name: bucket.into() },
                    object: ObjectEntity { key: key.into() },
                },
            }],
        }
    }

    /// Location named by the first record; later records are not processed.
    pub fn source_location(&self) -> Option<ObjectLocation> {
        self.records
            .first()
            .map(|record| ObjectLocation::new(&record.s3.bucket.name, &record.s3.object.key))
    }
}
