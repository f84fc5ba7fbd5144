mod event;
mod router;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage::{ObjectLocation, ObjectStore, StorageError};
use crate::workflows::contacts::{CleaningSummary, ContactCleaner, ContactTableError};

pub use event::{BucketEntity, EventRecord, ObjectCreatedEvent, ObjectEntity, S3Entity};
pub use router::contacts_router;

pub const DEFAULT_OUTPUT_PREFIX: &str = "cleaned/";

/// HTTP-style result reported back to whatever fired the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub status_code: u16,
    pub body: String,
}

/// Where a cleaning run read from and wrote to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOutcome {
    pub source: ObjectLocation,
    pub destination: ObjectLocation,
    pub summary: CleaningSummary,
}

impl CleanupOutcome {
    pub fn response(&self) -> TriggerResponse {
        TriggerResponse {
            status_code: 200,
            body: format!("File cleaned and saved to {}", self.destination.key),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("event did not contain any object records")]
    MissingRecord,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Table(#[from] ContactTableError),
}

/// Adapter from object-created notifications to the contact cleaner.
///
/// The store is injected; the trigger never builds its own client.
#[derive(Debug, Clone)]
pub struct CleanupTrigger<S> {
    store: S,
    output_prefix: String,
}

impl<S: ObjectStore> CleanupTrigger<S> {
    pub fn new(store: S, output_prefix: impl Into<String>) -> Self {
        Self {
            store,
            output_prefix: output_prefix.into(),
        }
    }

    pub fn with_default_prefix(store: S) -> Self {
        Self::new(store, DEFAULT_OUTPUT_PREFIX)
    }

    pub fn handle(&self, event: &ObjectCreatedEvent) -> Result<TriggerResponse, TriggerError> {
        let source = event.source_location().ok_or(TriggerError::MissingRecord)?;
        let outcome = self.clean_object(&source)?;
        Ok(outcome.response())
    }

    /// Reads `source`, cleans it, and writes the result next to it under the
    /// output prefix.
    pub fn clean_object(&self, source: &ObjectLocation) -> Result<CleanupOutcome, TriggerError> {
        info!(%source, "cleaning contact export");

        let object = self.store.get(source)?;
        let (cleaned, summary) = ContactCleaner::clean_bytes(&object.body)?;

        let destination = source.with_prefix(&self.output_prefix);
        self.store
            .put(&destination, cleaned, mime::TEXT_CSV.essence_str())?;

        info!(
            %source,
            %destination,
            accepted = summary.accepted,
            rejected = summary.rejected(),
            "stored cleaned contact export"
        );

        Ok(CleanupOutcome {
            source: source.clone(),
            destination,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryObjectStore;

    fn seeded_store(key: &str, body: &str) -> InMemoryObjectStore {
        let store = InMemoryObjectStore::new();
        store
            .put(
                &ObjectLocation::new("contacts", key),
                body.as_bytes().to_vec(),
                "text/csv",
            )
            .expect("seed");
        store
    }

    #[test]
    fn handle_writes_cleaned_copy_under_prefix() {
        let store = seeded_store(
            "list.csv",
            "First Name,Last Name,Phone 1 - Value\nann,lee,555\nbo,kim,555\n",
        );
        let trigger = CleanupTrigger::with_default_prefix(store.clone());

        let response = trigger
            .handle(&ObjectCreatedEvent::for_object("contacts", "list.csv"))
            .expect("trigger succeeds");

        assert_eq!(
            response,
            TriggerResponse {
                status_code: 200,
                body: "File cleaned and saved to cleaned/list.csv".to_string(),
            }
        );

        let cleaned = store
            .get(&ObjectLocation::new("contacts", "cleaned/list.csv"))
            .expect("cleaned object");
        assert_eq!(
            String::from_utf8(cleaned.body).expect("utf8"),
            "First Name,Last Name,Phone 1 - Value\r\nAnn,Lee,555\r\n"
        );
        assert_eq!(cleaned.content_type, "text/csv");
    }

    #[test]
    fn handle_requires_a_record() {
        let trigger = CleanupTrigger::with_default_prefix(InMemoryObjectStore::new());
        let error = trigger
            .handle(&ObjectCreatedEvent::default())
            .expect_err("no records");
        assert!(matches!(error, TriggerError::MissingRecord));
    }

    #[test]
    fn missing_source_object_is_reported() {
        let trigger = CleanupTrigger::with_default_prefix(InMemoryObjectStore::new());
        let error = trigger
            .handle(&ObjectCreatedEvent::for_object("contacts", "gone.csv"))
            .expect_err("missing object");
        assert!(matches!(
            error,
            TriggerError::Storage(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn undecodable_source_is_a_table_error() {
        let store = InMemoryObjectStore::new();
        store
            .put(
                &ObjectLocation::new("contacts", "binary.csv"),
                vec![0xff, 0xfe, 0x00],
                "application/octet-stream",
            )
            .expect("seed");
        let trigger = CleanupTrigger::with_default_prefix(store.clone());

        let error = trigger
            .handle(&ObjectCreatedEvent::for_object("contacts", "binary.csv"))
            .expect_err("bad encoding");
        assert!(matches!(error, TriggerError::Table(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn custom_prefix_is_applied() {
        let store = seeded_store("in/a.csv", "First Name,Last Name,Phone 1 - Value\n");
        let trigger = CleanupTrigger::new(store.clone(), "out/");

        let outcome = trigger
            .clean_object(&ObjectLocation::new("contacts", "in/a.csv"))
            .expect("clean");

        assert_eq!(outcome.destination.key, "out/in/a.csv");
        assert_eq!(store.keys("contacts"), vec!["in/a.csv", "out/in/a.csv"]);
    }
}
