mod domain;
mod filter;
mod normalizer;
mod parser;
mod writer;

use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

pub use domain::{
    CleanedContacts, CleanedRecord, CleaningSummary, InputRow, RowOutcome, FIRST_NAME_COLUMN,
    LAST_NAME_COLUMN, OUTPUT_HEADERS, PHONE_COLUMN,
};
pub use filter::{clean_rows, ContactFilter};
pub use normalizer::normalize_name;

#[derive(Debug)]
pub enum ContactTableError {
    Io(std::io::Error),
    Csv(csv::Error),
    Encoding(std::str::Utf8Error),
}

impl std::fmt::Display for ContactTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactTableError::Io(err) => write!(f, "failed to read contact export: {}", err),
            ContactTableError::Csv(err) => write!(f, "invalid contact CSV data: {}", err),
            ContactTableError::Encoding(err) => {
                write!(f, "contact export is not valid UTF-8: {}", err)
            }
        }
    }
}

impl std::error::Error for ContactTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContactTableError::Io(err) => Some(err),
            ContactTableError::Csv(err) => Some(err),
            ContactTableError::Encoding(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ContactTableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ContactTableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<std::str::Utf8Error> for ContactTableError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Encoding(err)
    }
}

/// Table-in, table-out entry points around [`clean_rows`].
pub struct ContactCleaner;

impl ContactCleaner {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CleanedContacts, ContactTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CleanedContacts, ContactTableError> {
        let rows = parser::parse_rows(reader)?;
        debug!(rows = rows.len(), "parsed contact rows");

        let cleaned = clean_rows(&rows);
        let summary = cleaned.summary;
        info!(
            rows_read = summary.rows_read,
            accepted = summary.accepted,
            rejected_missing_field = summary.rejected_missing_field,
            rejected_duplicate_phone = summary.rejected_duplicate_phone,
            "cleaned contact table"
        );

        Ok(cleaned)
    }

    /// Like [`ContactCleaner::from_reader`] but insists the whole body is UTF-8
    /// up front, so a bad object surfaces as an encoding error.
    pub fn from_bytes(bytes: &[u8]) -> Result<CleanedContacts, ContactTableError> {
        let text = std::str::from_utf8(bytes)?;
        Self::from_reader(text.as_bytes())
    }

    pub fn write_to<W: Write>(
        writer: W,
        contacts: &CleanedContacts,
    ) -> Result<(), ContactTableError> {
        writer::write_records(writer, &contacts.records)?;
        Ok(())
    }

    pub fn render(contacts: &CleanedContacts) -> Result<Vec<u8>, ContactTableError> {
        let mut buffer = Vec::new();
        Self::write_to(&mut buffer, contacts)?;
        Ok(buffer)
    }

    /// Parses, cleans and renders in one step.
    pub fn clean_bytes(bytes: &[u8]) -> Result<(Vec<u8>, CleaningSummary), ContactTableError> {
        let contacts = Self::from_bytes(bytes)?;
        let rendered = Self::render(&contacts)?;
        Ok((rendered, contacts.summary))
    }
}
