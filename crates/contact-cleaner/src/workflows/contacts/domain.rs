use std::collections::HashMap;

pub const FIRST_NAME_COLUMN: &str = "First Name";
pub const LAST_NAME_COLUMN: &str = "Last Name";
pub const PHONE_COLUMN: &str = "Phone 1 - Value";

/// Header written at the top of every cleaned table.
pub const OUTPUT_HEADERS: [&str; 3] = [FIRST_NAME_COLUMN, LAST_NAME_COLUMN, PHONE_COLUMN];

/// One parsed line of a contact export, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    fields: HashMap<String, String>,
}

impl InputRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly handy in tests and fixtures.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Missing columns read as the empty string.
    pub fn value_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for InputRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = InputRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// A validated contact. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// What happened to a single input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted,
    RejectedMissingField,
    RejectedDuplicatePhone,
}

/// Per-run counters, reported alongside the cleaned table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningSummary {
    pub rows_read: usize,
    pub accepted: usize,
    pub rejected_missing_field: usize,
    pub rejected_duplicate_phone: usize,
}

impl CleaningSummary {
    pub(crate) fn record(&mut self, outcome: RowOutcome) {
        self.rows_read += 1;
        match outcome {
            RowOutcome::Accepted => self.accepted += 1,
            RowOutcome::RejectedMissingField => self.rejected_missing_field += 1,
            RowOutcome::RejectedDuplicatePhone => self.rejected_duplicate_phone += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejected_missing_field + self.rejected_duplicate_phone
    }
}

/// The output table in first-seen order plus the run summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedContacts {
    pub records: Vec<CleanedRecord>,
    pub summary: CleaningSummary,
}

impl CleanedContacts {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
