use std::collections::HashSet;

use super::domain::{
    CleanedContacts, CleanedRecord, CleaningSummary, InputRow, RowOutcome, FIRST_NAME_COLUMN,
    LAST_NAME_COLUMN, PHONE_COLUMN,
};
use super::normalizer::{is_space, normalize_name};

/// Stateful row filter for a single cleaning run.
///
/// Rows are offered in input order. The first row to claim a phone number
/// wins; rows missing a phone or either name never claim one.
#[derive(Debug, Default)]
pub struct ContactFilter {
    seen_phones: HashSet<String>,
    records: Vec<CleanedRecord>,
    summary: CleaningSummary,
}

impl ContactFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, row: &InputRow) -> RowOutcome {
        let outcome = self.evaluate(row);
        self.summary.record(outcome);
        outcome
    }

    fn evaluate(&mut self, row: &InputRow) -> RowOutcome {
        let phone = row.value_or_empty(PHONE_COLUMN).trim_matches(is_space);
        let first_name = normalize_name(row.value_or_empty(FIRST_NAME_COLUMN));
        let last_name = normalize_name(row.value_or_empty(LAST_NAME_COLUMN));

        if phone.is_empty() || first_name.is_empty() || last_name.is_empty() {
            return RowOutcome::RejectedMissingField;
        }

        if !self.seen_phones.insert(phone.to_string()) {
            return RowOutcome::RejectedDuplicatePhone;
        }

        self.records.push(CleanedRecord {
            first_name,
            last_name,
            phone: phone.to_string(),
        });
        RowOutcome::Accepted
    }

    pub fn finish(self) -> CleanedContacts {
        CleanedContacts {
            records: self.records,
            summary: self.summary,
        }
    }
}

/// Runs every row through a fresh [`ContactFilter`].
pub fn clean_rows<'a, I>(rows: I) -> CleanedContacts
where
    I: IntoIterator<Item = &'a InputRow>,
{
    let mut filter = ContactFilter::new();
    for row in rows {
        filter.offer(row);
    }
    filter.finish()
}
