use std::io::Write;

use super::domain::{CleanedRecord, OUTPUT_HEADERS};

/// Renders the cleaned table, header first, one CRLF-terminated line per record.
pub(crate) fn write_records<W: Write>(
    writer: W,
    records: &[CleanedRecord],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_HEADERS)?;
    for record in records {
        csv_writer.write_record([
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.phone.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[CleanedRecord]) -> String {
        let mut buffer = Vec::new();
        write_records(&mut buffer, records).expect("write");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn header_only_for_empty_table() {
        assert_eq!(render(&[]), "First Name,Last Name,Phone 1 - Value\r\n");
    }

    #[test]
    fn quotes_only_when_needed() {
        let output = render(&[CleanedRecord {
            first_name: "Mary Ann".to_string(),
            last_name: "O'Brien".to_string(),
            phone: "555-1234, ext 2".to_string(),
        }]);

        assert_eq!(
            output,
            "First Name,Last Name,Phone 1 - Value\r\nMary Ann,O'Brien,\"555-1234, ext 2\"\r\n"
        );
    }
}
