use std::io::Read;

use super::domain::InputRow;

/// Reads a comma-separated table with a header row into keyed rows.
///
/// Short rows leave their trailing columns absent; cells past the header
/// width are dropped. Values are kept verbatim, trimming is up to the filter.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<InputRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(clean_header)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.as_str(), value))
            .collect::<InputRow>();
        rows.push(row);
    }

    Ok(rows)
}

fn clean_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}
