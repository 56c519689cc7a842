//! CSV parsing for the turnout statistics table.

use crate::record::StatRow;
use csv::ReaderBuilder;

/// Parse raw delimited text (header row required) into ordered rows.
///
/// Each record is zipped against the header, so short rows come back as
/// partial [`StatRow`]s and over-long rows drop their unnamed tail cells.
/// Nothing aborts the batch: rows the reader cannot decode are skipped with
/// a warning, and downstream consumers tolerate missing fields.
pub fn parse_table(raw: &str) -> Vec<StatRow> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers: Vec<String> = match rdr.headers() {
        Ok(h) => h.iter().map(|name| name.trim().to_string()).collect(),
        Err(e) => {
            log::warn!("statistics table has no readable header row: {}", e);
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("skipping unreadable statistics row: {}", e);
                continue;
            }
        };
        let mut row = StatRow::new();
        for (column, value) in headers.iter().zip(record.iter()) {
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }
    rows
}
