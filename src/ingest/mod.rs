//! CSV reading: turns the monthly export into `RawRecord`s.

use crate::errors::AppResult;
use crate::models::raw_record::RawRecord;
use csv::{ReaderBuilder, Trim};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read every data row of the CSV at `path`.
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRecord>> {
    let file = File::open(path)?;
    read_rows_from_reader(file)
}

/// Header row required. Headers are trimmed and a leading UTF-8 BOM is
/// dropped; rows may be shorter or longer than the header; blank rows are
/// skipped. Bytes that are not valid UTF-8 (Latin-1 exports) are decoded
/// lossily, so one badly encoded row never loses the rest of the file.
pub fn read_rows_from_reader<R: Read>(reader: R) -> AppResult<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()?
        .iter()
        .map(|h| decode(h).trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();

    for result in rdr.byte_records() {
        let record = result?;
        let row = RawRecord::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.as_str(), decode(v))),
        );

        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "csv loaded");
    Ok(rows)
}

fn decode(field: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(field);
    if let Cow::Owned(_) = text {
        tracing::warn!(field = %text, "invalid UTF-8 in csv field, decoded lossily");
    }
    text
}
