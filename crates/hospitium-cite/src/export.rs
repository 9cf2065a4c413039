//! CSV export of citation records.

use crate::Result;
use crate::record::CitationRecord;
use std::io::Write;

/// Column order of exported files.
pub const CSV_HEADER: [&str; 11] = [
    "id",
    "title",
    "authors",
    "year",
    "journal",
    "volume",
    "issue",
    "pages",
    "doi",
    "url",
    "citationCount",
];

/// Separator used when flattening the author list into one cell.
pub const AUTHOR_SEPARATOR: &str = "; ";

/// Write `records` as CSV, header first. Absent fields become empty cells.
pub fn write_csv<W: Write>(records: &[CitationRecord], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for record in records {
        csv.write_record(row(record))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(records: &[CitationRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    // The writer only ever receives UTF-8 strings
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn row(record: &CitationRecord) -> [String; 11] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        record.id.clone(),
        opt(&record.title),
        record.authors.join(AUTHOR_SEPARATOR),
        record.year.map(|y| y.to_string()).unwrap_or_default(),
        opt(&record.journal),
        opt(&record.volume),
        opt(&record.issue),
        opt(&record.pages),
        opt(&record.doi),
        opt(&record.url),
        record
            .citation_count
            .map(|c| c.to_string())
            .unwrap_or_default(),
    ]
}
