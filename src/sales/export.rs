//! CSV export
//!
//! Serializes sales rows to the downloadable CSV artifact and parses it
//! back. Header is `Date,Region,Sales`, dates are `YYYY-MM-DD`.

use std::io::{Read, Write};

use super::error::{SalesError, SalesResult};
use super::types::SalesRecord;

/// File name offered for the download
pub const CSV_FILE_NAME: &str = "sample_sales_data.csv";

/// MIME type of the download
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Column names of the exported table
pub const CSV_HEADER: [&str; 3] = ["Date", "Region", "Sales"];

/// Write records as CSV to any writer
///
/// The header row is always written, even with no records.
pub fn write_csv<W: Write>(writer: W, records: &[SalesRecord]) -> SalesResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Encode records as UTF-8 CSV bytes
pub fn to_csv_bytes(records: &[SalesRecord]) -> SalesResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(32 + records.len() * 24);
    write_csv(&mut buf, records)?;
    Ok(buf)
}

/// Parse CSV produced by [`write_csv`]
pub fn read_csv<R: Read>(reader: R) -> SalesResult<Vec<SalesRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<SalesRecord>()
        .map(|row| row.map_err(SalesError::from))
        .collect()
}

pub fn from_csv_bytes(bytes: &[u8]) -> SalesResult<Vec<SalesRecord>> {
    read_csv(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::generator::{generate, GeneratorParams};
    use crate::sales::types::{Region, RegionSelection};
    use crate::sales::view::filter;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_layout() {
        let records = vec![
            SalesRecord::new(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(), Region::North, 1234),
            SalesRecord::new(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(), Region::East, 4999),
        ];
        let bytes = to_csv_bytes(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Date,Region,Sales\n2023-01-31,North,1234\n2023-02-28,East,4999\n"
        );
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let data = generate(&GeneratorParams::default()).unwrap();
        let filtered = filter(&data, &RegionSelection::none());
        let bytes = to_csv_bytes(filtered.records()).unwrap();

        assert_eq!(bytes, b"Date,Region,Sales\n");
        assert!(from_csv_bytes(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_filtered_export_parses_back_unchanged() {
        let data = generate(&GeneratorParams::default()).unwrap();
        let selection = RegionSelection::from_regions([Region::West, Region::North]);
        let filtered = filter(&data, &selection);

        let bytes = to_csv_bytes(filtered.records()).unwrap();
        let parsed = from_csv_bytes(&bytes).unwrap();

        assert_eq!(parsed.as_slice(), filtered.records());
    }

    #[test]
    fn test_rejects_unknown_region() {
        let bytes = b"Date,Region,Sales\n2023-01-31,Central,1000\n";
        assert!(from_csv_bytes(bytes).is_err());
    }
}
