//! This module implements the CSV table of material records.

use std::io::Write;

use log::debug;
use matcards::prelude::*;

use crate::error::ReportError;
use crate::options::ReportOptions;

/// Number of columns in the CSV table: the name plus every property.
pub const MAT_CSV_COLS: usize = 11;

/// Label of the name column.
pub const NAME_HEADER: &str = "Material Name";

/// Returns the CSV header row.
pub fn csv_headers() -> [&'static str; MAT_CSV_COLS] {
  let mut headers = [NAME_HEADER; MAT_CSV_COLS];
  for (i, prop) in Property::all().iter().enumerate() {
    headers[i + 1] = prop.csv_header();
  }
  return headers;
}

/// Returns the CSV fields for a record. Absent properties are empty strings.
pub fn csv_fields(record: &MaterialRecord) -> [&str; MAT_CSV_COLS] {
  let mut fields = [""; MAT_CSV_COLS];
  fields[0] = record.name.as_str();
  for (i, prop) in Property::all().iter().enumerate() {
    fields[i + 1] = record.get(*prop).unwrap_or("");
  }
  return fields;
}

/// Writes the header and one row per record.
pub fn write_csv<W: Write>(
  output: W,
  records: &[MaterialRecord],
  options: &ReportOptions
) -> Result<(), ReportError> {
  let delim_byte: u8 = u8::try_from(options.delim)
    .map_err(|_| ReportError::BadDelimiter(options.delim))?;
  let mut wtr = csv::WriterBuilder::new()
    .delimiter(delim_byte)
    .from_writer(output);
  wtr.write_record(csv_headers())?;
  for rec in records {
    wtr.write_record(csv_fields(rec))?;
  }
  wtr.flush()?;
  debug!("Wrote {} CSV rows.", records.len());
  return Ok(());
}
