//! This module implements the Markdown summary: a sample table of the first
//! few records and a breakdown by material family.

use std::io::{self, Write};

use matcards::prelude::*;
use matcards::util::ellipsize;

use crate::classify::{FamilyCounts, MaterialFamily};
use crate::options::ReportOptions;
use crate::table::NAME_HEADER;

/// Escapes a value so it can't break out of a table cell.
fn md_cell(s: &str) -> String {
  return s.replace('|', "\\|");
}

/// Writes the table header and its separator line.
fn write_table_header<W: Write>(w: &mut W) -> io::Result<()> {
  let labels = std::iter::once(NAME_HEADER)
    .chain(Property::all().iter().map(|p| p.md_header()))
    .collect::<Vec<_>>();
  writeln!(w, "| {} |", labels.join(" | "))?;
  let dashes = labels.iter()
    .map(|l| "-".repeat(l.chars().count() + 2))
    .collect::<Vec<_>>();
  writeln!(w, "|{}|", dashes.join("|"))?;
  return Ok(());
}

/// Writes a single table row.
fn write_row<W: Write>(
  w: &mut W,
  rec: &MaterialRecord,
  options: &ReportOptions
) -> io::Result<()> {
  let mut cells = vec![md_cell(&ellipsize(&rec.name, options.name_width))];
  for prop in Property::all() {
    cells.push(md_cell(rec.get(*prop).unwrap_or(options.md_blank.as_str())));
  }
  writeln!(w, "| {} |", cells.join(" | "))?;
  return Ok(());
}

/// Writes the family breakdown.
fn write_families<W: Write>(w: &mut W, records: &[MaterialRecord]) -> io::Result<()> {
  let counts = FamilyCounts::tally(records);
  writeln!(w, "\n## Summary by Material Type\n")?;
  for fam in MaterialFamily::all() {
    writeln!(w, "- **{}**: {} materials", fam.label(), counts.get(*fam))?;
  }
  writeln!(w, "- **Total**: {} materials", records.len())?;
  return Ok(());
}

/// Writes the whole Markdown summary.
pub fn write_markdown<W: Write>(
  mut w: W,
  records: &[MaterialRecord],
  options: &ReportOptions
) -> io::Result<()> {
  writeln!(w, "# Material Properties Table\n")?;
  writeln!(w, "**Total Materials Found: {}**\n", records.len())?;
  writeln!(w, "## Sample of First {} Materials\n", options.sample_size)?;
  write_table_header(&mut w)?;
  for rec in records.iter().take(options.sample_size) {
    write_row(&mut w, rec, options)?;
  }
  if records.len() > options.sample_size {
    writeln!(
      w,
      "\n*... and {} more materials (see CSV file for complete list)*",
      records.len() - options.sample_size
    )?;
  }
  write_families(&mut w, records)?;
  w.flush()?;
  return Ok(());
}
