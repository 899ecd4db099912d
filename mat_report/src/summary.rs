//! This module implements the plain-text summary printed by the parser tool:
//! records grouped by card format, with a few examples of each.

use std::io::{self, Write};

use matcards::prelude::*;

/// Width of the banner lines.
const BANNER_WIDTH: usize = 100;

/// How many examples to show per format.
const EXAMPLES_PER_FORMAT: usize = 3;

/// Names get cut at this many characters.
const NAME_CHARS: usize = 60;

/// Groups records by format, keeping the order formats first appear in.
pub fn group_by_format(
  records: &[MaterialRecord]
) -> Vec<(CardFormat, Vec<&MaterialRecord>)> {
  let mut groups: Vec<(CardFormat, Vec<&MaterialRecord>)> = Vec::new();
  for rec in records {
    match groups.iter_mut().find(|(fmt, _)| *fmt == rec.format) {
      Some((_, v)) => v.push(rec),
      None => groups.push((rec.format, vec![rec])),
    }
  }
  return groups;
}

/// Writes the grouped summary.
pub fn write_summary<W: Write>(mut w: W, records: &[MaterialRecord]) -> io::Result<()> {
  if records.is_empty() {
    writeln!(w, "No materials found.")?;
    return Ok(());
  }
  let banner = "=".repeat(BANNER_WIDTH);
  writeln!(w, "\n{}", banner)?;
  writeln!(w, "MATERIAL PROPERTIES SUMMARY")?;
  writeln!(w, "{}", banner)?;
  writeln!(w, "Total Materials Found: {}", records.len())?;
  let na = "N/A";
  for (fmt, recs) in group_by_format(records) {
    writeln!(
      w,
      "\n{} ({}): {} materials",
      fmt.type_code(),
      fmt.description(),
      recs.len()
    )?;
    for (i, rec) in recs.iter().take(EXAMPLES_PER_FORMAT).enumerate() {
      let name: String = rec.name.chars().take(NAME_CHARS).collect();
      writeln!(w, "  {}. {}", i + 1, name)?;
      writeln!(
        w,
        "     Density: {}, Young's: {}",
        rec.get(Property::Density).unwrap_or(na),
        rec.get(Property::YoungModulus).unwrap_or(na)
      )?;
      writeln!(w, "     Source: {}", rec.source_file.as_deref().unwrap_or(na))?;
    }
    if recs.len() > EXAMPLES_PER_FORMAT {
      writeln!(w, "  ... and {} more materials", recs.len() - EXAMPLES_PER_FORMAT)?;
    }
  }
  w.flush()?;
  return Ok(());
}
