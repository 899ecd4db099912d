//! This module implements the section decoders for the known card formats and
//! the functions that split a file into sections and feed them through.
//!
//! A card file is a preamble followed by any number of sections, each starting
//! with the format's marker keyword. Each section is decoded one line at a
//! time; the decoder doesn't care how the lines reach it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Serialize, Deserialize};

use crate::error::CardError;
use crate::format::CardFormat;
use crate::record::{MaterialRecord, Property};
use crate::util::*;

/// Comment prefix for lines that may carry the material name.
const NAME_PREFIX: &str = "$  ";

/// Prefix for placeholder data lines in MAT_024 cards.
const PLACEHOLDER_DATA_PREFIX: &str = "xx,";

/// Minimum number of comma-separated fields in a MAT_024 data line.
const MIN_DATA_FIELDS: usize = 5;

/// Positions of the properties in a MAT_024 data line. Position 0 is the
/// material ID, which we don't keep.
const DATA_LINE_FIELDS: [(usize, Property); 4] = [
  (1, Property::Density),
  (2, Property::YoungModulus),
  (3, Property::PoissonRatio),
  (4, Property::YieldStress),
];

/// Labels that announce properties in MAT_018 cards, in the order they are
/// checked against a line.
const MAT_018_LABELS: &[(&str, Property)] = &[
  ("Material density", Property::Density),
  ("Young's Modulus", Property::YoungModulus),
  ("Shear Modulus", Property::ShearModulus),
  ("Bulk Modulus", Property::BulkModulus),
  ("Poisson's ratio", Property::PoissonRatio),
  ("Yield stress at offset", Property::YieldStress),
  ("Engineering ultimate stress", Property::UltimateStress),
  ("Elongation at failure", Property::Elongation),
  ("CTE.", Property::Cte),
];

/// Same as MAT_018's, plus the yield offset.
const MAT_098_LABELS: &[(&str, Property)] = &[
  ("Material density", Property::Density),
  ("Young's Modulus", Property::YoungModulus),
  ("Shear Modulus", Property::ShearModulus),
  ("Bulk Modulus", Property::BulkModulus),
  ("Poisson's ratio", Property::PoissonRatio),
  ("Yield stress at offset", Property::YieldStress),
  ("Engineering ultimate stress", Property::UltimateStress),
  ("Elongation at failure", Property::Elongation),
  ("CTE.", Property::Cte),
  ("Yield offset", Property::YieldOffset),
];

/// A decoder might respond this when consuming a line.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineResponse {
  /// The line was useless.
  Useless,
  /// The line gave us the material name.
  Name,
  /// The line gave us a property.
  Property(Property),
  /// The line was a positional data line.
  DataLine,
}

/// All section decoders must implement this trait.
pub trait CardDecoder {
  /// The format this decoder was made for.
  fn format(&self) -> CardFormat;

  /// Consumes a line of the section.
  fn consume(&mut self, line: &str) -> LineResponse;

  /// Finishes up. Returns nothing if the section never told us its name.
  fn finish(self: Box<Self>) -> Option<MaterialRecord>;
}

impl CardFormat {
  /// Instantiates the section decoder for this format.
  pub fn init_decoder(&self) -> Box<dyn CardDecoder> {
    return match self {
      Self::Mat018 => Box::new(LabelDecoder::new(*self, MAT_018_LABELS)),
      Self::Mat024 => Box::new(DataLineDecoder::new(*self)),
      Self::Mat098 => Box::new(LabelDecoder::new(*self, MAT_098_LABELS)),
    };
  }
}

/// Checks whether a line carries a material name, and returns it.
fn detect_name(format: CardFormat, line: &str) -> Option<String> {
  if !line.starts_with(NAME_PREFIX) {
    return None;
  }
  let name = line.trim().get(NAME_PREFIX.len()..).unwrap_or("").trim();
  if name.is_empty() {
    return None;
  }
  if format.name_exclusions().iter().any(|x| name.contains(x)) {
    return None;
  }
  return Some(name.to_string());
}

/// Builds a record out of what a decoder collected.
fn build_record(
  format: CardFormat,
  name: Option<String>,
  properties: BTreeMap<Property, String>
) -> Option<MaterialRecord> {
  let mut record = MaterialRecord::new(format, name?);
  record.properties = properties;
  return Some(record);
}

/// Decodes cards whose properties are announced by a label on their own line,
/// followed by the value somewhere in the same line. MAT_018 and MAT_098.
pub struct LabelDecoder {
  /// The format being decoded.
  format: CardFormat,
  /// The labels to look for, and what they mean.
  labels: &'static [(&'static str, Property)],
  /// The name, once found.
  name: Option<String>,
  /// The properties found so far.
  properties: BTreeMap<Property, String>,
}

impl LabelDecoder {
  /// Instantiates a decoder for a format with a given label table.
  pub fn new(
    format: CardFormat,
    labels: &'static [(&'static str, Property)]
  ) -> Self {
    return Self {
      format,
      labels,
      name: None,
      properties: BTreeMap::new(),
    };
  }
}

impl CardDecoder for LabelDecoder {
  fn format(&self) -> CardFormat {
    return self.format;
  }

  fn consume(&mut self, line: &str) -> LineResponse {
    let mut resp = LineResponse::Useless;
    if self.name.is_none() {
      if let Some(name) = detect_name(self.format, line) {
        self.name = Some(name);
        resp = LineResponse::Name;
      }
    }
    // only the first matching label counts
    let label = self.labels.iter().find(|(l, _)| line.contains(l));
    if let Some((_, prop)) = label {
      if let Some(value) = scan_decimal(line) {
        self.properties.insert(*prop, value);
        resp = LineResponse::Property(*prop);
      } else {
        debug!("Found label for {} but no value in \"{}\".", prop, line);
      }
    }
    return resp;
  }

  fn finish(self: Box<Self>) -> Option<MaterialRecord> {
    return build_record(self.format, self.name, self.properties);
  }
}

/// Decodes cards whose properties come in a comma-separated data line, by
/// position. MAT_024.
pub struct DataLineDecoder {
  /// The format being decoded.
  format: CardFormat,
  /// The name, once found.
  name: Option<String>,
  /// The properties found so far.
  properties: BTreeMap<Property, String>,
}

impl DataLineDecoder {
  /// Instantiates a decoder.
  pub fn new(format: CardFormat) -> Self {
    return Self {
      format,
      name: None,
      properties: BTreeMap::new(),
    };
  }
}

/// Checks whether a trimmed line looks like a data line: a placeholder, or an
/// integer material ID followed by a comma.
fn is_data_line(trimmed: &str) -> bool {
  if trimmed.starts_with(PLACEHOLDER_DATA_PREFIX) {
    return true;
  }
  let id_len = trimmed.bytes().take_while(u8::is_ascii_digit).count();
  return id_len > 0 && trimmed[id_len..].starts_with(',');
}

impl CardDecoder for DataLineDecoder {
  fn format(&self) -> CardFormat {
    return self.format;
  }

  fn consume(&mut self, line: &str) -> LineResponse {
    let mut resp = LineResponse::Useless;
    if self.name.is_none() {
      if let Some(name) = detect_name(self.format, line) {
        self.name = Some(name);
        resp = LineResponse::Name;
      }
    }
    let trimmed = line.trim();
    if !is_data_line(trimmed) {
      return resp;
    }
    let values = trimmed.split(',').map(str::trim).collect::<Vec<_>>();
    if values.len() < MIN_DATA_FIELDS {
      debug!("Data line with only {} fields: \"{}\"", values.len(), trimmed);
      return resp;
    }
    for (pos, prop) in DATA_LINE_FIELDS {
      if !values[pos].is_empty() {
        self.properties.insert(prop, normalize_exponent(values[pos]));
      }
    }
    return LineResponse::DataLine;
  }

  fn finish(self: Box<Self>) -> Option<MaterialRecord> {
    return build_record(self.format, self.name, self.properties);
  }
}

/// Decodes a single section (the text after a marker, up to the next one).
pub fn decode_section(format: CardFormat, section: &str) -> Option<MaterialRecord> {
  let mut decoder = format.init_decoder();
  for line in section.lines() {
    decoder.consume(line);
  }
  return decoder.finish();
}

/// Splits content on a format's marker and decodes every section. Whatever
/// comes before the first marker is preamble and is skipped, as are blank
/// sections and sections that never name their material.
pub fn parse_sections(content: &str, format: CardFormat) -> Vec<MaterialRecord> {
  let mut records = Vec::new();
  for (i, section) in content.split(format.marker()).enumerate().skip(1) {
    if section.trim().is_empty() {
      continue;
    }
    match decode_section(format, section) {
      Some(rec) => records.push(rec),
      None => debug!("Section {} of a {} file has no name.", i, format),
    }
  }
  return records;
}

/// Detects the format of some content and decodes all its sections. Content
/// with no known marker yields nothing.
pub fn parse_content(content: &str) -> Vec<MaterialRecord> {
  return match CardFormat::detect(content) {
    Some(format) => parse_sections(content, format),
    None => Vec::new(),
  };
}

/// Reads and parses a card file, tagging each record with where it came from.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialRecord>, CardError> {
  let path = path.as_ref();
  let bytes = fs::read(path)
    .map_err(|e| CardError::Read(path.to_path_buf(), e))?;
  let content = decode_lossy(&bytes);
  let mut records = parse_content(&content);
  let file_name = path.file_name()
    .map(|s| s.to_string_lossy().into_owned());
  // relative paths like "FILE.TXT" have an empty parent
  let dir_name = path.parent()
    .and_then(|p| p.file_name())
    .map(|s| s.to_string_lossy().into_owned())
    .or_else(|| {
      fs::canonicalize(path).ok()?
        .parent()?
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
    });
  for rec in records.iter_mut() {
    rec.source_file = file_name.clone();
    rec.source_dir = dir_name.clone();
  }
  return Ok(records);
}
