//! Contains the error type for writing reports.

use std::error::Error;
use std::fmt::Display;
use std::io;

/// Errors when writing a report.
#[derive(Debug, derive_more::From)]
pub enum ReportError {
  /// Writing to the output failed.
  Io(io::Error),
  /// The CSV writer complained.
  Csv(csv::Error),
  /// The delimiter can't be written as a single byte.
  #[from(ignore)]
  BadDelimiter(char),
}

impl Display for ReportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      Self::Io(e) => e.fmt(f),
      Self::Csv(e) => e.fmt(f),
      Self::BadDelimiter(c) => {
        write!(f, "delimiter {:?} must be a single-byte character", c)
      },
    };
  }
}

impl Error for ReportError {}
