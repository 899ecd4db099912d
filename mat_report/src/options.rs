//! This module implements the knobs for customising report output.

use clap::Args;
use serde::{Deserialize, Serialize};

/// Display/formatting options for the reports.
#[derive(Clone, Debug, Serialize, Deserialize, Args)]
pub struct ReportOptions {
  /// The delimiter used in the CSV.
  #[arg(short = 'd', long = "delim", default_value = ",")]
  pub delim: char,
  /// How many records to show in the Markdown sample table.
  #[arg(long = "sample", default_value = "20")]
  pub sample_size: usize,
  /// Names longer than this many characters get cut in the Markdown table.
  #[arg(long = "name-width", default_value = "30")]
  pub name_width: usize,
  /// What to write in Markdown cells for properties that weren't found.
  #[arg(long = "blank", default_value = "N/A")]
  pub md_blank: String,
}

impl Default for ReportOptions {
  fn default() -> Self {
    return Self {
      delim: ',',
      sample_size: 20,
      name_width: 30,
      md_blank: "N/A".to_string(),
    };
  }
}
