//! Parses a material card file and writes its records out as a CSV table and
//! a Markdown summary, next to the input unless told otherwise.

#![allow(clippy::needless_return)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{LevelFilter, error, info};
use mat_report::prelude::*;
use matcards::prelude::*;

/// File name of the CSV table.
const CSV_NAME: &str = "material_properties.csv";

/// File name of the Markdown summary.
const MD_NAME: &str = "material_properties_summary.md";

/// The arguments passed to the table builder.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about)]
struct Cli {
  /// Output extra/debug info while parsing.
  #[arg(short = 'v', long = "verbose")]
  verbose: bool,
  /// Directory to write the outputs to. If absent, the input's directory.
  #[arg(short = 'o', long = "out-dir")]
  out_dir: Option<PathBuf>,
  /// Report formatting settings.
  #[command(flatten)]
  options: ReportOptions,
  /// The card file to read. Relative paths, the default included, are
  /// resolved against the current working directory.
  #[arg(default_value = "FMAT98Z.TXT")]
  input: PathBuf,
}

/// Parses the input and writes both reports.
fn run(args: &Cli, out_dir: &Path) -> Result<(), Box<dyn Error>> {
  info!("Parsing materials...");
  let records = parse_file(&args.input)?;
  info!("Creating CSV table with {} materials...", records.len());
  let csv_out = BufWriter::new(File::create(out_dir.join(CSV_NAME))?);
  write_csv(csv_out, &records, &args.options)?;
  info!("Creating Markdown summary...");
  let md_out = BufWriter::new(File::create(out_dir.join(MD_NAME))?);
  write_markdown(md_out, &records, &args.options)?;
  info!("Files created:");
  info!("- {} (complete table)", CSV_NAME);
  info!("- {} (markdown summary)", MD_NAME);
  return Ok(());
}

fn main() {
  // init cli stuff
  let args = Cli::parse();
  let log_level = if args.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  env_logger::builder().filter_level(log_level).init();
  if !args.input.is_file() {
    error!("File {} not found!", args.input.display());
    std::process::exit(1);
  }
  let out_dir = args.out_dir.clone().unwrap_or_else(|| {
    args.input.parent()
      .filter(|p| !p.as_os_str().is_empty())
      .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
  });
  if let Err(e) = run(&args, &out_dir) {
    error!("{}", e);
    std::process::exit(1);
  }
}
