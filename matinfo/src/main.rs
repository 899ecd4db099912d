//! Walks a directory for material card files, parses every one of them, and
//! prints a summary of what was found, grouped by card format.

#![allow(clippy::needless_return)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, error, info};
use mat_report::prelude::*;
use matcards::prelude::*;

/// The arguments passed to the summary tool.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
  /// Output extra/debug info while parsing.
  #[arg(short, long)]
  verbose: bool,
  /// Dump every record as JSON instead of printing the summary.
  #[arg(short, long)]
  json: bool,
  /// Directory to search for card files.
  #[arg(default_value = ".")]
  dir: PathBuf
}

fn main() -> io::Result<()> {
  // init cli stuff
  let args = Cli::parse();
  let log_level = if args.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  env_logger::builder().filter_level(log_level).init();
  if !args.dir.is_dir() {
    error!("Provided path either does not exist or is not a directory!");
    std::process::exit(1);
  }
  info!("Parsing all material files...");
  let records = match parse_all(&args.dir) {
    Ok(r) => r,
    Err(e) => {
      error!("{}", e);
      std::process::exit(1);
    }
  };
  let stdout = BufWriter::new(io::stdout().lock());
  if args.json {
    serde_json::to_writer_pretty(stdout, &records)?;
    println!();
  } else {
    write_summary(stdout, &records)?;
  }
  return Ok(());
}
