//! This module implements walking a directory tree for card files and parsing
//! all of them into a single sequence of records.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use walkdir::WalkDir;

use crate::error::CardError;
use crate::parser::parse_file;
use crate::record::MaterialRecord;

/// The extension card files have, in any case.
pub const CARD_EXTENSION: &str = "txt";

/// Checks whether a path has the card file extension, ignoring case.
pub fn is_card_file(path: &Path) -> bool {
  return path.extension()
    .and_then(|e| e.to_str())
    .is_some_and(|e| e.eq_ignore_ascii_case(CARD_EXTENSION));
}

/// Recursively finds card files under a directory, following symbolic links.
/// Entries are visited in file name order, and each file is listed once even
/// if reachable through more than one path (e.g. a link and its target). Fails
/// only if the root itself can't be read.
pub fn find_card_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, CardError> {
  let mut seen: BTreeSet<PathBuf> = BTreeSet::new();
  let mut files: Vec<PathBuf> = Vec::new();
  for entry in WalkDir::new(root.as_ref())
    .follow_links(true)
    .sort_by_file_name() {
    let entry = match entry {
      Ok(e) => e,
      Err(e) if e.depth() == 0 => return Err(e.into()),
      Err(e) => {
        warn!("Skipping unreadable entry: {}", e);
        continue;
      }
    };
    if !entry.file_type().is_file() || !is_card_file(entry.path()) {
      continue;
    }
    let resolved = fs::canonicalize(entry.path())
      .unwrap_or_else(|_| entry.path().to_path_buf());
    if seen.insert(resolved) {
      files.push(entry.into_path());
    }
  }
  return Ok(files);
}

/// Parses a list of card files in order. Files that can't be read are logged
/// and skipped.
pub fn parse_files(files: &[PathBuf]) -> Vec<MaterialRecord> {
  return files.iter().fold(Vec::new(), |mut all, path| {
    let shown = path.file_name()
      .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    info!("Processing: {}", shown);
    match parse_file(path) {
      Ok(records) => {
        info!("  Found {} materials", records.len());
        all.extend(records);
      },
      Err(e) => error!("{}", e),
    }
    all
  });
}

/// Finds and parses every card file under a directory.
pub fn parse_all<P: AsRef<Path>>(root: P) -> Result<Vec<MaterialRecord>, CardError> {
  let files = find_card_files(root)?;
  info!("Found {} material files to process...", files.len());
  return Ok(parse_files(&files));
}
