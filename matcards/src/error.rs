//! Contains the error type for reading material card files.

use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

/// Errors that can come up while reading card files.
#[derive(Debug, derive_more::From)]
pub enum CardError {
  /// A file could not be read.
  Read(PathBuf, io::Error),
  /// The directory walk hit an entry it couldn't look at.
  Walk(walkdir::Error),
}

impl Display for CardError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      Self::Read(p, e) => write!(f, "error reading {}: {}", p.display(), e),
      Self::Walk(e) => write!(f, "error walking directory: {}", e),
    };
  }
}

impl Error for CardError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    return match self {
      Self::Read(_, e) => Some(e),
      Self::Walk(e) => Some(e),
    };
  }
}
