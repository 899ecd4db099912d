//! This library renders decoded material records into reports: a CSV table of
//! every record, a Markdown summary with a sample and a breakdown by material
//! family, and a plain-text grouped summary for the terminal.

#![allow(clippy::needless_return)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod classify;
pub mod error;
pub mod markdown;
pub mod options;
pub mod summary;
pub mod table;

/// Imports the most relevant exports from the library.
pub mod prelude {
  pub use super::classify::*;
  pub use super::error::*;
  pub use super::markdown::*;
  pub use super::options::*;
  pub use super::summary::*;
  pub use super::table::*;
}

#[cfg(test)]
mod tests;
