//! This library implements types and functions to pull material properties
//! out of the fixed-format material card text files that ship with some
//! LS-DYNA material libraries.
//!
//! Three card layouts are understood: MAT_018 (power law plasticity), MAT_024
//! (piecewise linear plasticity) and MAT_098 (simplified Johnson-Cook). Each
//! card is decoded into a flat record of raw numeric strings -- no unit
//! conversion, no plausibility checks.
//!
//! Supporting another layout means adding a variant to `CardFormat` and, if
//! its lines don't fit the existing decoders, a new `CardDecoder`.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::needless_return)]

pub mod aggregate;
pub mod error;
pub mod format;
pub mod parser;
pub mod record;
pub mod util;

/// Imports the most relevant exports from the library.
pub mod prelude {
  pub use super::aggregate::*;
  pub use super::error::*;
  pub use super::format::*;
  pub use super::parser::*;
  pub use super::record::*;
}
