//! This module implements the differences between the known material card
//! layouts: how their sections are introduced, what they're called, and which
//! comment lines are boilerplate rather than material names.

use std::fmt::Display;

use serde::{Serialize, Deserialize};

/// The known material card layouts.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
  Hash
)]
#[non_exhaustive]
pub enum CardFormat {
  /// *MAT_POWER_LAW_PLASTICITY, a.k.a. MAT_018.
  #[serde(rename = "MAT_018")]
  Mat018,
  /// *MAT_PIECEWISE_LINEAR_PLASTICITY, a.k.a. MAT_024.
  #[serde(rename = "MAT_024")]
  Mat024,
  /// *MAT_SIMPLIFIED_JOHNSON_COOK, a.k.a. MAT_098.
  #[serde(rename = "MAT_098")]
  Mat098,
}

impl CardFormat {
  /// Returns all known formats, in the order they're tried when detecting
  /// the format of a file.
  pub const fn all() -> &'static [Self] {
    return &[Self::Mat018, Self::Mat024, Self::Mat098];
  }

  /// The keyword that starts every card section of this format.
  pub const fn marker(&self) -> &'static str {
    return match self {
      Self::Mat018 => "*MAT_POWER_LAW_PLASTICITY",
      Self::Mat024 => "*MAT_PIECEWISE_LINEAR_PLASTICITY",
      Self::Mat098 => "*MAT_SIMPLIFIED_JOHNSON_COOK",
    };
  }

  /// The material type code, as written in the output.
  pub const fn type_code(&self) -> &'static str {
    return match self {
      Self::Mat018 => "MAT_018",
      Self::Mat024 => "MAT_024",
      Self::Mat098 => "MAT_098",
    };
  }

  /// A human-readable description of the material model.
  pub const fn description(&self) -> &'static str {
    return match self {
      Self::Mat018 => "Power Law Plasticity",
      Self::Mat024 => "Piecewise Linear Plasticity",
      Self::Mat098 => "Simplified Johnson Cook",
    };
  }

  /// Comment lines containing any of these are boilerplate, not names.
  pub const fn name_exclusions(&self) -> &'static [&'static str] {
    return match self {
      Self::Mat018 => &["Power Law", "FC Units", "---"],
      Self::Mat024 => &["Piecewise", "tonne/mm^3", "---"],
      Self::Mat098 => &["Simplified", "FC Units", "---"],
    };
  }

  /// Detects the format of a file from its contents. If more than one marker
  /// is present, the first one in `all()` order wins.
  pub fn detect(content: &str) -> Option<Self> {
    return Self::all()
      .iter()
      .copied()
      .find(|fmt| content.contains(fmt.marker()));
  }
}

impl Display for CardFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.type_code());
  }
}
