//! This module implements a rough classification of materials into families,
//! going by keywords in their names.

use std::collections::BTreeMap;
use std::fmt::Display;

use matcards::prelude::*;
use serde::{Deserialize, Serialize};

/// The material families we count in summaries.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
  Hash
)]
pub enum MaterialFamily {
  /// Aluminum alloys.
  Aluminum,
  /// Steels.
  Steel,
  /// Copper and brass alloys.
  CopperBrass,
  /// Titanium alloys.
  Titanium,
  /// Everything else.
  Other,
}

impl MaterialFamily {
  /// Returns all families, in the order names are checked against them.
  pub const fn all() -> &'static [Self] {
    return &[
      Self::Aluminum,
      Self::Steel,
      Self::CopperBrass,
      Self::Titanium,
      Self::Other,
    ];
  }

  /// Upper-case keywords that put a name in this family.
  pub const fn keywords(&self) -> &'static [&'static str] {
    return match self {
      Self::Aluminum => &["ALUMINUM"],
      Self::Steel => &["STEEL"],
      Self::CopperBrass => &["COPPER", "BRASS"],
      Self::Titanium => &["TITANIUM"],
      Self::Other => &[],
    };
  }

  /// The label used in summaries.
  pub const fn label(&self) -> &'static str {
    return match self {
      Self::Aluminum => "Aluminum alloys",
      Self::Steel => "Steel alloys",
      Self::CopperBrass => "Copper/Brass alloys",
      Self::Titanium => "Titanium alloys",
      Self::Other => "Other materials",
    };
  }

  /// Classifies a material name, case-insensitively. A name matching more
  /// than one family goes to the first one in `all()` order, so every name
  /// lands in exactly one family.
  pub fn classify(name: &str) -> Self {
    let upper = name.to_uppercase();
    return Self::all()
      .iter()
      .copied()
      .find(|fam| fam.keywords().iter().any(|k| upper.contains(k)))
      .unwrap_or(Self::Other);
  }
}

impl Display for MaterialFamily {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.label());
  }
}

/// Number of records per family.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyCounts {
  /// The counts. Families with no records are absent.
  counts: BTreeMap<MaterialFamily, usize>,
}

impl FamilyCounts {
  /// Counts the records in each family.
  pub fn tally(records: &[MaterialRecord]) -> Self {
    let mut counts: BTreeMap<MaterialFamily, usize> = BTreeMap::new();
    for rec in records {
      *counts.entry(MaterialFamily::classify(&rec.name)).or_default() += 1;
    }
    return Self { counts };
  }

  /// Returns the count for a family.
  pub fn get(&self, family: MaterialFamily) -> usize {
    return self.counts.get(&family).copied().unwrap_or(0);
  }

  /// Returns the total over all families.
  pub fn total(&self) -> usize {
    return self.counts.values().sum();
  }
}
