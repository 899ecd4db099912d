//! This module defines the material record -- what a single decoded card turns
//! into -- and the properties it can carry.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Serialize, Deserialize};

use crate::format::CardFormat;

/// The material properties a card can define.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
  Hash
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
  /// Mass density.
  Density,
  /// Young's (elastic) modulus.
  YoungModulus,
  /// Shear modulus.
  ShearModulus,
  /// Bulk modulus.
  BulkModulus,
  /// Poisson's ratio.
  PoissonRatio,
  /// Yield stress at the offset strain.
  YieldStress,
  /// Engineering ultimate stress.
  UltimateStress,
  /// Elongation at failure.
  Elongation,
  /// Coefficient of thermal expansion.
  Cte,
  /// The strain offset the yield stress was measured at.
  YieldOffset,
}

impl Property {
  /// Returns all properties, in output column order.
  pub const fn all() -> &'static [Self] {
    return &[
      Self::Density,
      Self::YoungModulus,
      Self::ShearModulus,
      Self::BulkModulus,
      Self::PoissonRatio,
      Self::YieldStress,
      Self::UltimateStress,
      Self::Elongation,
      Self::Cte,
      Self::YieldOffset,
    ];
  }

  /// The field name for this property.
  pub const fn key(&self) -> &'static str {
    return match self {
      Self::Density => "density",
      Self::YoungModulus => "young_modulus",
      Self::ShearModulus => "shear_modulus",
      Self::BulkModulus => "bulk_modulus",
      Self::PoissonRatio => "poisson_ratio",
      Self::YieldStress => "yield_stress",
      Self::UltimateStress => "ultimate_stress",
      Self::Elongation => "elongation",
      Self::Cte => "cte",
      Self::YieldOffset => "yield_offset",
    };
  }

  /// The CSV column label, units included.
  pub const fn csv_header(&self) -> &'static str {
    return match self {
      Self::Density => "Density (tonne/mm³)",
      Self::YoungModulus => "Young's Modulus (MPa)",
      Self::ShearModulus => "Shear Modulus (MPa)",
      Self::BulkModulus => "Bulk Modulus (MPa)",
      Self::PoissonRatio => "Poisson's Ratio",
      Self::YieldStress => "Yield Stress (MPa)",
      Self::UltimateStress => "Ultimate Stress (MPa)",
      Self::Elongation => "Elongation (%)",
      Self::Cte => "CTE (1/C)",
      Self::YieldOffset => "Yield Offset (%)",
    };
  }

  /// The short label used in Markdown tables.
  pub const fn md_header(&self) -> &'static str {
    return match self {
      Self::Density => "Density",
      Self::YoungModulus => "Young's E",
      Self::ShearModulus => "Shear E",
      Self::BulkModulus => "Bulk E",
      Self::PoissonRatio => "Poisson",
      Self::YieldStress => "Yield",
      Self::UltimateStress => "Ultimate",
      Self::Elongation => "Elongation",
      Self::Cte => "CTE",
      Self::YieldOffset => "Y.Offset",
    };
  }

  /// Looks up a property by its field name.
  pub fn from_key(key: &str) -> Option<Self> {
    return Self::all().iter().copied().find(|p| p.key() == key);
  }
}

impl Display for Property {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.key());
  }
}

/// A material decoded from one card section. Values are kept exactly as they
/// were written, save for the exponent marker.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MaterialRecord {
  /// The layout of the card this came from.
  #[serde(rename = "type")]
  pub format: CardFormat,
  /// Description of the material model.
  pub description: &'static str,
  /// The material name, taken from the card's comment lines.
  pub name: String,
  /// The properties found in the card. Absent means not found.
  #[serde(flatten)]
  pub properties: BTreeMap<Property, String>,
  /// Name of the file the card was read from.
  pub source_file: Option<String>,
  /// Name of the directory containing that file.
  pub source_dir: Option<String>,
}

impl MaterialRecord {
  /// Creates a record with no properties and no source information.
  pub fn new(format: CardFormat, name: String) -> Self {
    return Self {
      format,
      description: format.description(),
      name,
      properties: BTreeMap::new(),
      source_file: None,
      source_dir: None,
    };
  }

  /// Returns the value of a property, if it was found.
  pub fn get(&self, prop: Property) -> Option<&str> {
    return self.properties.get(&prop).map(String::as_str);
  }

  /// Looks up any field by its name, including the non-property ones (type,
  /// description, name, source_file and source_dir).
  pub fn field(&self, key: &str) -> Option<&str> {
    return match key {
      "type" => Some(self.format.type_code()),
      "description" => Some(self.description),
      "name" => Some(self.name.as_str()),
      "source_file" => self.source_file.as_deref(),
      "source_dir" => self.source_dir.as_deref(),
      _ => Property::from_key(key).and_then(|p| self.get(p)),
    };
  }
}
