//! The closed set of billing line-item categories
//!
//! Bill documents group their line items and subtotals under a fixed set of
//! category keys. Using an enumeration instead of free-form strings prevents a
//! mistyped category from silently matching nothing: unknown names fail at
//! parse time with [`CoreError::UnknownCategory`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A billing line-item grouping
///
/// The variant names map one-to-one onto the snake_case field keys used in the
/// persisted documents (`items.<key>` and `subtotals.<key>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillCategory {
    Medicines,
    RegulatedPricingDrugs,
    SurgicalConsumables,
    ImplantsDevices,
    DiagnosticsTests,
    Radiology,
    Consultation,
    Hospitalization,
    Packages,
    Administrative,
    Other,
}

impl BillCategory {
    /// Every known category, in stable order
    pub const ALL: [BillCategory; 11] = [
        BillCategory::Medicines,
        BillCategory::RegulatedPricingDrugs,
        BillCategory::SurgicalConsumables,
        BillCategory::ImplantsDevices,
        BillCategory::DiagnosticsTests,
        BillCategory::Radiology,
        BillCategory::Consultation,
        BillCategory::Hospitalization,
        BillCategory::Packages,
        BillCategory::Administrative,
        BillCategory::Other,
    ];

    /// Returns the storage key for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            BillCategory::Medicines => "medicines",
            BillCategory::RegulatedPricingDrugs => "regulated_pricing_drugs",
            BillCategory::SurgicalConsumables => "surgical_consumables",
            BillCategory::ImplantsDevices => "implants_devices",
            BillCategory::DiagnosticsTests => "diagnostics_tests",
            BillCategory::Radiology => "radiology",
            BillCategory::Consultation => "consultation",
            BillCategory::Hospitalization => "hospitalization",
            BillCategory::Packages => "packages",
            BillCategory::Administrative => "administrative",
            BillCategory::Other => "other",
        }
    }

    /// Dotted field path to this category's line items
    pub fn items_path(&self) -> String {
        format!("items.{}", self.as_str())
    }

    /// Dotted field path to this category's subtotal
    pub fn subtotals_path(&self) -> String {
        format!("subtotals.{}", self.as_str())
    }

    /// Dotted field path to the `description` field of this category's items
    pub fn description_path(&self) -> String {
        format!("items.{}.description", self.as_str())
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::unknown_category(s))
    }
}
