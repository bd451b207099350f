//! Read-model views returned by projection and aggregation queries

use serde::Deserialize;
use std::collections::BTreeMap;

use bill_core::{BillCategory, LineItem};

/// Line items and subtotal for one category of one bill
///
/// A category absent from the bill yields an empty item list and a zero
/// total rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategorySummary {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub total: f64,
}

/// Summed spending per category across all of a patient's bills
///
/// One summed field per known category (keyed by storage key) plus the summed
/// grand total. The store returns `None` instead of this record when the MRN
/// matches no bills.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatientSpending {
    #[serde(default)]
    pub grand_total: f64,
    /// Per-category sums keyed by category storage key
    #[serde(flatten)]
    pub category_totals: BTreeMap<String, f64>,
}

impl PatientSpending {
    /// Summed spending for one category; zero when no bill carried it
    pub fn total_for(&self, category: BillCategory) -> f64 {
        self.category_totals
            .get(category.as_str())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Collection-wide statistics
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionStatistics {
    pub total_bills: i64,
    pub total_revenue: f64,
    pub avg_bill_amount: f64,
}
