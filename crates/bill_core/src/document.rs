//! Typed shape of a persisted bill document
//!
//! One uploaded bill = one document. The store treats most of the document as
//! opaque; these types pin down only the fields the storage layer touches:
//! identifying headers, the per-category line items and subtotals, the grand
//! total, and the two timestamps.
//!
//! Items and subtotals are keyed by the category storage key (see
//! [`BillCategory::as_str`]); the typed accessors below go through the closed
//! enumeration so callers never spell a key by hand.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::BillCategory;

/// A single medical service line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_rate: Option<f64>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
            quantity: None,
            unit_rate: None,
        }
    }
}

/// Bill header and patient-identifying metadata
///
/// `patient_mrn`, `patient_name`, and `bill_number` are indexed by the store
/// and drive the lookup operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_mrn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultant: Option<String>,
}

/// One bill document as persisted in the collection
///
/// `id` is assigned by the database on insert and immutable afterwards.
/// `inserted_at` is stamped by the store at write time (ISO-8601) and never
/// mutated again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub bill_headers: BillHeaders,
    /// Line items grouped by category storage key
    #[serde(default)]
    pub items: BTreeMap<String, Vec<LineItem>>,
    /// Numeric subtotal per category storage key
    #[serde(default)]
    pub subtotals: BTreeMap<String, f64>,
    #[serde(default)]
    pub grand_total: f64,
    /// When the source data was extracted (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_date: Option<String>,
    /// When this document was written by the store (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<String>,
}

impl BillDocument {
    /// Line items for a category; empty when the category is absent
    pub fn items_for(&self, category: BillCategory) -> &[LineItem] {
        self.items
            .get(category.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Subtotal for a category; zero when the category is absent
    pub fn subtotal_for(&self, category: BillCategory) -> f64 {
        self.subtotals.get(category.as_str()).copied().unwrap_or(0.0)
    }

    /// Appends a line item under the given category
    pub fn push_item(&mut self, category: BillCategory, item: LineItem) {
        self.items
            .entry(category.as_str().to_string())
            .or_default()
            .push(item);
    }

    /// Recomputes per-category subtotals from the line items
    ///
    /// Each subtotal is the sum of its items' amounts, rounded to two decimal
    /// places. Categories without items get a zero subtotal.
    pub fn calculate_subtotals(&mut self) -> &BTreeMap<String, f64> {
        let mut subtotals = BTreeMap::new();
        for (category, items) in &self.items {
            let total: f64 = items.iter().map(|i| i.amount).sum();
            subtotals.insert(category.clone(), round2(total));
        }
        self.subtotals = subtotals;
        &self.subtotals
    }

    /// Recomputes the grand total as the sum of the subtotals
    ///
    /// Calculates subtotals first when they have not been derived yet.
    pub fn calculate_grand_total(&mut self) -> f64 {
        if self.subtotals.is_empty() {
            self.calculate_subtotals();
        }
        self.grand_total = round2(self.subtotals.values().sum());
        self.grand_total
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
