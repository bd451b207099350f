//! Test data builders
//!
//! Builder for constructing bill documents with sensible defaults; tests
//! specify only the fields they care about.

use bill_core::{BillCategory, BillDocument, BillHeaders, LineItem};

use crate::fixtures::{BillFixtures, PatientFixtures};

/// Builder for test bill documents
///
/// `build()` derives subtotals and the grand total from the items added, so a
/// built document is internally consistent the way the extraction pipeline
/// would produce it.
pub struct BillDocumentBuilder {
    headers: BillHeaders,
    items: Vec<(BillCategory, LineItem)>,
    extraction_date: Option<String>,
    grand_total: Option<f64>,
}

impl Default for BillDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillDocumentBuilder {
    /// Creates a builder with default patient and bill metadata
    pub fn new() -> Self {
        Self {
            headers: BillHeaders {
                patient_mrn: Some(PatientFixtures::mrn().to_string()),
                patient_name: Some(PatientFixtures::name().to_string()),
                bill_number: Some(BillFixtures::bill_number().to_string()),
                hospital_name: Some(BillFixtures::hospital_name().to_string()),
                ..Default::default()
            },
            items: Vec::new(),
            extraction_date: Some(BillFixtures::extraction_date().to_string()),
            grand_total: None,
        }
    }

    /// Sets the patient MRN
    pub fn with_mrn(mut self, mrn: impl Into<String>) -> Self {
        self.headers.patient_mrn = Some(mrn.into());
        self
    }

    /// Sets the patient name
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.headers.patient_name = Some(name.into());
        self
    }

    /// Sets the bill number
    pub fn with_bill_number(mut self, number: impl Into<String>) -> Self {
        self.headers.bill_number = Some(number.into());
        self
    }

    /// Sets the extraction date (ISO-8601)
    pub fn with_extraction_date(mut self, date: impl Into<String>) -> Self {
        self.extraction_date = Some(date.into());
        self
    }

    /// Adds a line item under the given category
    pub fn with_item(
        mut self,
        category: BillCategory,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        self.items.push((category, LineItem::new(description, amount)));
        self
    }

    /// Overrides the derived grand total
    pub fn with_grand_total(mut self, total: f64) -> Self {
        self.grand_total = Some(total);
        self
    }

    /// Builds the document, deriving subtotals and the grand total
    pub fn build(self) -> BillDocument {
        let mut bill = BillDocument {
            bill_headers: self.headers,
            extraction_date: self.extraction_date,
            ..Default::default()
        };
        for (category, item) in self.items {
            bill.push_item(category, item);
        }
        bill.calculate_grand_total();
        if let Some(total) = self.grand_total {
            bill.grand_total = total;
        }
        bill
    }
}
