//! Aggregation pipeline builders
//!
//! Pure constructors for the pipelines the store sends to the server, kept
//! separate so their shape can be tested without a running database.

use bson::{doc, Bson, Document};

use bill_core::BillCategory;

/// Pipeline summing every known subtotal category plus the grand total across
/// all bills for one MRN
///
/// Produces a single record with one summed field per category key and a
/// `grand_total` sum, or no record at all when the MRN matches no bills.
/// Bills missing a subtotal field contribute zero to that category's sum.
pub fn patient_spending_pipeline(mrn: &str) -> Vec<Document> {
    let mut group = doc! { "_id": Bson::Null };
    for category in BillCategory::ALL {
        group.insert(
            category.as_str(),
            doc! { "$sum": format!("${}", category.subtotals_path()) },
        );
    }
    group.insert("grand_total", doc! { "$sum": "$grand_total" });

    vec![
        doc! { "$match": { "bill_headers.patient_mrn": mrn } },
        doc! { "$group": group },
        doc! { "$project": { "_id": 0 } },
    ]
}

/// Collection-wide count / revenue / average pipeline
///
/// Produces no record at all on an empty collection.
pub fn statistics_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": {
            "_id": Bson::Null,
            "total_bills": { "$sum": 1 },
            "total_revenue": { "$sum": "$grand_total" },
            "avg_bill_amount": { "$avg": "$grand_total" },
        }},
        doc! { "$project": { "_id": 0 } },
    ]
}
