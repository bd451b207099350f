//! Integration tests for the bill store
//!
//! These tests run against a real MongoDB instance managed by testcontainers
//! and therefore need a working Docker daemon. They are ignored by default;
//! run them with `cargo test -p bill_store -- --ignored`.

use bill_core::BillCategory;
use bill_store::{BillStore, MatchMode, StoreConfig};
use test_utils::{BillDocumentBuilder, PatientFixtures, TestMongo};

/// A well-formed ObjectId hex string that matches nothing
const ABSENT_ID: &str = "665f1c0a9d3e4b6f8a2d1c35";

async fn connect_store(mongo: &TestMongo, database: &str) -> BillStore {
    let uri = mongo.connection_uri().await.expect("container uri");
    let config = StoreConfig::new(uri)
        .database_name(database)
        .collection_name("bills");
    BillStore::connect(config).await.expect("connect store")
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn insert_then_fetch_round_trips_with_timestamp() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_round_trip").await;

    let mut bill = BillDocumentBuilder::new()
        .with_item(BillCategory::Medicines, "Paracetamol 500mg", 12.5)
        .with_item(BillCategory::Consultation, "OPD visit", 40.0)
        .build();
    assert!(bill.inserted_at.is_none());

    let id = store.insert_bill(&mut bill).await.expect("insert");
    assert!(bill.inserted_at.is_some(), "insert stamps the input in place");

    let mut fetched = store
        .get_bill_by_id(&id)
        .await
        .expect("fetch")
        .expect("document exists");
    assert!(fetched.id.is_some());

    // Equal to the input plus the added timestamp and assigned id.
    fetched.id = None;
    assert_eq!(fetched, bill);

    store.shutdown().await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn malformed_id_is_always_invalid_identifier() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_bad_id").await;

    let err = store.get_bill_by_id("not-a-hex-id").await.unwrap_err();
    assert!(err.is_invalid_identifier());

    let err = store
        .get_category_summary("123", BillCategory::Medicines)
        .await
        .unwrap_err();
    assert!(err.is_invalid_identifier());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn well_formed_absent_id_is_none_not_an_error() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_absent_id").await;

    assert!(store.get_bill_by_id(ABSENT_ID).await.expect("query").is_none());
    assert!(store
        .get_medicine_summary(ABSENT_ID)
        .await
        .expect("query")
        .is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn lookup_by_mrn_and_name() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_lookup").await;

    let mut bill = BillDocumentBuilder::new().build();
    store.insert_bill(&mut bill).await.expect("insert");
    let mut other = BillDocumentBuilder::new()
        .with_mrn(PatientFixtures::other_mrn())
        .with_patient_name(PatientFixtures::other_name())
        .build();
    store.insert_bill(&mut other).await.expect("insert");

    let bills = store
        .get_bills_by_patient_mrn(PatientFixtures::mrn())
        .await
        .expect("query");
    assert_eq!(bills.len(), 1);

    assert!(store
        .get_bills_by_patient_mrn("NO-SUCH-MRN")
        .await
        .expect("query")
        .is_empty());

    // Case-insensitive substring match on the name.
    let bills = store
        .get_bills_by_patient_name("jane", MatchMode::Literal)
        .await
        .expect("query");
    assert_eq!(bills.len(), 1);
    assert_eq!(
        bills[0].bill_headers.patient_name.as_deref(),
        Some(PatientFixtures::name())
    );

    // A regex metacharacter in literal mode matches itself, not "any char".
    let bills = store
        .get_bills_by_patient_name("john q. public", MatchMode::Literal)
        .await
        .expect("query");
    assert_eq!(bills.len(), 1);
    let bills = store
        .get_bills_by_patient_name("john qX public", MatchMode::Literal)
        .await
        .expect("query");
    assert!(bills.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn category_summary_defaults_to_empty_for_absent_category() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_summary").await;

    let mut bill = BillDocumentBuilder::new()
        .with_item(BillCategory::Consultation, "OPD visit", 40.0)
        .build();
    let id = store.insert_bill(&mut bill).await.expect("insert");

    let summary = store
        .get_category_summary(&id, BillCategory::Medicines)
        .await
        .expect("query")
        .expect("document exists");
    assert!(summary.items.is_empty());
    assert_eq!(summary.total, 0.0);

    let summary = store
        .get_category_summary(&id, BillCategory::Consultation)
        .await
        .expect("query")
        .expect("document exists");
    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.items[0].description, "OPD visit");
    assert_eq!(summary.total, 40.0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn patient_spending_sums_across_bills() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_spending").await;

    assert!(store
        .get_patient_total_spending("M001")
        .await
        .expect("query")
        .is_none());

    for (medicines, consultation) in [(60.0, 40.0), (150.0, 50.0), (300.0, 0.0)] {
        let mut builder = BillDocumentBuilder::new()
            .with_item(BillCategory::Medicines, "medicine", medicines);
        if consultation > 0.0 {
            builder = builder.with_item(BillCategory::Consultation, "visit", consultation);
        }
        let mut bill = builder.build();
        store.insert_bill(&mut bill).await.expect("insert");
    }

    let spending = store
        .get_patient_total_spending("M001")
        .await
        .expect("query")
        .expect("patient has bills");
    assert_eq!(spending.grand_total, 600.0);
    assert_eq!(spending.total_for(BillCategory::Medicines), 510.0);
    assert_eq!(spending.total_for(BillCategory::Consultation), 90.0);
    assert_eq!(spending.total_for(BillCategory::Radiology), 0.0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn statistics_sentinel_and_average() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_statistics").await;

    assert!(store.get_statistics().await.expect("query").is_none());

    for total in [100.0, 200.0, 300.0] {
        let mut bill = BillDocumentBuilder::new().with_grand_total(total).build();
        store.insert_bill(&mut bill).await.expect("insert");
    }

    let stats = store
        .get_statistics()
        .await
        .expect("query")
        .expect("collection is non-empty");
    assert_eq!(stats.total_bills, 3);
    assert_eq!(stats.total_revenue, 600.0);
    assert_eq!(stats.avg_bill_amount, 200.0);
    assert_eq!(
        stats.avg_bill_amount,
        stats.total_revenue / stats.total_bills as f64
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn keyword_search_over_item_descriptions() {
    let mongo = TestMongo::start().await.expect("start mongo");
    let store = connect_store(&mongo, "bills_search").await;

    let mut bill = BillDocumentBuilder::new()
        .with_item(BillCategory::Medicines, "Paracetamol 500mg", 12.5)
        .with_item(BillCategory::DiagnosticsTests, "Complete Blood Count (CBC)", 30.0)
        .build();
    store.insert_bill(&mut bill).await.expect("insert");

    // Case-insensitive match inside the medicine descriptions.
    let hits = store
        .search_medicine_across_bills("paracetamol", MatchMode::Literal)
        .await
        .expect("query");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].items_for(BillCategory::Medicines).len(), 1);

    // Parenthesized literal input is escaped, not treated as a regex group.
    let hits = store
        .search_diagnostic_tests_across_bills("(cbc)", MatchMode::Literal)
        .await
        .expect("query");
    assert_eq!(hits.len(), 1);

    // Pattern mode keeps regex semantics for callers that want them.
    let hits = store
        .search_medicine_across_bills("para.*mol", MatchMode::Pattern)
        .await
        .expect("query");
    assert_eq!(hits.len(), 1);

    // A medicine keyword does not match diagnostic descriptions.
    let hits = store
        .search_diagnostic_tests_across_bills("paracetamol", MatchMode::Literal)
        .await
        .expect("query");
    assert!(hits.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn reconnecting_reuses_existing_indexes() {
    let mongo = TestMongo::start().await.expect("start mongo");

    // Index bootstrap must be idempotent across sessions.
    let store = connect_store(&mongo, "bills_reconnect").await;
    store.shutdown().await;
    let store = connect_store(&mongo, "bills_reconnect").await;
    store.ping().await.expect("server reachable");
    store.shutdown().await;
}
