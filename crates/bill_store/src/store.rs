//! The bill store session object
//!
//! One `BillStore` is constructed per process and shared by reference; the
//! driver owns connection pooling and thread-safety. Every operation maps to
//! exactly one database call and propagates driver failures unmodified.

use bson::{doc, oid::ObjectId, Document};
use chrono::Local;
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::{debug, info};

use bill_core::{BillCategory, BillDocument};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::pattern::{regex_filter, MatchMode};
use crate::pipeline;
use crate::views::{CategorySummary, CollectionStatistics, PatientSpending};

/// Field paths indexed at startup
const INDEXED_PATHS: [&str; 3] = [
    "bill_headers.patient_mrn",
    "bill_headers.bill_number",
    "extraction_date",
];

/// Session object bound to one bill collection
///
/// Construct once with [`BillStore::connect`], reuse across calls, and close
/// with [`BillStore::shutdown`]. The store holds no mutable state beyond the
/// connection handle.
#[derive(Debug, Clone)]
pub struct BillStore {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl BillStore {
    /// Opens the connection and prepares the collection
    ///
    /// Parses the connection string, pings the server, and ensures the three
    /// lookup indexes exist. Index creation is idempotent; repeating it
    /// against an already-initialized collection is safe.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] for an empty connection string
    /// and [`StoreError::Driver`] when the server is unreachable.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        if config.connection_uri.trim().is_empty() {
            return Err(StoreError::configuration("connection URI must not be empty"));
        }

        info!(
            database = %config.database_name,
            collection = %config.collection_name,
            "Connecting to bill store"
        );

        let client = Client::with_uri_str(&config.connection_uri).await?;
        let database = client.database(&config.database_name);
        let collection = database.collection::<Document>(&config.collection_name);

        let store = Self {
            client,
            database,
            collection,
        };
        store.ping().await?;
        store.ensure_indexes().await?;

        info!("Bill store connected");
        Ok(store)
    }

    /// Verifies the server is reachable
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Closes the underlying client
    pub async fn shutdown(self) {
        info!("Shutting down bill store");
        let BillStore { client, .. } = self;
        client.shutdown().await;
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let models: Vec<IndexModel> = INDEXED_PATHS
            .iter()
            .map(|path| {
                IndexModel::builder()
                    .keys(doc! { *path: 1 })
                    .options(IndexOptions::builder().name(index_name(path)).build())
                    .build()
            })
            .collect();

        self.collection.create_indexes(models).await?;
        debug!(paths = ?INDEXED_PATHS, "Lookup indexes ensured");
        Ok(())
    }

    /// Inserts a bill and returns the assigned identifier as a hex string
    ///
    /// Stamps `inserted_at` with the current local time (ISO-8601) onto the
    /// given document before writing; that stamp is the only mutation this
    /// store ever performs on a document.
    pub async fn insert_bill(&self, bill: &mut BillDocument) -> Result<String, StoreError> {
        bill.inserted_at = Some(Local::now().to_rfc3339());

        let document = bson::to_document(bill)?;
        let result = self.collection.insert_one(document).await?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string()))
    }

    /// Fetches one bill by its identifier
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidIdentifier`] when `id` is not a valid
    /// ObjectId hex string. A well-formed id that matches nothing is
    /// `Ok(None)`, not an error.
    pub async fn get_bill_by_id(&self, id: &str) -> Result<Option<BillDocument>, StoreError> {
        let oid = parse_object_id(id)?;
        let found = self.collection.find_one(doc! { "_id": oid }).await?;
        found
            .map(bson::from_document)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Fetches all bills for a patient MRN (exact match)
    ///
    /// Returned in the database's natural order; empty when none match.
    pub async fn get_bills_by_patient_mrn(
        &self,
        mrn: &str,
    ) -> Result<Vec<BillDocument>, StoreError> {
        self.find_bills(doc! { "bill_headers.patient_mrn": mrn })
            .await
    }

    /// Fetches bills whose patient name matches the input, case-insensitively
    ///
    /// `MatchMode::Literal` escapes the input and matches it as a substring;
    /// `MatchMode::Pattern` interprets it as a regular expression.
    pub async fn get_bills_by_patient_name(
        &self,
        name: &str,
        mode: MatchMode,
    ) -> Result<Vec<BillDocument>, StoreError> {
        self.find_bills(regex_filter("bill_headers.patient_name", name, mode))
            .await
    }

    /// Fetches only the medicines items and subtotal of one bill
    pub async fn get_medicine_summary(
        &self,
        id: &str,
    ) -> Result<Option<CategorySummary>, StoreError> {
        self.get_category_summary(id, BillCategory::Medicines).await
    }

    /// Fetches the items and subtotal of one category of one bill
    ///
    /// `Ok(None)` when no document matches the id. A category the document
    /// does not carry yields empty items and a zero total.
    pub async fn get_category_summary(
        &self,
        id: &str,
        category: BillCategory,
    ) -> Result<Option<CategorySummary>, StoreError> {
        let oid = parse_object_id(id)?;
        let projection = doc! {
            category.items_path(): 1,
            category.subtotals_path(): 1,
        };

        let found = self
            .collection
            .find_one(doc! { "_id": oid })
            .projection(projection)
            .await?;

        let Some(projected) = found else {
            return Ok(None);
        };
        let bill: BillDocument = bson::from_document(projected)?;

        Ok(Some(CategorySummary {
            items: bill.items_for(category).to_vec(),
            total: bill.subtotal_for(category),
        }))
    }

    /// Sums each category subtotal and the grand total across all bills for
    /// the given MRN
    ///
    /// `Ok(None)` when the MRN matches no bills, so "no bills" stays
    /// distinguishable from "bills summing to zero". Bills missing a subtotal
    /// field contribute zero to that category.
    pub async fn get_patient_total_spending(
        &self,
        mrn: &str,
    ) -> Result<Option<PatientSpending>, StoreError> {
        let mut cursor = self
            .collection
            .aggregate(pipeline::patient_spending_pipeline(mrn))
            .await?;

        let Some(record) = cursor.try_next().await? else {
            return Ok(None);
        };
        Ok(Some(bson::from_document(record)?))
    }

    /// Finds bills containing a medicine whose description matches the keyword
    ///
    /// Case-insensitive; returns whole bill documents, not just the matching
    /// line items.
    pub async fn search_medicine_across_bills(
        &self,
        keyword: &str,
        mode: MatchMode,
    ) -> Result<Vec<BillDocument>, StoreError> {
        self.search_category_items(BillCategory::Medicines, keyword, mode)
            .await
    }

    /// Finds bills containing a diagnostic test whose description matches the
    /// keyword
    pub async fn search_diagnostic_tests_across_bills(
        &self,
        keyword: &str,
        mode: MatchMode,
    ) -> Result<Vec<BillDocument>, StoreError> {
        self.search_category_items(BillCategory::DiagnosticsTests, keyword, mode)
            .await
    }

    /// Finds bills whose line-item descriptions in the given category match
    /// the keyword, case-insensitively
    pub async fn search_category_items(
        &self,
        category: BillCategory,
        keyword: &str,
        mode: MatchMode,
    ) -> Result<Vec<BillDocument>, StoreError> {
        self.find_bills(regex_filter(&category.description_path(), keyword, mode))
            .await
    }

    /// Collection-wide statistics: bill count, summed and average grand total
    ///
    /// `Ok(None)` on an empty collection.
    pub async fn get_statistics(&self) -> Result<Option<CollectionStatistics>, StoreError> {
        let mut cursor = self
            .collection
            .aggregate(pipeline::statistics_pipeline())
            .await?;

        let Some(record) = cursor.try_next().await? else {
            return Ok(None);
        };
        Ok(Some(bson::from_document(record)?))
    }

    async fn find_bills(&self, filter: Document) -> Result<Vec<BillDocument>, StoreError> {
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        documents
            .into_iter()
            .map(|d| bson::from_document(d).map_err(StoreError::from))
            .collect()
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::invalid_identifier(id))
}

fn index_name(path: &str) -> String {
    format!("idx_{}", path.replace('.', "_"))
}
