use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use crate::receipts::domain::{Item, ItemSubmission, Receipt, ReceiptId, ReceiptSubmission};
use crate::receipts::repository::{ReceiptRepository, RepositoryError, ScoredReceipt};
use crate::receipts::scoring::{PointRule, ScoringEngine, ScoringError};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn item(description: &str, price: f64) -> Item {
    Item {
        short_description: Some(description.to_string()),
        price,
    }
}

pub(super) fn item_submission(description: &str, price: &str) -> ItemSubmission {
    ItemSubmission {
        short_description: Some(description.to_string()),
        price: Some(price.to_string()),
    }
}

/// Domain receipt used by most rule tests: the Target example worth 28
/// points under the standard rule set.
pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1),
        purchase_time: NaiveTime::from_hms_opt(13, 1, 0),
        items: Some(vec![
            item("Mountain Dew 12PK", 6.49),
            item("Emils Cheese Pizza", 12.25),
            item("Knorr Creamy Chicken", 1.26),
            item("Doritos Nacho Cheese", 3.35),
            item("   Klarbrunn 12-PK 12 FL OZ  ", 12.00),
        ]),
        total: "35.35".to_string(),
    }
}

/// Receipt with every optional field absent, for guard-path tests.
pub(super) fn bare_receipt(retailer: &str, total: &str) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: None,
        purchase_time: None,
        items: None,
        total: total.to_string(),
    }
}

/// Wire submission matching [`target_receipt`].
pub(super) fn submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: Some("Target".to_string()),
        purchase_date: Some("2022-01-01".to_string()),
        purchase_time: Some("13:01".to_string()),
        items: Some(vec![
            item_submission("Mountain Dew 12PK", "6.49"),
            item_submission("Emils Cheese Pizza", "12.25"),
            item_submission("Knorr Creamy Chicken", "1.26"),
            item_submission("Doritos Nacho Cheese", "3.35"),
            item_submission("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ]),
        total: Some("35.35".to_string()),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

pub(super) fn receipt_router_with_service(
    service: ReceiptService<MemoryRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ReceiptId, ScoredReceipt>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ReceiptRepository for MemoryRepository {
    fn insert(&self, id: ReceiptId, record: ScoredReceipt) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, record);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _id: ReceiptId, _record: ScoredReceipt) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoredReceipt>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

/// Stub rule returning a fixed number of points.
pub(super) struct FixedRule {
    pub(super) name: &'static str,
    pub(super) points: u64,
}

impl PointRule for FixedRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn calculate(&self, _receipt: &Receipt) -> Result<u64, ScoringError> {
        Ok(self.points)
    }
}

/// Stub rule that always fails, for propagation tests.
pub(super) struct FailingRule;

impl PointRule for FailingRule {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        Err(ScoringError::UnparsableTotal {
            value: receipt.total.clone(),
            source: "x".parse::<f64>().expect_err("never parses"),
        })
    }
}
