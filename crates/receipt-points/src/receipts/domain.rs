use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier handed back to callers after a receipt is scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Fresh collision-resistant identifier. Random on purpose: identifiers
    /// must not leak submission order.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchase receipt as the scoring rules consume it.
///
/// Date, time, and items are optional so every rule can be exercised against
/// partially-filled receipts; the intake layer only ever constructs complete
/// ones. Retailer and total are required text, matching the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_time: Option<NaiveTime>,
    pub items: Option<Vec<Item>>,
    pub total: String,
}

/// Single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub short_description: Option<String>,
    pub price: f64,
}

/// Inbound payload for `POST /receipts/process`.
///
/// Every field is optional at the serde layer so that completeness is decided
/// by intake validation, which can answer with a structured error body
/// instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ItemSubmission>>,
    #[serde(default)]
    pub total: Option<String>,
}

/// Line item as submitted over the wire; the price arrives as decimal text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}
