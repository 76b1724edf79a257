use serde::{Deserialize, Serialize};

use super::domain::{Receipt, ReceiptId};

/// Record persisted per submission: the receipt and its computed points.
/// Written exactly once; the score under an identifier never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: u64,
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations must tolerate concurrent `insert`/`fetch` calls without
/// losing writes, and a fetch following an insert on the same thread must
/// observe the record.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, id: ReceiptId, record: ScoredReceipt) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
