use std::sync::Arc;

use serde::Serialize;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::{ReceiptRepository, RepositoryError, ScoredReceipt};
use super::scoring::{RuleScore, ScoringEngine, ScoringError};
use super::validation::{self, ValidationError};

/// Service composing intake validation, the scoring engine, and storage.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(repository, ScoringEngine::standard())
    }

    pub fn with_engine(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self { repository, engine }
    }

    /// Validate, score, and persist a submission, returning the identifier
    /// under which the score can be retrieved.
    pub fn process(&self, submission: ReceiptSubmission) -> Result<ReceiptId, ReceiptServiceError> {
        let receipt = validation::receipt_from_submission(submission)?;
        let points = self.engine.score(&receipt)?;

        let id = ReceiptId::generate();
        self.repository
            .insert(id.clone(), ScoredReceipt { receipt, points })?;

        Ok(id)
    }

    /// Points recorded for a previously processed receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record.points)
    }

    /// Score a submission without persisting it.
    pub fn preview(&self, submission: ReceiptSubmission) -> Result<ScorePreview, ReceiptServiceError> {
        let receipt = validation::receipt_from_submission(submission)?;
        let components = self.engine.breakdown(&receipt)?;
        let total = components.iter().map(|component| component.points).sum();
        Ok(ScorePreview { total, components })
    }
}

/// Non-persisted scoring result with its per-rule audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePreview {
    pub total: u64,
    pub components: Vec<RuleScore>,
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
