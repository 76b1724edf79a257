mod rules;

pub use rules::{
    ItemCountRule, ItemDescriptionRule, OddDayRule, QuarterMultipleRule, RetailerNameRule,
    RoundDollarRule, TimeRangeRule,
};

use super::domain::Receipt;
use serde::Serialize;

/// One independent scoring heuristic.
///
/// Implementations are pure functions of the receipt: no shared state, no
/// side effects, safe to run concurrently. A rule that cannot evaluate a
/// missing sub-field recovers with `Ok(0)`; the two total-amount rules that
/// assume well-formed input surface a typed error instead (see
/// [`ScoringError`]).
pub trait PointRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError>;
}

/// Failure raised by rules that do not guard their input.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("receipt total '{value}' is not a numeric amount")]
    UnparsableTotal {
        value: String,
        source: std::num::ParseFloatError,
    },
}

/// Points contributed by a single rule, for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleScore {
    pub rule: &'static str,
    pub points: u64,
}

/// Applies an ordered set of rules to a receipt and sums their points.
///
/// The engine holds no per-call state; one instance can serve every request.
/// Rule order never changes the sum, only the breakdown ordering.
pub struct ScoringEngine {
    rules: Vec<Box<dyn PointRule>>,
}

impl ScoringEngine {
    /// Engine loaded with the seven production rules.
    pub fn standard() -> Self {
        Self::with_rules(standard_rules())
    }

    /// Injection seam so tests can compose stub rules.
    pub fn with_rules(rules: Vec<Box<dyn PointRule>>) -> Self {
        Self { rules }
    }

    /// Total points for a receipt. A failing rule propagates; it is never
    /// absorbed into a partial sum.
    pub fn score(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        self.rules.iter().map(|rule| rule.calculate(receipt)).sum()
    }

    /// Per-rule contributions in evaluation order.
    pub fn breakdown(&self, receipt: &Receipt) -> Result<Vec<RuleScore>, ScoringError> {
        self.rules
            .iter()
            .map(|rule| {
                Ok(RuleScore {
                    rule: rule.name(),
                    points: rule.calculate(receipt)?,
                })
            })
            .collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// The production rule set, in canonical order.
pub fn standard_rules() -> Vec<Box<dyn PointRule>> {
    vec![
        Box::new(RetailerNameRule),
        Box::new(RoundDollarRule),
        Box::new(QuarterMultipleRule),
        Box::new(ItemCountRule),
        Box::new(ItemDescriptionRule),
        Box::new(OddDayRule),
        Box::new(TimeRangeRule),
    ]
}
