use chrono::{Datelike, NaiveTime};

use super::super::domain::Receipt;
use super::{PointRule, ScoringError};

fn parse_total(raw: &str) -> Result<f64, ScoringError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| ScoringError::UnparsableTotal {
            value: raw.to_string(),
            source,
        })
}

/// One point per alphanumeric character in the retailer name.
pub struct RetailerNameRule;

impl PointRule for RetailerNameRule {
    fn name(&self) -> &'static str {
        "retailer-name"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        Ok(receipt
            .retailer
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .count() as u64)
    }
}

/// 50 points when the total is a whole dollar amount.
///
/// Assumes the total parses; a malformed amount is a hard error here, not a
/// zero score.
pub struct RoundDollarRule;

impl PointRule for RoundDollarRule {
    fn name(&self) -> &'static str {
        "round-dollar"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        let amount = parse_total(&receipt.total)?;
        Ok(if amount % 1.0 == 0.0 { 50 } else { 0 })
    }
}

/// 25 points when the total is a multiple of a quarter dollar.
pub struct QuarterMultipleRule;

const QUARTER: f64 = 0.25;

impl PointRule for QuarterMultipleRule {
    fn name(&self) -> &'static str {
        "quarter-multiple"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        // Unlike the round-dollar rule, an unparsable total scores zero.
        match receipt.total.trim().parse::<f64>() {
            Ok(amount) if amount % QUARTER == 0.0 => Ok(25),
            _ => Ok(0),
        }
    }
}

/// 5 points for every two items on the receipt.
pub struct ItemCountRule;

impl PointRule for ItemCountRule {
    fn name(&self) -> &'static str {
        "item-count"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        let count = receipt.items.as_ref().map_or(0, Vec::len) as u64;
        Ok((count / 2) * 5)
    }
}

/// `ceil(price * 0.2)` points for each item whose trimmed description length
/// is a multiple of three. Items without a description contribute nothing.
pub struct ItemDescriptionRule;

impl PointRule for ItemDescriptionRule {
    fn name(&self) -> &'static str {
        "item-description"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        let Some(items) = receipt.items.as_ref() else {
            return Ok(0);
        };

        let points = items
            .iter()
            .filter_map(|item| {
                item.short_description
                    .as_deref()
                    .map(|description| (description, item.price))
            })
            .map(|(description, price)| {
                if description.trim().chars().count() % 3 == 0 {
                    (price * 0.2).ceil() as u64
                } else {
                    0
                }
            })
            .sum();

        Ok(points)
    }
}

/// 6 points when the purchase day of month is odd.
pub struct OddDayRule;

impl PointRule for OddDayRule {
    fn name(&self) -> &'static str {
        "odd-day"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        match receipt.purchase_date {
            Some(date) if date.day() % 2 == 1 => Ok(6),
            _ => Ok(0),
        }
    }
}

/// 10 points for purchases strictly between 14:00 and 16:00.
pub struct TimeRangeRule;

impl PointRule for TimeRangeRule {
    fn name(&self) -> &'static str {
        "time-range"
    }

    fn calculate(&self, receipt: &Receipt) -> Result<u64, ScoringError> {
        let Some(time) = receipt.purchase_time else {
            return Ok(0);
        };

        // Both bounds are exclusive: 14:00 and 16:00 themselves score zero.
        match (
            NaiveTime::from_hms_opt(14, 0, 0),
            NaiveTime::from_hms_opt(16, 0, 0),
        ) {
            (Some(start), Some(end)) if time > start && time < end => Ok(10),
            _ => Ok(0),
        }
    }
}
