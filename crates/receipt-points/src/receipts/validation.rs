use chrono::{NaiveDate, NaiveTime};

use super::domain::{Item, Receipt, ReceiptSubmission};

/// Structural problems detected before any rule runs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("retailer is required")]
    MissingRetailer,
    #[error("purchase date is required")]
    MissingPurchaseDate,
    #[error("purchase date '{0}' must use YYYY-MM-DD")]
    InvalidPurchaseDate(String),
    #[error("purchase time is required")]
    MissingPurchaseTime,
    #[error("purchase time '{0}' must use HH:MM")]
    InvalidPurchaseTime(String),
    #[error("items cannot be empty")]
    MissingItems,
    #[error("item price '{0}' is not a numeric amount")]
    InvalidItemPrice(String),
    #[error("total is required")]
    MissingTotal,
}

/// Convert an inbound submission into a complete domain receipt.
///
/// Everything the rules may dereference unconditionally is checked here;
/// the total's numeric content is deliberately not, since two rules own
/// that contract themselves.
pub(crate) fn receipt_from_submission(
    submission: ReceiptSubmission,
) -> Result<Receipt, ValidationError> {
    let retailer = submission
        .retailer
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::MissingRetailer)?;

    let purchase_date = parse_date(
        submission
            .purchase_date
            .ok_or(ValidationError::MissingPurchaseDate)?,
    )?;

    let purchase_time = parse_time(
        submission
            .purchase_time
            .ok_or(ValidationError::MissingPurchaseTime)?,
    )?;

    let raw_items = submission
        .items
        .filter(|items| !items.is_empty())
        .ok_or(ValidationError::MissingItems)?;

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        let price = match raw.price {
            // Price was historically optional on the wire and defaulted to
            // zero when absent.
            None => 0.0,
            Some(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidItemPrice(text))?,
        };
        items.push(Item {
            short_description: raw.short_description,
            price,
        });
    }

    let total = submission
        .total
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::MissingTotal)?;

    Ok(Receipt {
        retailer,
        purchase_date: Some(purchase_date),
        purchase_time: Some(purchase_time),
        items: Some(items),
        total,
    })
}

fn parse_date(raw: String) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidPurchaseDate(raw))
}

fn parse_time(raw: String) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidPurchaseTime(raw))
}
