//! Field checks shared by the entity hooks.

use crate::error::{StoreError, StoreResult};

/// Trimmed value of a required text field; absent or blank is a validation error.
pub fn required(field: &str, value: Option<String>) -> StoreResult<String> {
    non_blank(value).ok_or_else(|| StoreError::validation(format!("{field} is required")))
}

/// `Some` only when the value is present and not blank. Drives partial-update merges.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn non_negative_price(price: f64) -> StoreResult<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(StoreError::validation("price must be a non-negative number"))
    }
}

/// Minimal shape check; full address validation is left to the mail system.
pub fn email(value: String) -> StoreResult<String> {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(StoreError::validation(format!("'{value}' is not a valid email"))),
    }
}
