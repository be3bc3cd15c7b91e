use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_PRODUCT_CATEGORY: &str = "General";

/// Represents a product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}
