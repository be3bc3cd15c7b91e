use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_CATEGORY_COLOR: &str = "#808080";

/// A todo grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}
