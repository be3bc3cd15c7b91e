use serde::Deserialize;

// DTOs for Product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCreate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}
