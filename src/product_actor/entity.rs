use std::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{Product, DEFAULT_PRODUCT_CATEGORY};
use crate::error::{StoreError, StoreResult};
use crate::validation::{non_blank, non_negative_price, required};

use super::dtos::{ProductCreate, ProductPatch};

impl Entity for Product {
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = Infallible;
    type ActionResult = ();

    const KIND: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Missing name or price, or a negative price.
    fn from_create(id: String, created_at: DateTime<Utc>, params: ProductCreate) -> StoreResult<Self> {
        let name = required("name", params.name)?;
        let price = params
            .price
            .ok_or_else(|| StoreError::validation("price is required"))
            .and_then(non_negative_price)?;
        Ok(Self {
            id,
            name,
            price,
            category: non_blank(params.category).unwrap_or_else(|| DEFAULT_PRODUCT_CATEGORY.to_string()),
            in_stock: params.in_stock.unwrap_or(true),
            created_at,
        })
    }

    /// Updates the product's fields.
    ///
    /// # Fields Updated
    /// - `name`, `category`: when non-empty
    /// - `price`: when supplied, must stay non-negative
    /// - `in_stock`: when supplied
    fn on_update(&mut self, patch: ProductPatch) -> StoreResult<()> {
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = non_negative_price(price)?;
        }
        if let Some(category) = non_blank(patch.category) {
            self.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> StoreResult<()> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> ProductCreate {
        ProductCreate {
            name: Some("Laptop".into()),
            price: Some(999.99),
            ..Default::default()
        }
    }

    #[test]
    fn create_defaults_category_and_stock() {
        let product = Product::from_create("p1".into(), Utc::now(), laptop()).unwrap();
        assert_eq!(product.category, "General");
        assert!(product.in_stock);
    }

    #[test]
    fn price_is_required_and_non_negative() {
        let no_price = ProductCreate {
            price: None,
            ..laptop()
        };
        assert_eq!(
            Product::from_create("p1".into(), Utc::now(), no_price).unwrap_err(),
            StoreError::Validation("price is required".into())
        );

        let negative = ProductCreate {
            price: Some(-1.0),
            ..laptop()
        };
        assert!(Product::from_create("p1".into(), Utc::now(), negative).is_err());

        let free = ProductCreate {
            price: Some(0.0),
            ..laptop()
        };
        assert!(Product::from_create("p1".into(), Utc::now(), free).is_ok());
    }

    #[test]
    fn patch_merges_supplied_fields() {
        let mut product = Product::from_create("p1".into(), Utc::now(), laptop()).unwrap();
        product
            .on_update(ProductPatch {
                price: Some(899.0),
                in_stock: Some(false),
                category: Some(String::new()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(product.price, 899.0);
        assert!(!product.in_stock);
        assert_eq!(product.category, "General");
        assert_eq!(product.name, "Laptop");
    }
}
