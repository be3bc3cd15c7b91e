use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::Product;
use crate::error::StoreResult;
use crate::product_actor::ProductCreate;
use crate::query::matches_query;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product {
    get: get_product,
    list: list_products,
    update: update_product,
    delete: delete_product,
});

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, product: ProductCreate) -> StoreResult<Product> {
        debug!("Sending request");
        self.inner.create(product).await
    }

    /// Name or category containing `q`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search_products(&self, q: Option<String>) -> StoreResult<Vec<Product>> {
        debug!("Sending request");
        self.inner.query(move |product: &Product| matches_query(product, q.as_deref())).await
    }
}
