use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::category_actor::CategoryCreate;
use crate::domain::Category;
use crate::error::StoreResult;

#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl_basic_client!(CategoryClient, Category {
    get: get_category,
    list: list_categories,
    update: update_category,
    delete: delete_category,
});

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, category: CategoryCreate) -> StoreResult<Category> {
        debug!("Sending request");
        self.inner.create(category).await
    }
}
