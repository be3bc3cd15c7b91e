use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::Todo;
use crate::error::StoreResult;
use crate::query::{matches_query, TodoFilter};
use crate::todo_actor::{TodoAction, TodoCreate, TodoPatch};
use crate::validation::non_blank;

use super::{reference_error, CategoryClient};

/// Client for the Todo actor. Category references are checked against the
/// Category actor before a todo is written.
#[derive(Clone)]
pub struct TodoClient {
    inner: ResourceClient<Todo>,
    category_client: CategoryClient,
}

impl TodoClient {
    pub fn new(inner: ResourceClient<Todo>, category_client: CategoryClient) -> Self {
        Self {
            inner,
            category_client,
        }
    }

    async fn ensure_category(&self, category: Option<&String>) -> StoreResult<()> {
        if let Some(id) = non_blank(category.cloned()) {
            self.category_client
                .get_category(id.clone())
                .await
                .map_err(|e| reference_error("category", &id, e))?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_todo(&self, todo: TodoCreate) -> StoreResult<Todo> {
        debug!("Sending request");
        self.ensure_category(todo.category.as_ref()).await?;
        self.inner.create(todo).await
    }

    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: String) -> StoreResult<Todo> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_todo(&self, id: String, patch: TodoPatch) -> StoreResult<Todo> {
        debug!("Sending request");
        self.ensure_category(patch.category.as_ref()).await?;
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: String) -> StoreResult<()> {
        debug!("Sending request");
        self.inner.delete(id).await
    }

    /// Todos passing `filter` at `now` whose title or description contains `q`.
    #[instrument(skip(self))]
    pub async fn list_todos(
        &self,
        filter: TodoFilter,
        q: Option<String>,
        now: DateTime<Utc>,
    ) -> StoreResult<Vec<Todo>> {
        debug!("Sending request");
        self.inner
            .query(move |todo: &Todo| filter.matches(todo, now) && matches_query(todo, q.as_deref()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn complete_todo(&self, id: String) -> StoreResult<Todo> {
        debug!("Sending request");
        let todo = self.inner.perform_action(id, TodoAction::Complete).await?;
        info!(todo_id = %todo.id, "Todo completed");
        Ok(todo)
    }
}
