use axum::extract::State;
use axum::routing::get;
use axum::Router;

use super::{ApiJson, ApiPath, ApiResult, AppState, Envelope, Reply};
use crate::category_actor::{CategoryCreate, CategoryPatch};
use crate::domain::Category;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let categories = state.categories.list_categories().await?;
    let total = categories.len();
    Ok(Reply::ok(Envelope::data("categories", categories).with_total(total)))
}

pub async fn get_category(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Category> {
    let category = state.categories.get_category(id).await?;
    Ok(Reply::ok(Envelope::data("category", category)))
}

pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CategoryCreate>,
) -> ApiResult<Category> {
    let category = state.categories.create_category(body).await?;
    Ok(Reply::created(
        Envelope::data("category", category).with_message("Category created successfully"),
    ))
}

pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<CategoryPatch>,
) -> ApiResult<Category> {
    let category = state.categories.update_category(id, patch).await?;
    Ok(Reply::ok(
        Envelope::data("category", category).with_message("Category updated successfully"),
    ))
}

/// Todos pointing at the category keep the id; there is no cascade.
pub async fn delete_category(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<()> {
    state.categories.delete_category(id).await?;
    Ok(Reply::ok(Envelope::message("Category deleted successfully")))
}
