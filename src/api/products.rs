use axum::extract::State;
use axum::routing::get;
use axum::Router;

use super::{ApiJson, ApiPath, ApiResult, AppState, Envelope, Reply, SearchParams};
use crate::domain::Product;
use crate::product_actor::{ProductCreate, ProductPatch};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/search/products", get(list_products))
}

pub async fn list_products(
    State(state): State<AppState>,
    params: SearchParams,
) -> ApiResult<Vec<Product>> {
    let products = state.products.search_products(params.term()).await?;
    let total = products.len();
    Ok(Reply::ok(
        Envelope::data("products", products)
            .with_total(total)
            .with_query(params.echo()),
    ))
}

pub async fn get_product(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Product> {
    let product = state.products.get_product(id).await?;
    Ok(Reply::ok(Envelope::data("product", product)))
}

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProductCreate>,
) -> ApiResult<Product> {
    let product = state.products.create_product(body).await?;
    Ok(Reply::created(
        Envelope::data("product", product).with_message("Product created successfully"),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<ProductPatch>,
) -> ApiResult<Product> {
    let product = state.products.update_product(id, patch).await?;
    Ok(Reply::ok(
        Envelope::data("product", product).with_message("Product updated successfully"),
    ))
}

pub async fn delete_product(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<()> {
    state.products.delete_product(id).await?;
    Ok(Reply::ok(Envelope::message("Product deleted successfully")))
}
