use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tracing::info;

use super::{ApiError, ApiJson, ApiPath, ApiResult, AppState, Envelope, Reply, SearchParams};
use crate::domain::User;
use crate::user_actor::{UserCreate, UserPatch};
use crate::validation::required;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/api/search/users", get(search_users))
        .route("/api/login", post(login))
}

pub async fn list_users(State(state): State<AppState>, params: SearchParams) -> ApiResult<Vec<User>> {
    let users = state.users.search_users(params.term()).await?;
    let total = users.len();
    Ok(Reply::ok(
        Envelope::data("users", users)
            .with_total(total)
            .with_query(params.echo()),
    ))
}

pub async fn search_users(state: State<AppState>, params: SearchParams) -> ApiResult<Vec<User>> {
    list_users(state, params).await
}

pub async fn get_user(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<User> {
    let user = state.users.get_user(id).await?;
    Ok(Reply::ok(Envelope::data("user", user)))
}

pub async fn create_user(State(state): State<AppState>, ApiJson(body): ApiJson<UserCreate>) -> ApiResult<User> {
    let user = state.users.create_user(body).await?;
    info!(user_id = %user.id, "User created");
    Ok(Reply::created(
        Envelope::data("user", user).with_message("User created successfully"),
    ))
}

pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> ApiResult<User> {
    let user = state.users.update_user(id, patch).await?;
    Ok(Reply::ok(
        Envelope::data("user", user).with_message("User updated successfully"),
    ))
}

pub async fn delete_user(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<()> {
    state.users.delete_user(id).await?;
    Ok(Reply::ok(Envelope::message("User deleted successfully")))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Credential check only; no session is opened.
pub async fn login(State(state): State<AppState>, ApiJson(body): ApiJson<LoginRequest>) -> ApiResult<User> {
    let username = required("username", body.username)?;
    let password = required("password", body.password)?;
    let user = state
        .users
        .authenticate(username, password)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    let greeting = format!("Welcome back, {}!", user.display_name());
    Ok(Reply::ok(Envelope::data("user", user).with_message(greeting)))
}
