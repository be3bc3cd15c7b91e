use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;

use super::{ApiJson, ApiPath, ApiResult, AppState, Envelope, Reply, SearchParams};
use crate::domain::Todo;
use crate::query::TodoFilter;
use crate::todo_actor::{TodoCreate, TodoPatch};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/active", get(list_active))
        .route("/api/todos/completed", get(list_completed))
        .route("/api/todos/overdue", get(list_overdue))
        .route("/api/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/api/todos/{id}/complete", post(complete_todo).put(complete_todo))
}

async fn filtered(state: &AppState, filter: TodoFilter, params: &SearchParams) -> ApiResult<Vec<Todo>> {
    let todos = state.todos.list_todos(filter, params.term(), Utc::now()).await?;
    let total = todos.len();
    Ok(Reply::ok(
        Envelope::data("todos", todos)
            .with_total(total)
            .with_query(params.echo()),
    ))
}

pub async fn list_todos(State(state): State<AppState>, params: SearchParams) -> ApiResult<Vec<Todo>> {
    filtered(&state, TodoFilter::All, &params).await
}

pub async fn list_active(State(state): State<AppState>, params: SearchParams) -> ApiResult<Vec<Todo>> {
    filtered(&state, TodoFilter::Active, &params).await
}

pub async fn list_completed(
    State(state): State<AppState>,
    params: SearchParams,
) -> ApiResult<Vec<Todo>> {
    filtered(&state, TodoFilter::Completed, &params).await
}

pub async fn list_overdue(State(state): State<AppState>, params: SearchParams) -> ApiResult<Vec<Todo>> {
    filtered(&state, TodoFilter::Overdue, &params).await
}

pub async fn get_todo(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Todo> {
    let todo = state.todos.get_todo(id).await?;
    Ok(Reply::ok(Envelope::data("todo", todo)))
}

pub async fn create_todo(State(state): State<AppState>, ApiJson(body): ApiJson<TodoCreate>) -> ApiResult<Todo> {
    let todo = state.todos.create_todo(body).await?;
    Ok(Reply::created(
        Envelope::data("todo", todo).with_message("Todo created successfully"),
    ))
}

pub async fn update_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<TodoPatch>,
) -> ApiResult<Todo> {
    let todo = state.todos.update_todo(id, patch).await?;
    Ok(Reply::ok(
        Envelope::data("todo", todo).with_message("Todo updated successfully"),
    ))
}

pub async fn delete_todo(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<()> {
    state.todos.delete_todo(id).await?;
    Ok(Reply::ok(Envelope::message("Todo deleted successfully")))
}

pub async fn complete_todo(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Todo> {
    let todo = state.todos.complete_todo(id).await?;
    Ok(Reply::ok(
        Envelope::data("todo", todo).with_message("Todo marked as completed"),
    ))
}
